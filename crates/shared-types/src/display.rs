use serde::{Deserialize, Serialize};

/// Display structure produced from a loaded dashboard payload.
///
/// Built by [`crate::Envelope::render`]. Absent data shows up as blank
/// strings and empty sections, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub heading: String,
    pub id_label: String,
    pub id_value: String,
    pub sections: Vec<DisplaySection>,
}

impl DashboardView {
    /// Look up a section by title.
    pub fn section(&self, title: &str) -> Option<&DisplaySection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// One titled block of a dashboard: free text, line items, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

impl DisplaySection {
    pub fn list(title: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            title: title.into(),
            text: None,
            items,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.text.as_deref().map_or(true, str::is_empty)
    }
}

/// Map an optional sequence to display lines, treating absence as empty.
pub(crate) fn lines<T>(items: &Option<Vec<T>>, line: impl Fn(&T) -> String) -> Vec<String> {
    items.as_deref().unwrap_or_default().iter().map(line).collect()
}

/// Append ` - {label}: {value}` when an optional detail is present.
pub(crate) fn suffix(line: &mut String, label: &str, value: &Option<crate::Scalar>) {
    if let Some(v) = value {
        let v = v.to_string();
        if !v.is_empty() {
            line.push_str(&format!(" - {label}: {v}"));
        }
    }
}
