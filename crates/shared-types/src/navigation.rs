use crate::Role;
use serde::{Deserialize, Serialize};

/// A dashboard destination produced by the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTarget {
    pub role: Role,
    /// Opaque identifier, passed through untouched.
    pub id: String,
}

impl RouteTarget {
    pub fn new(role: Role, id: impl Into<String>) -> Self {
        Self {
            role,
            id: id.into(),
        }
    }

    /// Client route path, `/{role}/{id}`.
    pub fn path(&self) -> String {
        format!("/{}/{}", self.role, self.id)
    }
}

/// Form state behind the landing menu.
///
/// A submission only yields a target once a role is selected and the
/// identifier is non-empty. The identifier's contents are not otherwise
/// validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuForm {
    role: Option<Role>,
    id: String,
}

impl MenuForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, role: Role) {
        self.role = Some(role);
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Prompt shown above the identifier input once a role is chosen.
    pub fn prompt(&self) -> Option<String> {
        self.role.map(|r| format!("Enter {} ID:", r.as_str()))
    }

    pub fn submit(&self) -> Option<RouteTarget> {
        let role = self.role?;
        if self.id.is_empty() {
            return None;
        }
        Some(RouteTarget::new(role, self.id.clone()))
    }
}
