use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A loosely typed leaf value from a dashboard payload.
///
/// The backend is free to send identifiers, severities and statistics as
/// strings or numbers, so leaves are kept as raw JSON and only formatted at
/// display time. Strings print verbatim, numbers print in shortest form with
/// no trailing `.0` and `null` prints as nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scalar(pub Value);

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::Null => Ok(()),
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    write!(f, "{i}")
                } else if let Some(u) = n.as_u64() {
                    write!(f, "{u}")
                } else {
                    f.write_str(&float_text(n.as_f64().unwrap_or_default()))
                }
            }
            other => write!(f, "{other}"),
        }
    }
}

/// Shortest round-trip text for a float, switching to exponent form outside
/// `1e-6 <= |v| < 1e21` the way script number-to-string does.
fn float_text(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let magnitude = v.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{v:e}");
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        };
    }
    if v == 0.0 {
        // -0 prints as 0.
        "0".to_string()
    } else if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        v.to_string()
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar(Value::String(s.to_string()))
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar(Value::String(s))
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar(Value::from(n))
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar(Value::from(n))
    }
}

/// Display an optional leaf, rendering absence as a blank.
pub fn blank_if_absent(value: &Option<Scalar>) -> String {
    value.as_ref().map(Scalar::to_string).unwrap_or_default()
}
