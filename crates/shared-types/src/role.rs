use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three audiences the clinic interface serves.
///
/// The lower-case key doubles as the client route prefix and the backend
/// endpoint segment (`/patient/{id}` and `/api/patient/{id}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Clinician,
    Admin,
}

/// All roles in menu order.
pub const ALL_ROLES: &[Role] = &[Role::Patient, Role::Clinician, Role::Admin];

impl Role {
    /// Route and endpoint key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Clinician => "clinician",
            Role::Admin => "admin",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Clinician => "Clinician",
            Role::Admin => "Admin",
        }
    }

    /// Label of the menu button that selects this role.
    pub fn menu_label(&self) -> &'static str {
        match self {
            Role::Patient => "Patient Interface",
            Role::Clinician => "Clinician Interface",
            Role::Admin => "Administrator Interface",
        }
    }

    pub fn dashboard_heading(&self) -> &'static str {
        match self {
            Role::Patient => "Patient Dashboard",
            Role::Clinician => "Clinician Dashboard",
            Role::Admin => "Admin Dashboard",
        }
    }

    pub fn id_label(&self) -> &'static str {
        match self {
            Role::Patient => "Patient ID",
            Role::Clinician => "Clinician ID",
            Role::Admin => "Admin ID",
        }
    }

    /// Parse a route key. Keys are case-sensitive, matching the routes.
    pub fn from_key(s: &str) -> Option<Self> {
        ALL_ROLES.iter().copied().find(|r| r.as_str() == s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the three roles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_key(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}
