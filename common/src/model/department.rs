use serde::{Deserialize, Serialize};

/// Value of the department select that reveals the free-text override.
pub const OTHERS: &str = "Others";

/// Departments offered by the store form, ending with the `OTHERS` escape.
pub const DEPARTMENTS: &[&str] = &[
    "Computer Science and Engineering",
    "Communication and Computer Engineering",
    "Electronics and Communication Engineering",
    "Mechanical-Mechatronics Engineering",
    "Physics",
    "Mathematics",
    "Humanities and Social Sciences",
    OTHERS,
];

/// The requester's department.
///
/// `Named` holds either a listed department or free text (lab form).
/// `Other` is the escape choice and carries the typed override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Named(String),
    Other(String),
}

impl Default for Department {
    fn default() -> Self {
        Department::Named(String::new())
    }
}

impl Department {
    /// Applies the value of the department select or text box. Choosing
    /// `OTHERS` keeps an override already typed; any other value clears it.
    pub fn choose(self, value: String) -> Self {
        match self {
            other @ Department::Other(_) if value == OTHERS => other,
            _ if value == OTHERS => Department::Other(String::new()),
            _ => Department::Named(value),
        }
    }

    /// Sets the free-text override. Ignored unless `OTHERS` is chosen.
    pub fn set_override(self, text: String) -> Self {
        match self {
            Department::Other(_) => Department::Other(text),
            named => named,
        }
    }

    /// Value shown in the department select.
    pub fn choice(&self) -> &str {
        match self {
            Department::Named(name) => name,
            Department::Other(_) => OTHERS,
        }
    }

    pub fn override_text(&self) -> Option<&str> {
        match self {
            Department::Other(text) => Some(text),
            Department::Named(_) => None,
        }
    }

    /// The department as submitted: the override replaces the escape value.
    pub fn resolved(&self) -> &str {
        match self {
            Department::Named(name) => name,
            Department::Other(text) => text,
        }
    }
}
