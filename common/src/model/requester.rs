use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role of the person requesting items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequesterCategory {
    Student,
    Faculty,
    Staff,
}

impl RequesterCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RequesterCategory::Student => "Student",
            RequesterCategory::Faculty => "Faculty",
            RequesterCategory::Staff => "Staff",
        }
    }

    /// Label of the identifier field: roll number for students, employee
    /// number otherwise.
    pub fn identifier_label(&self) -> &'static str {
        match self {
            RequesterCategory::Student => "Roll Number",
            RequesterCategory::Faculty | RequesterCategory::Staff => "Employee ID",
        }
    }
}

impl fmt::Display for RequesterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequesterCategory::Student => f.write_str("student"),
            RequesterCategory::Faculty => f.write_str("faculty"),
            RequesterCategory::Staff => f.write_str("staff"),
        }
    }
}

impl FromStr for RequesterCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(RequesterCategory::Student),
            "faculty" => Ok(RequesterCategory::Faculty),
            "staff" => Ok(RequesterCategory::Staff),
            other => Err(format!("unknown requester category '{}'", other)),
        }
    }
}

/// Requester category together with the fields only that category carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requester {
    Student { instructor: String },
    Faculty,
    Staff,
}

impl Default for Requester {
    fn default() -> Self {
        Requester::Student {
            instructor: String::new(),
        }
    }
}

impl Requester {
    pub fn category(&self) -> RequesterCategory {
        match self {
            Requester::Student { .. } => RequesterCategory::Student,
            Requester::Faculty => RequesterCategory::Faculty,
            Requester::Staff => RequesterCategory::Staff,
        }
    }

    /// Moves to `category`. Staying a student keeps the instructor name;
    /// leaving the student category drops it.
    pub fn switch_to(self, category: RequesterCategory) -> Self {
        match (self, category) {
            (student @ Requester::Student { .. }, RequesterCategory::Student) => student,
            (_, RequesterCategory::Student) => Requester::default(),
            (_, RequesterCategory::Faculty) => Requester::Faculty,
            (_, RequesterCategory::Staff) => Requester::Staff,
        }
    }

    pub fn instructor(&self) -> Option<&str> {
        match self {
            Requester::Student { instructor } => Some(instructor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_student_drops_instructor() {
        let requester = Requester::Student {
            instructor: "Dr. Mehta".into(),
        };
        let faculty = requester.switch_to(RequesterCategory::Faculty);
        assert_eq!(faculty, Requester::Faculty);
        assert_eq!(
            faculty.switch_to(RequesterCategory::Student).instructor(),
            Some("")
        );
    }

    #[test]
    fn reselecting_student_keeps_instructor() {
        let requester = Requester::Student {
            instructor: "Dr. Mehta".into(),
        };
        let same = requester.switch_to(RequesterCategory::Student);
        assert_eq!(same.instructor(), Some("Dr. Mehta"));
    }
}
