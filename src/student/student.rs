//! The student record

use crate::types::StudentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A student who can reside in a campus house
///
/// Identity is carried by the id field: roster operations treat two records
/// with the same id as the same student regardless of the other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// The student's name
    pub name: String,
    /// Registrar-issued identifier
    pub id: StudentId,
    /// The student's age in years
    pub age: u32,
}

impl Student {
    /// Create a new student record
    pub fn new(name: impl Into<String>, id: impl Into<StudentId>, age: u32) -> Self {
        Self { name: name.into(), id: id.into(), age }
    }

    /// Create a placeholder record when only a name is known
    ///
    /// Mirrors the by-name move-in convenience: the id is derived from the
    /// name, so two placeholders for the same name identify the same student.
    pub fn with_name_only(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = StudentId::new(format!("NAME_{}", name.to_uppercase().replace(' ', "_")));
        Self { name, id, age: 0 }
    }

    /// Whether this record refers to the same student as another
    pub fn is_same_student(&self, other: &Student) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_creation() {
        let student = Student::new("Tabz", "S1234", 20);
        assert_eq!(student.name, "Tabz");
        assert_eq!(student.id, StudentId::new("S1234"));
        assert_eq!(student.age, 20);
        assert_eq!(student.to_string(), "Tabz (S1234)");
    }

    #[test]
    fn test_identity_is_the_id() {
        let a = Student::new("Tabz", "S1234", 20);
        let b = Student::new("Tabitha", "S1234", 21);
        let c = Student::new("Tabz", "S5678", 20);

        assert!(a.is_same_student(&b));
        assert!(!a.is_same_student(&c));
    }

    #[test]
    fn test_name_only_placeholder_is_stable() {
        let a = Student::with_name_only("Clare");
        let b = Student::with_name_only("Clare");
        assert!(a.is_same_student(&b));
        assert_eq!(a.id.as_str(), "NAME_CLARE");
    }

    #[test]
    fn test_student_serialization() {
        let student = Student::new("Githinji", "S6789", 21);
        let json = serde_json::to_string(&student).unwrap();
        let parsed: Student = serde_json::from_str(&json).unwrap();
        assert_eq!(student, parsed);
    }
}
