use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};

/// Upper bound for a plausible age. Ages are validated against this on
/// construction, on update, and again when records come back off disk.
pub const MAX_AGE: u32 = 150;

/// A single student record. The `id` is the primary key for the roster.
///
/// `deny_unknown_fields` keeps the data file honest: an entry carrying keys
/// other than `id`/`name`/`age`/`grade` fails deserialization, which the
/// roster treats as a malformed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub grade: String,
}

impl Student {
    /// Build a validated student. Fields are stored as given; callers are
    /// expected to trim user input before handing it over.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        grade: impl Into<String>,
    ) -> Result<Self> {
        let student = Self {
            id: id.into(),
            name: name.into(),
            age,
            grade: grade.into(),
        };
        student.validate()?;
        Ok(student)
    }

    /// Check field constraints. Whitespace-only strings count as empty.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(RosterError::Validation(
                "Student ID cannot be empty".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(RosterError::Validation(
                "Student name cannot be empty".to_string(),
            ));
        }
        if self.age > MAX_AGE {
            return Err(RosterError::Validation(format!(
                "Age must be between 0 and {}",
                MAX_AGE
            )));
        }
        if self.grade.trim().is_empty() {
            return Err(RosterError::Validation("Grade cannot be empty".to_string()));
        }
        Ok(())
    }
}
