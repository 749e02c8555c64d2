use super::StudentStore;
use crate::error::{Result, RosterError};
use crate::model::Student;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    students: Vec<Student>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `write_all` fail, to exercise persistence-failure paths.
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Seed the store with records as if they had been persisted earlier.
    pub fn with_students(mut self, students: Vec<Student>) -> Self {
        self.students = students;
        self
    }
}

impl StudentStore for InMemoryStore {
    fn read_all(&self) -> Result<Vec<Student>> {
        Ok(self.students.clone())
    }

    fn write_all(&mut self, students: &[Student]) -> Result<()> {
        if self.fail_writes {
            return Err(RosterError::Store("writes are disabled".to_string()));
        }
        self.students = students.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::roster::Roster;

    /// A roster over an in-memory store, pre-populated for tests.
    pub struct RosterFixture {
        pub roster: Roster<InMemoryStore>,
    }

    impl Default for RosterFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RosterFixture {
        pub fn new() -> Self {
            let (roster, _) = Roster::open(InMemoryStore::new());
            Self { roster }
        }

        pub fn with_student(mut self, id: &str, name: &str, age: u32, grade: &str) -> Self {
            self.roster.add(id, name, age, grade).unwrap();
            self
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = format!("STU{:03}", i + 1);
                let name = format!("Student {}", i + 1);
                self.roster.add(id, name, 18 + (i as u32 % 10), "A").unwrap();
            }
            self
        }
    }
}
