//! # API Facade
//!
//! The API layer is a thin facade over the command layer: the single entry
//! point for all roster operations, regardless of the UI being used.
//!
//! It dispatches to command functions and returns structured
//! `Result<CmdResult>` values. It performs no I/O, no formatting, and no
//! business logic of its own — that belongs in `commands/*.rs` and the
//! [`Roster`] core.
//!
//! ## Generic Over StudentStore
//!
//! `RosterApi<S: StudentStore>` is generic over the storage backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::passgen::CharClass;
use crate::roster::{LoadOutcome, Roster, StudentUpdate};
use crate::store::StudentStore;

/// The main API facade for roster operations.
///
/// All UI clients (CLI, tests, future frontends) interact through this API.
pub struct RosterApi<S: StudentStore> {
    roster: Roster<S>,
}

impl<S: StudentStore> RosterApi<S> {
    /// Open the roster over `store`. The outcome reports how the initial
    /// load went; an abandoned load still yields a usable (empty) API.
    pub fn open(store: S) -> (Self, LoadOutcome) {
        let (roster, outcome) = Roster::open(store);
        (Self { roster }, outcome)
    }

    pub fn add_student(
        &mut self,
        id: &str,
        name: &str,
        age: u32,
        grade: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.roster, id, name, age, grade)
    }

    pub fn get_student(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.roster, id)
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.roster)
    }

    pub fn update_student(
        &mut self,
        id: &str,
        update: &StudentUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.roster, id, update)
    }

    pub fn delete_student(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.roster, id)
    }

    pub fn statistics(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.roster)
    }

    pub fn generate_passwords(
        &self,
        count: usize,
        length: usize,
        classes: &[CharClass],
    ) -> Result<commands::CmdResult> {
        commands::passwd::run(count, length, classes)
    }

    /// Re-read the record set from the backing store.
    pub fn reload(&mut self) -> LoadOutcome {
        self.roster.load()
    }

    /// Force a full rewrite of the backing store.
    pub fn save(&mut self) -> Result<()> {
        self.roster.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn dispatches_through_the_full_surface() {
        let (mut api, outcome) = RosterApi::open(InMemoryStore::new());
        assert!(matches!(outcome, LoadOutcome::Loaded(0)));

        api.add_student("STU001", "Alice", 20, "A").unwrap();
        assert_eq!(api.get_student("STU001").unwrap().listed_students.len(), 1);
        api.update_student("STU001", &StudentUpdate::new().age(21))
            .unwrap();
        assert_eq!(api.list_students().unwrap().listed_students[0].age, 21);
        assert!(api.statistics().unwrap().statistics.is_some());
        api.delete_student("STU001").unwrap();
        assert!(api.list_students().unwrap().listed_students.is_empty());
    }

    #[test]
    fn password_generation_needs_no_store_state() {
        let (api, _) = RosterApi::open(InMemoryStore::new());
        let result = api.generate_passwords(2, 8, &[CharClass::Digits]).unwrap();
        assert_eq!(result.passwords.len(), 2);
    }
}
