//! # Storage Layer
//!
//! This module defines the storage abstraction for roster. The
//! [`StudentStore`] trait lets the record store work with different backends.
//!
//! ## Design Rationale
//!
//! Putting a trait at this seam keeps the record-store core free of any
//! filesystem knowledge: tests run against `InMemoryStore`, production runs
//! against `FileStore`, and a different backend (sqlite, remote) would slot
//! in without touching the core.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The full record set lives in a single JSON file (`students.json` by
//!     default, configurable via `config.json`)
//!   - Every write replaces the whole file
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! For `FileStore`, the backing file is a pretty-printed JSON array of
//! records, each with exactly the keys `id`, `name`, `age`, `grade`:
//!
//! ```text
//! [
//!   {
//!     "id": "STU001",
//!     "name": "Alice",
//!     "age": 20,
//!     "grade": "A"
//!   }
//! ]
//! ```
//!
//! The file is opened, fully read or fully rewritten, and closed within a
//! single operation. Nothing guards against a second process writing the
//! same file; the last writer wins.

use crate::error::Result;
use crate::model::Student;

pub mod fs;
pub mod memory;

/// Abstract interface for persisting the roster's record set.
///
/// Implementations deal in whole record sets: the roster keeps its own
/// in-memory map and pushes a full snapshot on every mutation.
pub trait StudentStore {
    /// Read every persisted record, in file order.
    /// A backing file that does not exist yet reads as an empty set.
    fn read_all(&self) -> Result<Vec<Student>>;

    /// Replace the persisted record set with `students`.
    fn write_all(&mut self, students: &[Student]) -> Result<()>;
}
