//! The record store core: a keyed, validated, persisted collection of
//! students.
//!
//! [`Roster`] owns an in-memory map from student ID to record plus the
//! storage backend it loads from and saves to. Every successful mutation
//! pushes a full snapshot to the backend before returning; lookups never
//! touch storage.

use crate::error::{Result, RosterError};
use crate::model::Student;
use crate::store::StudentStore;
use std::collections::{BTreeMap, HashMap};

/// Result of (re)loading the roster from its backing store.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Records read from the backing store (0 when no file existed yet).
    Loaded(usize),
    /// The backing store was unreadable or held invalid records; the roster
    /// is empty and the file is left untouched until the next save.
    Abandoned(RosterError),
}

/// Aggregate figures over the current record set.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub average_age: f64,
    pub min_age: u32,
    pub max_age: u32,
    /// Students per grade label, ordered by grade.
    pub grade_counts: BTreeMap<String, usize>,
}

/// Field changes for [`Roster::update`]. `None` means "keep current value";
/// so does a supplied-but-blank string, matching the interactive convention
/// of pressing Enter to keep a field.
#[derive(Debug, Clone, Default)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub grade: Option<String>,
}

impl StudentUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.grade.is_none()
    }
}

fn filled(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

pub struct Roster<S: StudentStore> {
    store: S,
    students: HashMap<String, Student>,
}

impl<S: StudentStore> Roster<S> {
    /// Open a roster over `store`, loading whatever it holds.
    pub fn open(store: S) -> (Self, LoadOutcome) {
        let mut roster = Self {
            store,
            students: HashMap::new(),
        };
        let outcome = roster.load();
        (roster, outcome)
    }

    /// (Re)load the full record set from the backing store.
    ///
    /// All-or-nothing: a read/parse failure, a record failing validation, or
    /// a duplicate ID abandons the whole load and leaves the roster empty.
    pub fn load(&mut self) -> LoadOutcome {
        self.students.clear();
        let records = match self.store.read_all() {
            Ok(records) => records,
            Err(e) => return LoadOutcome::Abandoned(e),
        };

        let mut students = HashMap::with_capacity(records.len());
        for student in records {
            if let Err(e) = student.validate() {
                return LoadOutcome::Abandoned(e);
            }
            let id = student.id.clone();
            if students.insert(id.clone(), student).is_some() {
                return LoadOutcome::Abandoned(RosterError::DuplicateId(id));
            }
        }

        let count = students.len();
        self.students = students;
        LoadOutcome::Loaded(count)
    }

    /// Write the current record set to the backing store, sorted by ID.
    /// In-memory state is unaffected by a write failure.
    pub fn save(&mut self) -> Result<()> {
        let snapshot = self.snapshot();
        self.store.write_all(&snapshot)
    }

    /// Add a new student. Rejects duplicates and invalid fields before any
    /// mutation. A failed save is returned as an error, but the in-memory
    /// insert is kept; the next successful save reconciles the file.
    pub fn add(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        grade: impl Into<String>,
    ) -> Result<Student> {
        let student = Student::new(id, name, age, grade)?;
        if self.students.contains_key(&student.id) {
            return Err(RosterError::DuplicateId(student.id));
        }
        self.students.insert(student.id.clone(), student.clone());
        self.save()?;
        Ok(student)
    }

    /// Look up a student by ID.
    pub fn get(&self, id: &str) -> Result<&Student> {
        self.students
            .get(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    /// Apply `update` to the student with `id`. Changes are made on a copy
    /// and re-validated as a whole; a rejected update mutates nothing.
    pub fn update(&mut self, id: &str, update: &StudentUpdate) -> Result<Student> {
        let current = self
            .students
            .get(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        let mut updated = current.clone();
        if let Some(name) = filled(&update.name) {
            updated.name = name.to_string();
        }
        if let Some(age) = update.age {
            updated.age = age;
        }
        if let Some(grade) = filled(&update.grade) {
            updated.grade = grade.to_string();
        }
        updated.validate()?;

        self.students.insert(id.to_string(), updated.clone());
        self.save()?;
        Ok(updated)
    }

    /// Remove and return the student with `id`.
    pub fn delete(&mut self, id: &str) -> Result<Student> {
        let student = self
            .students
            .remove(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        self.save()?;
        Ok(student)
    }

    /// All students, sorted by ID ascending.
    pub fn list(&self) -> Vec<&Student> {
        let mut students: Vec<&Student> = self.students.values().collect();
        students.sort_by(|a, b| a.id.cmp(&b.id));
        students
    }

    /// Aggregate figures over the current record set, or `None` when the
    /// roster is empty.
    pub fn statistics(&self) -> Option<Statistics> {
        if self.students.is_empty() {
            return None;
        }

        let mut sum: u64 = 0;
        let mut min_age = u32::MAX;
        let mut max_age = 0;
        let mut grade_counts: BTreeMap<String, usize> = BTreeMap::new();

        for student in self.students.values() {
            sum += u64::from(student.age);
            min_age = min_age.min(student.age);
            max_age = max_age.max(student.age);
            *grade_counts.entry(student.grade.clone()).or_insert(0) += 1;
        }

        Some(Statistics {
            count: self.students.len(),
            average_age: sum as f64 / self.students.len() as f64,
            min_age,
            max_age,
            grade_counts,
        })
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn snapshot(&self) -> Vec<Student> {
        let mut students: Vec<Student> = self.students.values().cloned().collect();
        students.sort_by(|a, b| a.id.cmp(&b.id));
        students
    }
}
