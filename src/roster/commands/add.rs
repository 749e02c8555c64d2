use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::StudentStore;

pub fn run<S: StudentStore>(
    roster: &mut Roster<S>,
    id: &str,
    name: &str,
    age: u32,
    grade: &str,
) -> Result<CmdResult> {
    let student = roster.add(id, name, age, grade)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added: {} ({})",
        student.name, student.id
    )));
    result.listed_students.push(student);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_student_and_reports_success() {
        let (mut roster, _) = Roster::open(InMemoryStore::new());
        let result = run(&mut roster, "STU001", "Alice", 20, "A").unwrap();

        assert_eq!(result.listed_students.len(), 1);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn duplicate_id_propagates() {
        let (mut roster, _) = Roster::open(InMemoryStore::new());
        run(&mut roster, "STU001", "Alice", 20, "A").unwrap();

        let err = run(&mut roster, "STU001", "Bob", 19, "B").unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId(_)));
    }
}
