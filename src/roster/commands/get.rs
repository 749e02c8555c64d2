use crate::commands::CmdResult;
use crate::error::Result;
use crate::roster::Roster;
use crate::store::StudentStore;

pub fn run<S: StudentStore>(roster: &Roster<S>, id: &str) -> Result<CmdResult> {
    let student = roster.get(id)?.clone();
    Ok(CmdResult::default().with_listed_students(vec![student]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::store::memory::fixtures::RosterFixture;

    #[test]
    fn returns_the_requested_student() {
        let fixture = RosterFixture::new().with_student("STU001", "Alice", 20, "A");
        let result = run(&fixture.roster, "STU001").unwrap();

        assert_eq!(result.listed_students.len(), 1);
        assert_eq!(result.listed_students[0].name, "Alice");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let fixture = RosterFixture::new();
        assert!(matches!(
            run(&fixture.roster, "STU999"),
            Err(RosterError::NotFound(_))
        ));
    }
}
