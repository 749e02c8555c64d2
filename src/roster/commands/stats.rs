use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::StudentStore;

pub fn run<S: StudentStore>(roster: &Roster<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match roster.statistics() {
        Some(stats) => result.statistics = Some(stats),
        None => result.add_message(CmdMessage::info("No students in the roster.")),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::RosterFixture;

    #[test]
    fn reports_statistics_when_populated() {
        let fixture = RosterFixture::new()
            .with_student("STU001", "Alice", 20, "A")
            .with_student("STU002", "Bob", 19, "B");

        let result = run(&fixture.roster).unwrap();
        let stats = result.statistics.unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.average_age, 19.5);
    }

    #[test]
    fn empty_roster_reports_a_message_instead() {
        let fixture = RosterFixture::new();
        let result = run(&fixture.roster).unwrap();
        assert!(result.statistics.is_none());
        assert_eq!(result.messages.len(), 1);
    }
}
