use crate::commands::CmdResult;
use crate::error::Result;
use crate::roster::Roster;
use crate::store::StudentStore;

pub fn run<S: StudentStore>(roster: &Roster<S>) -> Result<CmdResult> {
    let students = roster.list().into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_students(students))
}
