use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::StudentStore;

pub fn run<S: StudentStore>(roster: &mut Roster<S>, id: &str) -> Result<CmdResult> {
    let student = roster.delete(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student deleted: {} ({})",
        student.name, student.id
    )));
    result.listed_students.push(student);
    Ok(result)
}
