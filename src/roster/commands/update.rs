use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::{Roster, StudentUpdate};
use crate::store::StudentStore;

pub fn run<S: StudentStore>(
    roster: &mut Roster<S>,
    id: &str,
    update: &StudentUpdate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if update.is_empty() {
        result.add_message(CmdMessage::info(format!("Nothing to update for {}", id)));
        return Ok(result);
    }

    let student = roster.update(id, update)?;
    result.add_message(CmdMessage::success(format!(
        "Student updated: {} ({})",
        student.name, student.id
    )));
    result.listed_students.push(student);
    Ok(result)
}
