use crate::commands::CmdResult;
use crate::error::{Result, RosterError};
use crate::passgen::{self, CharClass};

pub fn run(count: usize, length: usize, classes: &[CharClass]) -> Result<CmdResult> {
    let passwords = passgen::generate_many(count, length, classes)
        .map_err(|e| RosterError::Validation(e.to_string()))?;

    let mut result = CmdResult::default();
    result.passwords = passwords;
    Ok(result)
}
