use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TutzError};
use crate::model::Tutorial;
use crate::session::Session;
use crate::values::{TutorialDate, TutorialId};

use super::helpers::tutorial_by_id;

/// Creates `new_id` on `date` with the source's module code and students.
///
/// Students are copied by value, so attendance in the copy evolves
/// independently of the source.
pub fn run(
    session: &mut Session,
    new_id: TutorialId,
    source_id: &TutorialId,
    date: TutorialDate,
) -> Result<CmdResult> {
    let source = tutorial_by_id(session, source_id)?;
    if session.tutorial(&new_id).is_some() {
        return Err(TutzError::DuplicateTutorial(new_id.to_string()));
    }

    let copy = Tutorial::new(
        new_id,
        source.module().clone(),
        date,
        source.students().to_vec(),
    );
    session.add_tutorial(copy.clone())?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Copied tutorial {} to {} ({} students)",
            source.id(),
            copy,
            copy.students().len()
        )))
        .with_affected(copy))
}
