use crate::commands::{CmdMessage, CmdResult, EditTarget};
use crate::error::{Result, TutzError};
use crate::model::TutorialPatch;
use crate::session::Session;

use super::helpers::resolve_target;

/// Merges `patch` over the target tutorial and swaps the result in place.
///
/// Students are not editable here; use `add_student` / `delete_student`.
pub fn run(session: &mut Session, target: &EditTarget, patch: &TutorialPatch) -> Result<CmdResult> {
    if patch.is_empty() {
        return Err(TutzError::NoFieldsEdited);
    }

    let current = resolve_target(session, target)?;
    let edited = patch.apply(&current);
    session.set_tutorial(&current, edited.clone())?;

    let mut result = CmdResult::default();
    if edited == current {
        result.add_message(CmdMessage::info(format!(
            "Tutorial {} unchanged: {}",
            target, edited
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Edited tutorial: {}",
            edited
        )));
    }
    Ok(result.with_affected(edited))
}
