use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::values::TutorialId;

use super::helpers::tutorial_by_id;

pub fn run(session: &mut Session, id: &TutorialId) -> Result<CmdResult> {
    let tutorial = tutorial_by_id(session, id)?;
    session.delete_tutorial(&tutorial)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Deleted tutorial: {}",
            tutorial
        )))
        .with_affected(tutorial))
}
