use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Tutorial;
use crate::session::Session;

pub fn run(session: &mut Session, tutorial: Tutorial) -> Result<CmdResult> {
    session.add_tutorial(tutorial.clone())?;
    session.show_all();

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "New tutorial added: {}",
            tutorial
        )))
        .with_affected(tutorial))
}
