use crate::commands::{CmdMessage, CmdResult};
use crate::roster::Roster;
use crate::session::Session;

pub fn run(session: &mut Session) -> CmdResult {
    let removed = session.roster().len();
    session.replace_roster(Roster::new());
    CmdResult::default().with_message(CmdMessage::success(format!(
        "Roster cleared ({} tutorial{} removed)",
        removed,
        if removed == 1 { "" } else { "s" }
    )))
}
