use crate::commands::{CmdMessage, CmdResult};
use crate::predicate::TutorialPredicate;
use crate::session::Session;

pub fn run(session: &mut Session, predicate: TutorialPredicate) -> CmdResult {
    session.set_predicate(predicate);
    let shown = session.filtered().len();
    CmdResult::default().with_message(CmdMessage::info(format!(
        "{} tutorial{} listed",
        shown,
        if shown == 1 { "" } else { "s" }
    )))
}
