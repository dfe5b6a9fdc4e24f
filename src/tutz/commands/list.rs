use crate::commands::{CmdMessage, CmdResult};
use crate::session::Session;

pub fn run(session: &mut Session) -> CmdResult {
    session.show_all();
    let message = if session.filtered().is_empty() {
        "No tutorials yet".to_string()
    } else {
        let shown = session.filtered().len();
        format!(
            "Listed all {} tutorial{}",
            shown,
            if shown == 1 { "" } else { "s" }
        )
    };
    CmdResult::default().with_message(CmdMessage::info(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::tutorial;
    use crate::predicate::TutorialPredicate;
    use crate::roster::Roster;

    #[test]
    fn resets_to_full_roster() {
        let roster = Roster::from_tutorials(vec![
            tutorial("T01", "CS2103T", "2025-01-10", &[]),
            tutorial("T02", "MA1521", "2025-01-11", &[]),
        ])
        .unwrap();
        let mut session = Session::with_roster(roster.clone());
        session.set_predicate(TutorialPredicate::IdEquals("T02".parse().unwrap()));

        let result = run(&mut session);
        assert_eq!(session.filtered(), roster.tutorials());
        assert_eq!(result.feedback(), "Listed all 2 tutorials");
    }

    #[test]
    fn single_tutorial_is_not_pluralized() {
        let roster =
            Roster::from_tutorials(vec![tutorial("T01", "CS2103T", "2025-01-10", &[])]).unwrap();
        let mut session = Session::with_roster(roster);
        assert_eq!(run(&mut session).feedback(), "Listed all 1 tutorial");
    }
}
