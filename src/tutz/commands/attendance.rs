use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::values::{StudentId, TutorialId};

use super::helpers::{join_ids, tutorial_by_id};

pub fn mark(session: &mut Session, id: &TutorialId, students: &[StudentId]) -> Result<CmdResult> {
    set_attendance(session, id, students, true)
}

pub fn unmark(session: &mut Session, id: &TutorialId, students: &[StudentId]) -> Result<CmdResult> {
    set_attendance(session, id, students, false)
}

pub fn mark_all(session: &mut Session, id: &TutorialId) -> Result<CmdResult> {
    set_all_attendance(session, id, true)
}

pub fn unmark_all(session: &mut Session, id: &TutorialId) -> Result<CmdResult> {
    set_all_attendance(session, id, false)
}

fn verb(present: bool) -> &'static str {
    if present {
        "marked"
    } else {
        "unmarked"
    }
}

/// Splits the requested students into changed / already in state / not
/// enrolled, applies the changes as one tutorial replacement, and reports
/// every group.
fn set_attendance(
    session: &mut Session,
    id: &TutorialId,
    students: &[StudentId],
    present: bool,
) -> Result<CmdResult> {
    let tutorial = tutorial_by_id(session, id)?;

    let mut changed: Vec<&StudentId> = Vec::new();
    let mut unchanged: Vec<&StudentId> = Vec::new();
    let mut not_enrolled: Vec<&StudentId> = Vec::new();
    for student_id in students {
        if changed.contains(&student_id)
            || unchanged.contains(&student_id)
            || not_enrolled.contains(&student_id)
        {
            continue;
        }
        match tutorial.student(student_id) {
            Some(s) if s.present == present => unchanged.push(student_id),
            Some(_) => changed.push(student_id),
            None => not_enrolled.push(student_id),
        }
    }

    let mut result = CmdResult::default();
    if !changed.is_empty() {
        let students = tutorial
            .students()
            .iter()
            .map(|s| {
                if changed.contains(&&s.id) {
                    s.with_attendance(present)
                } else {
                    s.clone()
                }
            })
            .collect();
        let updated = tutorial.with_students(students);
        session.set_tutorial(&tutorial, updated.clone())?;

        result.add_message(CmdMessage::success(format!(
            "Successfully {} in {}: {}",
            verb(present),
            id,
            join_ids(changed.iter().copied())
        )));
        result.affected.push(updated);
    }
    if !unchanged.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Already {} in {}: {}",
            verb(present),
            id,
            join_ids(unchanged.iter().copied())
        )));
    }
    if !not_enrolled.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Not enrolled in {}: {}",
            id,
            join_ids(not_enrolled.iter().copied())
        )));
    }
    if result.messages.is_empty() {
        result.add_message(CmdMessage::info(format!("No students given for {}", id)));
    }
    Ok(result)
}

fn set_all_attendance(session: &mut Session, id: &TutorialId, present: bool) -> Result<CmdResult> {
    let tutorial = tutorial_by_id(session, id)?;

    if tutorial.students().is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "{} has no students enrolled",
            id
        ))));
    }

    let students = tutorial
        .students()
        .iter()
        .map(|s| s.with_attendance(present))
        .collect();
    let updated = tutorial.with_students(students);
    session.set_tutorial(&tutorial, updated.clone())?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "All {} students in {} {}",
            updated.students().len(),
            id,
            verb(present)
        )))
        .with_affected(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ErrorKind;
    use crate::model::fixtures::tutorial;
    use crate::roster::Roster;

    fn session() -> Session {
        Session::with_roster(
            Roster::from_tutorials(vec![tutorial(
                "T01",
                "CS2103T",
                "2025-01-10",
                &["A0000001X", "A0000002Y"],
            )])
            .unwrap(),
        )
    }

    fn ids(raw: &[&str]) -> Vec<StudentId> {
        raw.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn t01() -> TutorialId {
        "T01".parse().unwrap()
    }

    fn present(session: &Session, student: &str) -> bool {
        session
            .tutorial(&t01())
            .unwrap()
            .student(&student.parse().unwrap())
            .unwrap()
            .present
    }

    #[test]
    fn mark_reports_changed_and_not_enrolled() {
        let mut session = session();
        let result = mark(&mut session, &t01(), &ids(&["A0000001X", "A0000003Z"])).unwrap();

        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("A0000001X"));
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert!(result.messages[1].content.contains("A0000003Z"));

        assert!(present(&session, "A0000001X"));
        assert!(!present(&session, "A0000002Y"));
    }

    #[test]
    fn marking_twice_changes_nothing_the_second_time() {
        let mut session = session();
        mark(&mut session, &t01(), &ids(&["A0000001X"])).unwrap();
        let again = mark(&mut session, &t01(), &ids(&["A0000001X"])).unwrap();

        assert!(again.affected.is_empty());
        assert_eq!(again.messages.len(), 1);
        assert_eq!(again.messages[0].level, MessageLevel::Info);
        assert!(again.messages[0].content.starts_with("Already marked"));
    }

    #[test]
    fn unmark_reverses_mark() {
        let mut session = session();
        mark(&mut session, &t01(), &ids(&["A0000001X"])).unwrap();
        let result = unmark(&mut session, &t01(), &ids(&["A0000001X", "A0000002Y"])).unwrap();
        assert!(result.messages[0].content.contains("Successfully unmarked"));
        assert!(result.messages[1].content.contains("Already unmarked"));
        assert!(!present(&session, "A0000001X"));
    }

    #[test]
    fn unknown_students_never_fail_the_command() {
        let mut session = session();
        let before = session.roster().clone();
        let result = mark(&mut session, &t01(), &ids(&["A0000009Z"])).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(session.roster(), &before);
    }

    #[test]
    fn missing_tutorial_fails() {
        let mut session = session();
        let before = session.roster().clone();
        let missing: TutorialId = "T99".parse().unwrap();

        let err = mark(&mut session, &missing, &ids(&["A0000001X"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = unmark(&mut session, &missing, &ids(&["A0000001X"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = mark_all(&mut session, &missing).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = unmark_all(&mut session, &missing).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        assert_eq!(session.roster(), &before);
    }

    #[test]
    fn mark_all_and_unmark_all() {
        let mut session = session();
        mark_all(&mut session, &t01()).unwrap();
        assert!(present(&session, "A0000001X"));
        assert!(present(&session, "A0000002Y"));

        unmark_all(&mut session, &t01()).unwrap();
        assert!(!present(&session, "A0000001X"));
        assert!(!present(&session, "A0000002Y"));
    }
}
