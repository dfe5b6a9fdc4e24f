use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Student;
use crate::session::Session;
use crate::values::{StudentId, TutorialId};

use super::helpers::{join_ids, tutorial_by_id};

/// Enrolls `students` in a tutorial.
///
/// Students already enrolled are left as they are (attendance included) and
/// reported separately from the newly added ones.
pub fn add(session: &mut Session, id: &TutorialId, students: Vec<Student>) -> Result<CmdResult> {
    let tutorial = tutorial_by_id(session, id)?;

    let mut added: Vec<Student> = Vec::new();
    let mut already: Vec<StudentId> = Vec::new();
    for student in students {
        if tutorial.has_student(&student.id) {
            if !already.contains(&student.id) {
                already.push(student.id);
            }
        } else if !added.contains(&student) {
            added.push(student);
        }
    }

    let mut result = CmdResult::default();
    if !added.is_empty() {
        let mut enrolled = tutorial.students().to_vec();
        enrolled.extend(added.iter().cloned());
        let updated = tutorial.with_students(enrolled);
        session.set_tutorial(&tutorial, updated.clone())?;

        result.add_message(CmdMessage::success(format!(
            "Added to {}: {}",
            id,
            join_ids(added.iter().map(|s| &s.id))
        )));
        result.affected.push(updated);
    }
    if !already.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Already enrolled in {}: {}",
            id,
            join_ids(&already)
        )));
    }
    if result.messages.is_empty() {
        result.add_message(CmdMessage::info(format!("No students given for {}", id)));
    }
    Ok(result)
}

/// Removes one student from a tutorial; a student who is not enrolled is
/// reported, not treated as a failure.
pub fn delete(session: &mut Session, id: &TutorialId, student: &StudentId) -> Result<CmdResult> {
    let tutorial = tutorial_by_id(session, id)?;

    if !tutorial.has_student(student) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "{} is not enrolled in {}",
            student, id
        ))));
    }

    let remaining = tutorial
        .students()
        .iter()
        .filter(|s| &s.id != student)
        .cloned()
        .collect();
    let updated = tutorial.with_students(remaining);
    session.set_tutorial(&tutorial, updated.clone())?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Removed {} from {}",
            student, id
        )))
        .with_affected(updated))
}
