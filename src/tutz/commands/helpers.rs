use crate::commands::EditTarget;
use crate::error::{Result, TutzError};
use crate::model::Tutorial;
use crate::session::Session;
use crate::values::{StudentId, TutorialId};

/// Looks a tutorial up by exact id in the whole roster.
pub fn tutorial_by_id(session: &Session, id: &TutorialId) -> Result<Tutorial> {
    session
        .tutorial(id)
        .cloned()
        .ok_or_else(|| TutzError::TutorialNotFound(id.to_string()))
}

/// Looks a tutorial up by its 1-based position in the filtered view.
pub fn tutorial_by_index(session: &Session, index: usize) -> Result<Tutorial> {
    index
        .checked_sub(1)
        .and_then(|i| session.filtered().get(i))
        .cloned()
        .ok_or_else(|| TutzError::TutorialNotFound(format!("#{} (index out of range)", index)))
}

pub fn resolve_target(session: &Session, target: &EditTarget) -> Result<Tutorial> {
    match target {
        EditTarget::Index(index) => tutorial_by_index(session, *index),
        EditTarget::Id(id) => tutorial_by_id(session, id),
    }
}

pub fn join_ids<'a, I>(ids: I) -> String
where
    I: IntoIterator<Item = &'a StudentId>,
{
    ids.into_iter()
        .map(StudentId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
