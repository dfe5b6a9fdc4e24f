//! # Command Layer
//!
//! One module per user-facing operation. Each exposes a `run` function that
//! takes the [`Session`] and typed arguments and returns a [`CmdResult`], or
//! a [`TutzError`](crate::error::TutzError) when the command as a whole
//! cannot be carried out.
//!
//! Only two conditions fail an otherwise well-formed command: the target
//! tutorial is missing (`NotFound`) or the result would clash with another
//! tutorial's id (`DuplicateIdentity`). Partial misses in bulk student
//! operations are reported as messages on a successful result instead.
//! A failed command leaves the session exactly as it was.

use crate::error::Result;
use crate::model::{Student, Tutorial, TutorialPatch};
use crate::predicate::TutorialPredicate;
use crate::session::Session;
use crate::values::{StudentId, TutorialDate, TutorialId};
use tracing::{info, warn};

pub mod add;
pub mod attendance;
pub mod clear;
pub mod copy;
pub mod delete;
pub mod edit;
pub mod find;
pub mod helpers;
pub mod list;
pub mod students;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Tutorials created or replaced by the command, as they now stand.
    pub affected: Vec<Tutorial>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected(mut self, tutorial: Tutorial) -> Self {
        self.affected.push(tutorial);
        self
    }

    /// All messages as one human-readable string, one per line.
    pub fn feedback(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// How an edit picks its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// 1-based position in the filtered view.
    Index(usize),
    /// Exact id, looked up in the whole roster.
    Id(TutorialId),
}

impl std::fmt::Display for EditTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditTarget::Index(i) => write!(f, "#{}", i),
            EditTarget::Id(id) => write!(f, "{}", id),
        }
    }
}

/// A fully parsed, validated command ready to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Tutorial),
    Delete(TutorialId),
    Edit {
        target: EditTarget,
        patch: TutorialPatch,
    },
    Copy {
        new_id: TutorialId,
        source: TutorialId,
        date: TutorialDate,
    },
    AddStudents {
        tutorial: TutorialId,
        students: Vec<Student>,
    },
    DeleteStudent {
        tutorial: TutorialId,
        student: StudentId,
    },
    Mark {
        tutorial: TutorialId,
        students: Vec<StudentId>,
    },
    Unmark {
        tutorial: TutorialId,
        students: Vec<StudentId>,
    },
    MarkAll(TutorialId),
    UnmarkAll(TutorialId),
    Find(TutorialPredicate),
    List,
    Clear,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Delete(_) => "delete_tutorial",
            Command::Edit {
                target: EditTarget::Index(_),
                ..
            } => "edit",
            Command::Edit {
                target: EditTarget::Id(_),
                ..
            } => "edit_tutorial",
            Command::Copy { .. } => "copy_tutorial",
            Command::AddStudents { .. } => "add_student",
            Command::DeleteStudent { .. } => "delete_student",
            Command::Mark { .. } => "mark",
            Command::Unmark { .. } => "unmark",
            Command::MarkAll(_) => "mark_all",
            Command::UnmarkAll(_) => "unmark_all",
            Command::Find(_) => "find",
            Command::List => "list",
            Command::Clear => "clear",
        }
    }

    /// Whether a successful run can change the roster (and so needs saving).
    pub fn mutates_roster(&self) -> bool {
        !matches!(self, Command::Find(_) | Command::List)
    }

    pub fn execute(self, session: &mut Session) -> Result<CmdResult> {
        let name = self.name();
        let outcome = match self {
            Command::Add(tutorial) => add::run(session, tutorial),
            Command::Delete(id) => delete::run(session, &id),
            Command::Edit { target, patch } => edit::run(session, &target, &patch),
            Command::Copy {
                new_id,
                source,
                date,
            } => copy::run(session, new_id, &source, date),
            Command::AddStudents { tutorial, students } => {
                students::add(session, &tutorial, students)
            }
            Command::DeleteStudent { tutorial, student } => {
                students::delete(session, &tutorial, &student)
            }
            Command::Mark { tutorial, students } => attendance::mark(session, &tutorial, &students),
            Command::Unmark { tutorial, students } => {
                attendance::unmark(session, &tutorial, &students)
            }
            Command::MarkAll(tutorial) => attendance::mark_all(session, &tutorial),
            Command::UnmarkAll(tutorial) => attendance::unmark_all(session, &tutorial),
            Command::Find(predicate) => Ok(find::run(session, predicate)),
            Command::List => Ok(list::run(session)),
            Command::Clear => Ok(clear::run(session)),
        };

        match &outcome {
            Ok(result) => info!(command = name, messages = result.messages.len(), "command executed"),
            Err(e) => warn!(command = name, error = %e, "command rejected"),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::fixtures::tutorial;

    #[test]
    fn feedback_joins_messages() {
        let result = CmdResult::default()
            .with_message(CmdMessage::success("one"))
            .with_message(CmdMessage::warning("two"));
        assert_eq!(result.feedback(), "one\ntwo");
    }

    #[test]
    fn execute_dispatches_and_reports_failures() {
        let mut session = Session::new();
        let add = Command::Add(tutorial("C101", "CS2103T", "2025-01-10", &[]));
        assert!(add.clone().execute(&mut session).is_ok());

        let err = add.execute(&mut session).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateIdentity);
        assert_eq!(session.roster().len(), 1);
    }

    #[test]
    fn only_find_and_list_leave_the_roster_alone() {
        assert!(!Command::List.mutates_roster());
        assert!(!Command::Find(TutorialPredicate::All).mutates_roster());
        assert!(Command::Clear.mutates_roster());
    }
}
