//! # Command Parser
//!
//! Turns one line of user input into a validated [`Command`].
//!
//! Parsing runs in a fixed order: split off the keyword, pick the grammar for
//! it, tokenize the remainder by field prefix, check the shape (preamble,
//! required and repeated prefixes), then build each field value. The first
//! failure wins; later fields are not looked at.
//!
//! An unknown keyword is an `UnknownCommand` error. Anything wrong with the
//! arguments of a known keyword is `InvalidFormat` (carrying the command's
//! usage), or a `Validation` error for a field value with the wrong shape.
//!
//! ## Field prefixes
//!
//! | Prefix | Field |
//! |--------|-------|
//! | `t/`   | tutorial id |
//! | `m/`   | module code |
//! | `d/`   | date (`YYYY-MM-DD`) |
//! | `s/`   | student id |
//! | `f/`   | source tutorial id (copy) |

use crate::commands::{Command, EditTarget};
use crate::error::{Result, TutzError};
use crate::model::{Student, Tutorial, TutorialPatch};
use crate::predicate::TutorialPredicate;
use crate::values::{ModuleCode, StudentId, TutorialDate, TutorialId};
use tracing::debug;

pub mod tokenize;
pub mod usage;

use tokenize::{
    tokenize, ArgMap, Prefix, PREFIX_DATE, PREFIX_FROM, PREFIX_MODULE, PREFIX_STUDENT,
    PREFIX_TUTORIAL,
};

pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Err(TutzError::invalid_format(usage::HELP));
    }
    let (keyword, args) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest),
        None => (line, ""),
    };
    debug!(keyword, args, "parsing command");

    match keyword {
        "add" => parse_add(args),
        "edit" => parse_edit(args, usage::EDIT, |preamble| {
            preamble
                .parse::<usize>()
                .ok()
                .filter(|i| *i > 0)
                .map(|i| Ok(EditTarget::Index(i)))
        }),
        "edit_tutorial" => parse_edit(args, usage::EDIT_TUTORIAL, |preamble| {
            if preamble.is_empty() {
                None
            } else {
                Some(preamble.parse::<TutorialId>().map(EditTarget::Id).map_err(Into::into))
            }
        }),
        "delete_tutorial" => parse_delete(args),
        "copy_tutorial" => parse_copy(args),
        "add_student" => parse_add_student(args),
        "delete_student" => parse_delete_student(args),
        "mark" => parse_students_op(args, usage::MARK)
            .map(|(tutorial, students)| Command::Mark { tutorial, students }),
        "unmark" => parse_students_op(args, usage::UNMARK)
            .map(|(tutorial, students)| Command::Unmark { tutorial, students }),
        "mark_all" => parse_tutorial_only(args, usage::MARK_ALL).map(Command::MarkAll),
        "unmark_all" => parse_tutorial_only(args, usage::UNMARK_ALL).map(Command::UnmarkAll),
        "find" => parse_find(args),
        "list" => parse_bare(args, usage::LIST, Command::List),
        "clear" => parse_bare(args, usage::CLEAR, Command::Clear),
        other => Err(TutzError::unknown_command(other)),
    }
}

fn tokenize_checked(
    args: &str,
    prefixes: &[Prefix],
    single: &[Prefix],
    usage: &str,
) -> Result<ArgMap> {
    let map = tokenize(args, prefixes);
    if !map.preamble().is_empty() {
        return Err(TutzError::invalid_format(usage));
    }
    check_repeated(&map, single, usage)?;
    Ok(map)
}

fn check_repeated(map: &ArgMap, single: &[Prefix], usage: &str) -> Result<()> {
    match map.repeated(single) {
        Some(prefix) => Err(TutzError::invalid_format_with(
            format!("{} may only be given once", prefix),
            usage,
        )),
        None => Ok(()),
    }
}

fn required<'a>(map: &'a ArgMap, prefix: Prefix, usage: &str) -> Result<&'a str> {
    map.last(prefix)
        .ok_or_else(|| TutzError::invalid_format_with(format!("missing {}", prefix), usage))
}

fn parse_students(values: &[String]) -> Result<Vec<StudentId>> {
    values
        .iter()
        .map(|v| v.parse::<StudentId>().map_err(Into::into))
        .collect()
}

fn parse_add(args: &str) -> Result<Command> {
    let single = [PREFIX_TUTORIAL, PREFIX_MODULE, PREFIX_DATE];
    let map = tokenize_checked(
        args,
        &[PREFIX_TUTORIAL, PREFIX_MODULE, PREFIX_DATE, PREFIX_STUDENT],
        &single,
        usage::ADD,
    )?;

    let id = required(&map, PREFIX_TUTORIAL, usage::ADD)?;
    let module = required(&map, PREFIX_MODULE, usage::ADD)?;
    let date = required(&map, PREFIX_DATE, usage::ADD)?;

    let tutorial = Tutorial::new(
        id.parse()?,
        module.parse()?,
        date.parse()?,
        parse_students(map.all(PREFIX_STUDENT))?
            .into_iter()
            .map(Student::new)
            .collect(),
    );
    Ok(Command::Add(tutorial))
}

/// Shared grammar for `edit` and `edit_tutorial`, which differ only in how
/// the preamble names the target. `target` returns `None` for a preamble
/// that cannot address anything.
fn parse_edit<F>(args: &str, usage: &str, target: F) -> Result<Command>
where
    F: Fn(&str) -> Option<Result<EditTarget>>,
{
    let single = [PREFIX_TUTORIAL, PREFIX_MODULE, PREFIX_DATE];
    let map = tokenize(
        args,
        &[PREFIX_TUTORIAL, PREFIX_MODULE, PREFIX_DATE, PREFIX_STUDENT],
    );

    let target = match target(map.preamble()) {
        Some(target) => target?,
        None => return Err(TutzError::invalid_format(usage)),
    };
    check_repeated(&map, &single, usage)?;
    if map.has(PREFIX_STUDENT) {
        return Err(TutzError::invalid_format_with(
            "students cannot be edited here, use add_student or delete_student",
            usage,
        ));
    }

    let patch = TutorialPatch {
        id: map.last(PREFIX_TUTORIAL).map(str::parse::<TutorialId>).transpose()?,
        module: map.last(PREFIX_MODULE).map(str::parse::<ModuleCode>).transpose()?,
        date: map.last(PREFIX_DATE).map(str::parse::<TutorialDate>).transpose()?,
    };
    if patch.is_empty() {
        return Err(TutzError::invalid_format_with(
            "at least one field to edit must be provided",
            usage,
        ));
    }
    Ok(Command::Edit { target, patch })
}

fn parse_tutorial_only(args: &str, usage: &str) -> Result<TutorialId> {
    let map = tokenize_checked(args, &[PREFIX_TUTORIAL], &[PREFIX_TUTORIAL], usage)?;
    Ok(required(&map, PREFIX_TUTORIAL, usage)?.parse()?)
}

fn parse_delete(args: &str) -> Result<Command> {
    parse_tutorial_only(args, usage::DELETE_TUTORIAL).map(Command::Delete)
}

fn parse_copy(args: &str) -> Result<Command> {
    let prefixes = [PREFIX_TUTORIAL, PREFIX_FROM, PREFIX_DATE];
    let map = tokenize_checked(args, &prefixes, &prefixes, usage::COPY_TUTORIAL)?;

    let new_id = required(&map, PREFIX_TUTORIAL, usage::COPY_TUTORIAL)?;
    let source = required(&map, PREFIX_FROM, usage::COPY_TUTORIAL)?;
    let date = required(&map, PREFIX_DATE, usage::COPY_TUTORIAL)?;

    Ok(Command::Copy {
        new_id: new_id.parse()?,
        source: source.parse()?,
        date: date.parse()?,
    })
}

/// `t/TUTORIAL s/STUDENT...` with at least one student.
fn parse_students_op(args: &str, usage: &str) -> Result<(TutorialId, Vec<StudentId>)> {
    let map = tokenize_checked(
        args,
        &[PREFIX_TUTORIAL, PREFIX_STUDENT],
        &[PREFIX_TUTORIAL],
        usage,
    )?;
    let tutorial = required(&map, PREFIX_TUTORIAL, usage)?;
    required(&map, PREFIX_STUDENT, usage)?;

    Ok((tutorial.parse()?, parse_students(map.all(PREFIX_STUDENT))?))
}

fn parse_add_student(args: &str) -> Result<Command> {
    let (tutorial, students) = parse_students_op(args, usage::ADD_STUDENT)?;
    Ok(Command::AddStudents {
        tutorial,
        students: students.into_iter().map(Student::new).collect(),
    })
}

fn parse_delete_student(args: &str) -> Result<Command> {
    let prefixes = [PREFIX_TUTORIAL, PREFIX_STUDENT];
    let map = tokenize_checked(args, &prefixes, &prefixes, usage::DELETE_STUDENT)?;
    let tutorial = required(&map, PREFIX_TUTORIAL, usage::DELETE_STUDENT)?;
    let student = required(&map, PREFIX_STUDENT, usage::DELETE_STUDENT)?;

    Ok(Command::DeleteStudent {
        tutorial: tutorial.parse()?,
        student: student.parse()?,
    })
}

fn find_keywords(map: &ArgMap, prefix: Prefix) -> Result<Vec<String>> {
    let words: Vec<String> = map
        .all(prefix)
        .iter()
        .flat_map(|v| v.split_whitespace())
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        return Err(TutzError::invalid_format_with(
            format!("{} needs at least one keyword", prefix),
            usage::FIND,
        ));
    }
    Ok(words)
}

fn parse_find(args: &str) -> Result<Command> {
    let map = tokenize_checked(args, &[PREFIX_TUTORIAL, PREFIX_MODULE], &[], usage::FIND)?;
    if !map.has(PREFIX_TUTORIAL) && !map.has(PREFIX_MODULE) {
        return Err(TutzError::invalid_format(usage::FIND));
    }

    let mut parts = Vec::new();
    if map.has(PREFIX_MODULE) {
        parts.push(TutorialPredicate::ModuleCodeContains(find_keywords(
            &map,
            PREFIX_MODULE,
        )?));
    }
    if map.has(PREFIX_TUTORIAL) {
        parts.push(TutorialPredicate::TutorialIdContains(find_keywords(
            &map,
            PREFIX_TUTORIAL,
        )?));
    }
    Ok(Command::Find(TutorialPredicate::And(parts)))
}

fn parse_bare(args: &str, usage: &str, command: Command) -> Result<Command> {
    if !args.trim().is_empty() {
        return Err(TutzError::invalid_format(usage));
    }
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind_of(line: &str) -> ErrorKind {
        parse_command(line).unwrap_err().kind()
    }

    #[test]
    fn unknown_keyword_is_distinct_from_bad_format() {
        assert_eq!(kind_of("teleport t/T01"), ErrorKind::UnknownCommand);
        assert_eq!(kind_of("delete_tutorial"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("   "), ErrorKind::InvalidFormat);
    }

    #[test]
    fn add_builds_a_tutorial() {
        let command =
            parse_command("add t/C101 m/cs2103t d/2025-01-10 s/A0000001X s/a0000002y").unwrap();
        let Command::Add(tutorial) = command else {
            panic!("expected an add command");
        };
        assert_eq!(tutorial.id().as_str(), "C101");
        assert_eq!(tutorial.module().as_str(), "CS2103T");
        assert_eq!(tutorial.students().len(), 2);
        assert!(tutorial.students().iter().all(|s| !s.present));
    }

    #[test]
    fn add_rejects_preamble_missing_and_repeated_fields() {
        assert_eq!(
            kind_of("add oops t/C101 m/CS2103T d/2025-01-10"),
            ErrorKind::InvalidFormat
        );
        assert_eq!(kind_of("add t/C101 m/CS2103T"), ErrorKind::InvalidFormat);
        assert_eq!(
            kind_of("add t/C101 t/C102 m/CS2103T d/2025-01-10"),
            ErrorKind::InvalidFormat
        );
    }

    #[test]
    fn first_invalid_field_is_reported() {
        let err = parse_command("add t/C-101 m/XX d/2025-99-99").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("tutorial id"));

        let err = parse_command("add t/C101 m/CS2103T d/2025-02-30").unwrap_err();
        assert!(err.to_string().contains("not a real calendar date"));
    }

    #[test]
    fn edit_by_index_and_by_id() {
        let command = parse_command("edit 2 m/MA1521").unwrap();
        assert_eq!(
            command,
            Command::Edit {
                target: EditTarget::Index(2),
                patch: TutorialPatch {
                    module: Some("MA1521".parse().unwrap()),
                    ..Default::default()
                },
            }
        );

        let command = parse_command("edit_tutorial Lab 1 t/Lab 2").unwrap();
        assert_eq!(
            command,
            Command::Edit {
                target: EditTarget::Id("Lab 1".parse().unwrap()),
                patch: TutorialPatch {
                    id: Some("Lab 2".parse().unwrap()),
                    ..Default::default()
                },
            }
        );
    }

    #[test]
    fn edit_rejects_bad_index_empty_patch_and_students() {
        assert_eq!(kind_of("edit 0 m/MA1521"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("edit x m/MA1521"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("edit 1"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("edit_tutorial m/MA1521"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("edit 1 s/A0000001X"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("edit 1 d/2025-01-01 d/2025-01-02"), ErrorKind::InvalidFormat);
    }

    #[test]
    fn copy_requires_all_three_fields() {
        let command = parse_command("copy_tutorial t/C2 f/C101 d/2025-03-10").unwrap();
        assert_eq!(
            command,
            Command::Copy {
                new_id: "C2".parse().unwrap(),
                source: "C101".parse().unwrap(),
                date: "2025-03-10".parse().unwrap(),
            }
        );
        assert_eq!(kind_of("copy_tutorial t/C2 f/C101"), ErrorKind::InvalidFormat);
    }

    #[test]
    fn student_commands() {
        assert!(matches!(
            parse_command("mark t/T01 s/A0000001X s/A0000003Z").unwrap(),
            Command::Mark { students, .. } if students.len() == 2
        ));
        assert!(matches!(
            parse_command("add_student t/T01 s/A0000001X").unwrap(),
            Command::AddStudents { .. }
        ));
        assert_eq!(kind_of("unmark t/T01"), ErrorKind::InvalidFormat);
        assert_eq!(
            kind_of("delete_student t/T01 s/A0000001X s/A0000002Y"),
            ErrorKind::InvalidFormat
        );
        assert_eq!(kind_of("mark t/T01 s/bogus"), ErrorKind::Validation);
        assert_eq!(
            parse_command("mark_all t/T01").unwrap(),
            Command::MarkAll("T01".parse().unwrap())
        );
    }

    #[test]
    fn find_builds_an_and_predicate() {
        let command = parse_command("find m/cs ma t/lab").unwrap();
        assert_eq!(
            command,
            Command::Find(TutorialPredicate::And(vec![
                TutorialPredicate::ModuleCodeContains(vec!["cs".into(), "ma".into()]),
                TutorialPredicate::TutorialIdContains(vec!["lab".into()]),
            ]))
        );
        assert_eq!(kind_of("find"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("find m/"), ErrorKind::InvalidFormat);
        assert_eq!(kind_of("find cs"), ErrorKind::InvalidFormat);
    }

    #[test]
    fn bare_commands_take_no_arguments() {
        assert_eq!(parse_command("list").unwrap(), Command::List);
        assert_eq!(parse_command(" clear ").unwrap(), Command::Clear);
        assert_eq!(kind_of("clear everything"), ErrorKind::InvalidFormat);
    }
}
