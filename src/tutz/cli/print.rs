use colored::Colorize;
use tutz::api::{CmdMessage, MessageLevel};
use tutz::model::Tutorial;
use unicode_width::UnicodeWidthStr;

const PRESENT_MARKER: &str = "✓";
const ABSENT_MARKER: &str = "·";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", render_message(message));
    }
}

/// Failed commands go to stderr, rendered like any other error message.
pub(super) fn print_error(error: &impl std::fmt::Display) {
    eprintln!("{}", render_error(error));
}

fn render_error(error: &impl std::fmt::Display) -> String {
    render_message(&CmdMessage::error(format!("Error: {}", error)))
}

fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub(super) fn print_tutorials(tutorials: &[Tutorial]) {
    print!("{}", render_tutorials(tutorials));
}

/// One block per tutorial: an indexed header line, then the students.
pub(super) fn render_tutorials(tutorials: &[Tutorial]) -> String {
    if tutorials.is_empty() {
        return "No tutorials found.\n".to_string();
    }

    let id_width = tutorials
        .iter()
        .map(|t| t.id().as_str().width())
        .max()
        .unwrap_or(0);
    let index_width = tutorials.len().to_string().len();

    let mut out = String::new();
    for (i, tutorial) in tutorials.iter().enumerate() {
        let id = tutorial.id().as_str();
        let padding = " ".repeat(id_width - id.width());
        let date = tutorial.date().to_naive_date().format("%a %d %b %Y");
        out.push_str(&format!(
            "{:>w$}. {}{}  {:<9} {}  {}/{} present\n",
            i + 1,
            id.bold(),
            padding,
            tutorial.module().as_str().cyan(),
            date,
            tutorial.present_count(),
            tutorial.students().len(),
            w = index_width,
        ));

        if !tutorial.students().is_empty() {
            let students: Vec<String> = tutorial
                .students()
                .iter()
                .map(|s| {
                    if s.present {
                        format!("{} {}", PRESENT_MARKER.green(), s.id)
                    } else {
                        format!("{} {}", ABSENT_MARKER.dimmed(), s.id)
                    }
                })
                .collect();
            out.push_str(&format!(
                "{}  {}\n",
                " ".repeat(index_width),
                students.join("  ")
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutz::model::{Student, Tutorial};

    fn tutorial(id: &str, students: &[(&str, bool)]) -> Tutorial {
        Tutorial::new(
            id.parse().unwrap(),
            "CS2103T".parse().unwrap(),
            "2025-01-10".parse().unwrap(),
            students
                .iter()
                .map(|(sid, present)| Student::new(sid.parse().unwrap()).with_attendance(*present))
                .collect(),
        )
    }

    #[test]
    fn errors_keep_the_error_prefix() {
        let rendered = render_error(&"Tutorial not found: T99");
        assert!(rendered.contains("Error: Tutorial not found: T99"));
    }

    #[test]
    fn empty_list() {
        assert_eq!(render_tutorials(&[]), "No tutorials found.\n");
    }

    #[test]
    fn lists_index_date_and_attendance() {
        let out = render_tutorials(&[
            tutorial("C101", &[("A0000001X", true), ("A0000002Y", false)]),
            tutorial("Lab 2", &[]),
        ]);
        assert!(out.contains("1. "));
        assert!(out.contains("2. "));
        assert!(out.contains("Fri 10 Jan 2025"));
        assert!(out.contains("1/2 present"));
        assert!(out.contains("A0000002Y"));
        assert!(out.contains("0/0 present"));
    }
}
