use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tutz", bin_name = "tutz", version)]
#[command(
    about = "Keep a roster of tutorial sessions and their attendance",
    long_about = "Runs one roster command given on the command line, or reads \
commands from stdin, one per line, when none is given.\n\n\
Commands: add, edit, edit_tutorial, delete_tutorial, copy_tutorial, add_student, \
delete_student, mark, unmark, mark_all, unmark_all, find, list, clear"
)]
pub struct Cli {
    /// Directory holding config.json and the roster file (default: $TUTZ_HOME or the user data dir)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// The command to run, e.g. `add t/C101 m/CS2103T d/2025-01-10`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub line: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if any words were given.
    pub fn command_line(&self) -> Option<String> {
        if self.line.is_empty() {
            None
        } else {
            Some(self.line.join(" "))
        }
    }
}
