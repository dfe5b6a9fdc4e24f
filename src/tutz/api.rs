//! # API Facade
//!
//! The single entry point for every tutz client. [`TutzApi::execute`] is the
//! whole pipeline:
//!
//! 1. parse the line into a [`Command`] (parse errors stop here, before the
//!    session is touched)
//! 2. run it against the [`Session`]
//! 3. persist the roster if the command succeeded and can change it
//!
//! The facade returns structured results; it never prints.
//!
//! ## Generic Over RosterStorage
//!
//! `TutzApi<S: RosterStorage>` works with any storage backend:
//! - Production: `TutzApi<FileStore>`
//! - Testing: `TutzApi<InMemoryStore>`

use crate::commands::{CmdResult, Command};
use crate::error::{Result, TutzError};
use crate::model::Tutorial;
use crate::parser::parse_command;
use crate::roster::Roster;
use crate::session::Session;
use crate::store::RosterStorage;

pub struct TutzApi<S: RosterStorage> {
    session: Session,
    store: S,
}

impl<S: RosterStorage> TutzApi<S> {
    /// Loads the stored roster; nothing stored means an empty roster.
    pub fn open(store: S) -> Result<Self> {
        let roster = match store.load()? {
            Some(tutorials) => Roster::from_tutorials(tutorials).map_err(|e| {
                TutzError::Store(format!("stored roster is inconsistent: {}", e))
            })?,
            None => Roster::new(),
        };
        Ok(Self {
            session: Session::with_roster(roster),
            store,
        })
    }

    /// Parses and runs one line of input.
    pub fn execute(&mut self, line: &str) -> Result<CmdResult> {
        let command = parse_command(line)?;
        self.run(command)
    }

    /// Runs an already-built command.
    ///
    /// A command whose changes cannot be saved is rolled back, so a failed
    /// result always means the session is as it was.
    pub fn run(&mut self, command: Command) -> Result<CmdResult> {
        let snapshot = command.mutates_roster().then(|| self.session.clone());
        let result = command.execute(&mut self.session)?;
        if let Some(snapshot) = snapshot {
            if let Err(e) = self.store.save(self.session.roster().tutorials()) {
                self.session = snapshot;
                return Err(e);
            }
        }
        Ok(result)
    }

    pub fn filtered(&self) -> &[Tutorial] {
        self.session.filtered()
    }

    pub fn roster(&self) -> &Roster {
        self.session.roster()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
pub use crate::error::ErrorKind;
