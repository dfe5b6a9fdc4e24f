//! # Storage Layer
//!
//! The roster is loaded once when the API opens and saved after every
//! command that changed it. [`RosterStorage`] is the only thing the core
//! knows about persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single pretty-printed JSON file holding the
//!   ordered list of tutorials, students and attendance included
//! - [`memory::InMemoryStore`]: keeps the last saved snapshot in memory, for
//!   tests
//!
//! Whatever the backend, saving a snapshot and loading it back must produce
//! a value-equal roster.

use crate::error::Result;
use crate::model::Tutorial;

pub mod fs;
pub mod memory;

pub trait RosterStorage {
    /// The stored snapshot, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<Tutorial>>>;

    /// Replace the stored snapshot.
    fn save(&mut self, tutorials: &[Tutorial]) -> Result<()>;
}
