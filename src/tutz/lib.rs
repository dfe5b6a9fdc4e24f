//! # Tutz Architecture
//!
//! Tutz keeps a roster of tutorial sessions (module code, date, enrolled
//! students and their attendance) and changes it through short text
//! commands such as `add t/C101 m/CS2103T d/2025-01-10` or
//! `mark t/C101 s/A0123456X`. It is a library first; the terminal client is
//! one consumer of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, prints the view and feedback        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - parse -> execute -> persist                              │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                            │
//!                 ▼                            ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Parser (parser/)             │ │  Commands (commands/*.rs) │
//! │  text -> validated Command    │ │  business rules           │
//! └───────────────────────────────┘ └───────────────────────────┘
//!                                              │
//!                                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs): Roster + filtered view               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RosterStorage trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! A tutorial's id is its identity. The [`roster::Roster`] refuses two
//! tutorials with the same id, but an edit may keep the edited tutorial's
//! own id while changing anything else. Full `==` on tutorials compares
//! every field, which is what removal and replacement match on.
//!
//! ## Errors
//!
//! Parse failures (unknown keyword, bad arguments, invalid field values) are
//! reported before anything runs. Command failures are limited to a missing
//! tutorial or an id clash, and leave everything unchanged. Students that
//! cannot be processed in a bulk operation are reported in the feedback of a
//! successful command instead.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`parser`]: Command-line grammar
//! - [`commands`]: Business logic for each command
//! - [`session`]: Roster plus the filtered view
//! - [`roster`]: The identity-constrained collection
//! - [`predicate`]: Filters for `find`
//! - [`model`]: `Tutorial`, `Student`, `TutorialPatch`
//! - [`values`]: Validated field values
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the read loop and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod predicate;
pub mod roster;
pub mod session;
pub mod store;
pub mod values;
