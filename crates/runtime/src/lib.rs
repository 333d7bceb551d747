//! Session driver for the worm terrain engine.
//!
//! This crate owns everything that changes over time: the level mask (eroded
//! by terrain hits), the worm and the tick counter. It sequences calls into
//! `game-core`, logs what happened, and replays textual intent scripts for
//! headless runs.
//!
//! - [`session`] hosts [`Session`] and its snapshots
//! - [`script`] parses intent scripts
//! - [`api`] exposes the error types
pub mod api;
pub mod script;
pub mod session;

pub use api::{Result, ScriptError, SessionError};
pub use script::{Command, Script, Step};
pub use session::{ScriptSummary, Session, SessionSnapshot};
