//! Shell Module
//!
//! Line-oriented driver for a string cache, read from any async reader.
//!
//! # Commands
//! - `put [key [value...]]` - Store a value (missing parts make it a no-op)
//! - `get [key]` - Print the value or `(nil)`
//! - `dump` - Print every entry sorted by key
//! - `stats` - Print counters as JSON
//! - `help` - List commands
//! - `quit` / `exit` - End the session

pub mod command;
pub mod session;

pub use command::{execute, Command, Reply};
pub use session::run_session;
