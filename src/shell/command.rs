//! Shell Commands
//!
//! Parsing of input lines and their execution against a shared cache.

use std::fmt;

use crate::cache::SharedCache;
use crate::error::{CacheError, Result};
use crate::models::StatsReport;

const HELP: &str = "\
put [key [value...]]  store a value; a missing key or value is ignored
get [key]             print the value or (nil)
dump                  print every entry sorted by key
stats                 print counters as JSON
help                  show this text
quit | exit           end the session";

// == Command ==
/// A parsed shell command.
///
/// Missing arguments stay `None` so they reach the cache as missing keys or
/// values instead of being rejected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put {
        key: Option<String>,
        value: Option<String>,
    },
    Get {
        key: Option<String>,
    },
    Dump,
    Stats,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    ///
    /// Everything after the key of a `put` is the value, with runs of
    /// whitespace collapsed to single spaces.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(None);
        };

        let command = match verb.to_lowercase().as_str() {
            "put" | "set" => {
                let key = tokens.next().map(str::to_string);
                let rest: Vec<&str> = tokens.collect();
                let value = (!rest.is_empty()).then(|| rest.join(" "));
                Self::Put { key, value }
            }
            "get" => {
                let key = tokens.next().map(str::to_string);
                if tokens.next().is_some() {
                    return Err(CacheError::InvalidCommand(
                        "get takes at most one key".to_string(),
                    ));
                }
                Self::Get { key }
            }
            "dump" | "print" => Self::Dump,
            "stats" => Self::Stats,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(CacheError::InvalidCommand(format!(
                    "unknown command '{}'",
                    other
                )))
            }
        };
        Ok(Some(command))
    }
}

// == Reply ==
/// Output of an executed command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Put acknowledged
    Ok,
    /// Lookup result
    Value(Option<String>),
    /// Free-form text (dump, stats, help)
    Text(String),
    /// Session should end
    Quit,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => f.write_str("OK"),
            Reply::Value(Some(value)) => f.write_str(value),
            Reply::Value(None) => f.write_str("(nil)"),
            Reply::Text(text) => f.write_str(text),
            Reply::Quit => f.write_str("Bye"),
        }
    }
}

// == Execute ==
/// Runs a command against the cache.
///
/// `put` always answers `OK`: the cache gives no signal when it drops a put.
pub async fn execute(command: Command, cache: &SharedCache<String, String>) -> Result<Reply> {
    let reply = match command {
        Command::Put { key, value } => {
            cache.put(key, value).await;
            Reply::Ok
        }
        Command::Get { key } => Reply::Value(cache.get(key.as_ref()).await),
        Command::Dump => Reply::Text(cache.dump().await),
        Command::Stats => {
            let report = StatsReport::new(
                cache.policy_name().await,
                cache.capacity().await,
                &cache.stats().await,
            );
            let json = serde_json::to_string(&report)
                .map_err(|e| CacheError::Internal(format!("stats serialization failed: {}", e)))?;
            Reply::Text(json)
        }
        Command::Help => Reply::Text(HELP.to_string()),
        Command::Quit => Reply::Quit,
    };
    Ok(reply)
}
