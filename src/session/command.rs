//! Command parsing for the cache session
//!
//! One command per line, verb first and case-insensitive:
//!
//! ```text
//! SET <key> <value...>
//! GET <key>
//! PEEK <key>
//! DEL <key>
//! HAS <key>
//! RESET
//! STATS
//! KEYS
//! ```

use std::str::FromStr;

use crate::error::CacheError;

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    Get { key: String },
    Peek { key: String },
    Delete { key: String },
    Has { key: String },
    Reset,
    Stats,
    Keys,
}

impl FromStr for Command {
    type Err = CacheError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let rest = rest.trim_start();

        match verb.to_ascii_uppercase().as_str() {
            "SET" => {
                let (key, value) = rest
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));
                Ok(Command::Set {
                    key: validate_key(key)?,
                    value: value.trim_start().to_string(),
                })
            }
            "GET" => Ok(Command::Get {
                key: single_key(rest)?,
            }),
            "PEEK" => Ok(Command::Peek {
                key: single_key(rest)?,
            }),
            "DEL" | "DELETE" => Ok(Command::Delete {
                key: single_key(rest)?,
            }),
            "HAS" => Ok(Command::Has {
                key: single_key(rest)?,
            }),
            "RESET" => no_args(rest, Command::Reset),
            "STATS" => no_args(rest, Command::Stats),
            "KEYS" => no_args(rest, Command::Keys),
            "" => Err(CacheError::InvalidRequest("Empty command".to_string())),
            other => Err(CacheError::InvalidRequest(format!(
                "Unknown command '{}'",
                other
            ))),
        }
    }
}

fn validate_key(key: &str) -> Result<String, CacheError> {
    if key.is_empty() {
        return Err(CacheError::InvalidRequest("Key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidRequest(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(key.to_string())
}

fn single_key(rest: &str) -> Result<String, CacheError> {
    let rest = rest.trim_end();
    if rest.contains(char::is_whitespace) {
        return Err(CacheError::InvalidRequest(
            "Expected a single key".to_string(),
        ));
    }
    validate_key(rest)
}

fn no_args(rest: &str, command: Command) -> Result<Command, CacheError> {
    if rest.trim().is_empty() {
        Ok(command)
    } else {
        Err(CacheError::InvalidRequest(
            "Command takes no arguments".to_string(),
        ))
    }
}
