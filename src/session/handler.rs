//! Session Handler
//!
//! Executes parsed commands against a `CacheStore<String, String>`.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::cache::{CacheStore, TypeSizeWeigher, UnitWeigher};
use crate::config::{CapacityPolicy, Config};
use crate::error::{CacheError, Result};
use crate::session::{Command, Reply, StatsReply};

/// A command session owning one cache.
#[derive(Debug)]
pub struct Session {
    cache: CacheStore<String, String>,
    policy: CapacityPolicy,
}

impl Session {
    /// Creates a session over an existing cache.
    pub fn new(cache: CacheStore<String, String>, policy: CapacityPolicy) -> Self {
        Self { cache, policy }
    }

    /// Creates a session whose cache is built from the configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = match config.policy {
            CapacityPolicy::Count => CacheStore::with_weigher(config.capacity, UnitWeigher),
            CapacityPolicy::Bytes => {
                CacheStore::with_weight_fn(config.capacity, |key: &String, value: &String| {
                    (key.len() + value.len()) as u64
                })
            }
            CapacityPolicy::TypeSize => CacheStore::with_weigher(config.capacity, TypeSizeWeigher),
        };
        Self::new(cache, config.policy)
    }

    pub fn cache(&self) -> &CacheStore<String, String> {
        &self.cache
    }

    // == Execute ==
    /// Runs one command and builds its reply.
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        let reply = match command {
            Command::Set { key, value } => {
                self.cache.set(key.clone(), value)?;
                Reply::ok(format!("Key '{}' set successfully", key))
            }
            Command::Get { key } => {
                let value = self.cache.get(&key).cloned();
                Reply::value(key, value)
            }
            Command::Peek { key } => {
                let value = self.cache.peek(&key).cloned();
                Reply::value(key, value)
            }
            Command::Delete { key } => {
                let value = self.cache.delete(&key)?;
                Reply::Deleted { key, value }
            }
            Command::Has { key } => {
                let exists = self.cache.has(&key);
                Reply::Exists { key, exists }
            }
            Command::Reset => {
                self.cache.reset();
                Reply::ok("Cache reset")
            }
            Command::Stats => Reply::Stats(StatsReply::new(
                self.policy.to_string(),
                self.cache.capacity(),
                self.cache.stats(),
            )),
            Command::Keys => Reply::Keys {
                keys: self.cache.iter().map(|(k, _)| k.clone()).collect(),
            },
        };
        Ok(reply)
    }

    // == Handle Line ==
    /// Parses and runs one input line. Failures become error replies.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let result = line.parse::<Command>().and_then(|command| {
            debug!("Executing {:?}", command);
            self.execute(command)
        });
        result.unwrap_or_else(|err| {
            debug!("Command failed: {}", err);
            Reply::error(err)
        })
    }

    // == Run ==
    /// Executes every line of `reader`, writing one JSON reply per line to `writer`.
    ///
    /// Blank lines and lines starting with `#` are skipped. A line that is not
    /// valid UTF-8 gets an error reply and the session carries on; only I/O
    /// failures end it. Returns the number of replies written.
    pub fn run<R, W>(&mut self, mut reader: R, mut writer: W) -> io::Result<usize>
    where
        R: BufRead,
        W: Write,
    {
        let mut buf = Vec::new();
        let mut replies = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let reply = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    self.handle_line(line)
                }
                Err(err) => {
                    warn!("Skipping command that is not valid UTF-8: {}", err);
                    Reply::error(CacheError::InvalidRequest(format!(
                        "Command is not valid UTF-8: {}",
                        err
                    )))
                }
            };

            serde_json::to_writer(&mut writer, &reply)?;
            writer.write_all(b"\n")?;
            replies += 1;
        }

        writer.flush()?;
        Ok(replies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(capacity: u64, policy: CapacityPolicy) -> Session {
        Session::from_config(&Config { capacity, policy })
    }

    #[test]
    fn test_set_and_get() {
        let mut session = session(10, CapacityPolicy::Count);

        let reply = session.handle_line("SET test_key test_value");
        assert!(!reply.is_error());

        let reply = session.handle_line("GET test_key");
        assert_eq!(reply, Reply::value("test_key", Some("test_value".to_string())));
    }

    #[test]
    fn test_get_nonexistent_key_is_not_error() {
        let mut session = session(10, CapacityPolicy::Count);

        let reply = session.handle_line("GET nonexistent");
        assert_eq!(reply, Reply::value("nonexistent", None));
    }

    #[test]
    fn test_delete() {
        let mut session = session(10, CapacityPolicy::Count);
        session.handle_line("SET to_delete value");

        let reply = session.handle_line("DEL to_delete");
        assert_eq!(
            reply,
            Reply::Deleted {
                key: "to_delete".to_string(),
                value: "value".to_string()
            }
        );

        let result = session.execute(Command::Delete {
            key: "to_delete".to_string(),
        });
        assert_eq!(result, Err(CacheError::NotFound));
    }

    #[test]
    fn test_keys_in_recency_order() {
        let mut session = session(2, CapacityPolicy::Count);
        session.handle_line("SET a 1");
        session.handle_line("SET b 2");
        session.handle_line("GET a");
        session.handle_line("PEEK b");

        let reply = session.handle_line("KEYS");
        assert_eq!(
            reply,
            Reply::Keys {
                keys: vec!["a".to_string(), "b".to_string()]
            }
        );
    }

    #[test]
    fn test_bytes_policy_counts_key_and_value() {
        let mut session = session(10, CapacityPolicy::Bytes);

        session.handle_line("SET ab 123");
        assert_eq!(session.cache().weight(), 5);

        let reply = session.handle_line("SET big 12345678");
        assert!(reply.is_error());
        assert!(session.cache().has("ab"));
    }

    #[test]
    fn test_type_policy_ignores_length() {
        let mut session = session(std::mem::size_of::<String>() as u64, CapacityPolicy::TypeSize);

        session.handle_line("SET a short");
        session.handle_line("SET b a much much longer value");

        assert!(!session.cache().has("a"));
        assert!(session.cache().has("b"));
    }

    #[test]
    fn test_has_and_reset() {
        let mut session = session(10, CapacityPolicy::Count);
        session.handle_line("SET first 1");

        assert_eq!(
            session.handle_line("HAS first"),
            Reply::Exists {
                key: "first".to_string(),
                exists: true
            }
        );

        assert_eq!(session.handle_line("RESET"), Reply::ok("Cache reset"));
        assert!(session.cache().is_empty());
    }

    #[test]
    fn test_stats() {
        let mut session = session(10, CapacityPolicy::Count);
        session.handle_line("SET a 1");
        session.handle_line("GET a");
        session.handle_line("GET b");

        match session.handle_line("STATS") {
            Reply::Stats(stats) => {
                assert_eq!(stats.policy, "count");
                assert_eq!(stats.capacity, 10);
                assert_eq!(stats.stats.hits, 1);
                assert_eq!(stats.stats.misses, 1);
                assert_eq!(stats.hit_rate, 0.5);
            }
            other => panic!("expected stats reply, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_command() {
        let mut session = session(10, CapacityPolicy::Count);

        let reply = session.handle_line("FLUSHALL");
        assert!(reply.is_error());
    }
}
