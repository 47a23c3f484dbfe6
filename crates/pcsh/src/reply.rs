//! Shell replies and their text rendering
//!
//! Output mimics redis-cli so transcripts read naturally.

use std::fmt;

/// Reply to a single shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Status line: OK, PONG
    Status(String),
    /// Error: (error) ERR ...
    Error(String),
    /// Integer: (integer) 3
    Integer(i64),
    /// Bulk string, `None` on a miss: "value" / (nil)
    Bulk(Option<String>),
    /// Multi-line text block, printed verbatim
    Text(String),
    /// Ordered list of replies
    Array(Vec<Reply>),
}

impl Reply {
    /// `OK` status
    pub fn ok() -> Self {
        Reply::Status("OK".to_string())
    }

    /// Error reply for a command called with the wrong number of arguments
    pub fn wrong_arity(command: &str) -> Self {
        Reply::Error(format!(
            "ERR wrong number of arguments for '{}' command",
            command.to_lowercase()
        ))
    }

    /// Whether this reply reports an error
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Status(s) => write!(f, "{}", s),
            Reply::Error(e) => write!(f, "(error) {}", e),
            Reply::Integer(i) => write!(f, "(integer) {}", i),
            Reply::Bulk(None) => write!(f, "(nil)"),
            Reply::Bulk(Some(s)) => write!(f, "{:?}", s),
            Reply::Text(text) => write!(f, "{}", text.trim_end()),
            Reply::Array(items) if items.is_empty() => write!(f, "(empty array)"),
            Reply::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}) {}", i + 1, item)?;
                }
                Ok(())
            }
        }
    }
}
