//! Replies printed by the shell, rendered in the style of redis-cli

use std::fmt;

/// Reply to a single command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Status line: OK
    Status(String),
    /// Error: (error) message
    Error(String),
    /// Integer: (integer) 3
    Integer(u64),
    /// Bulk value: "value", or (nil) when absent
    Bulk(Option<String>),
    /// List of values: 1) "a" 2) "b"
    Array(Vec<String>),
}

impl Reply {
    /// The `OK` status reply
    pub fn ok() -> Self {
        Reply::Status("OK".to_string())
    }

    /// Build an `ERR`-prefixed error reply
    pub fn err(msg: impl fmt::Display) -> Self {
        Reply::Error(format!("ERR {}", msg))
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Status(s) => write!(f, "{}", s),
            Reply::Error(e) => write!(f, "(error) {}", e),
            Reply::Integer(i) => write!(f, "(integer) {}", i),
            Reply::Bulk(None) => write!(f, "(nil)"),
            Reply::Bulk(Some(value)) => write!(f, "{:?}", value),
            Reply::Array(items) if items.is_empty() => write!(f, "(empty list)"),
            Reply::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}) {:?}", i + 1, item)?;
                }
                Ok(())
            }
        }
    }
}
