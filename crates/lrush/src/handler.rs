//! Command handler for the cache shell

use lrucache::LruCache;
use tracing::debug;

use crate::reply::Reply;

pub struct CommandHandler {
    cache: LruCache<String, String>,
}

impl CommandHandler {
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Run one script line; blank lines and `#` comments yield no reply
    pub fn handle(&mut self, line: &str) -> Option<Reply> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let mut parts = line.split_whitespace();
        let command = parts.next()?.to_uppercase();
        let args: Vec<&str> = parts.collect();
        debug!(command = %command, argc = args.len(), "handling command");

        let reply = match command.as_str() {
            "INSERT" => self.handle_insert(&args),
            "GET" => self.handle_get(&args),
            "PEEK" => self.handle_peek(&args),
            "CONTAINS" => self.handle_contains(&args),
            "REMOVE" => self.handle_remove(&args),
            "RESIZE" => self.handle_resize(&args),
            "CLEAR" => self.handle_clear(&args),
            "SIZE" => self.handle_size(&args),
            "MAXSIZE" => self.handle_maxsize(&args),
            "KEYS" => self.handle_keys(&args),
            _ => Reply::err(format!("unknown command '{}'", command)),
        };

        Some(reply)
    }

    fn handle_insert(&mut self, args: &[&str]) -> Reply {
        match args {
            [key, value] => {
                self.cache.insert(key.to_string(), value.to_string());
                Reply::ok()
            }
            _ => wrong_arity("insert"),
        }
    }

    fn handle_get(&mut self, args: &[&str]) -> Reply {
        match args {
            [key] => match self.cache.get(*key) {
                Ok(value) => Reply::Bulk(Some(value)),
                Err(e) => Reply::Error(e.to_string()),
            },
            _ => wrong_arity("get"),
        }
    }

    fn handle_peek(&self, args: &[&str]) -> Reply {
        match args {
            [key] => Reply::Bulk(self.cache.peek(*key).cloned()),
            _ => wrong_arity("peek"),
        }
    }

    fn handle_contains(&self, args: &[&str]) -> Reply {
        match args {
            [key] => Reply::Integer(self.cache.contains(*key) as u64),
            _ => wrong_arity("contains"),
        }
    }

    fn handle_remove(&mut self, args: &[&str]) -> Reply {
        match args {
            [key] => Reply::Bulk(self.cache.remove(*key)),
            _ => wrong_arity("remove"),
        }
    }

    fn handle_resize(&mut self, args: &[&str]) -> Reply {
        let capacity = match args {
            [n] => match n.parse::<usize>() {
                Ok(n) => n,
                Err(_) => return Reply::err("value is not an integer or out of range"),
            },
            _ => return wrong_arity("resize"),
        };

        self.cache.resize(capacity);
        Reply::ok()
    }

    fn handle_clear(&mut self, args: &[&str]) -> Reply {
        if !args.is_empty() {
            return wrong_arity("clear");
        }
        self.cache.clear();
        Reply::ok()
    }

    fn handle_size(&self, args: &[&str]) -> Reply {
        if !args.is_empty() {
            return wrong_arity("size");
        }
        Reply::Integer(self.cache.len() as u64)
    }

    fn handle_maxsize(&self, args: &[&str]) -> Reply {
        if !args.is_empty() {
            return wrong_arity("maxsize");
        }
        Reply::Integer(self.cache.capacity() as u64)
    }

    fn handle_keys(&self, args: &[&str]) -> Reply {
        if !args.is_empty() {
            return wrong_arity("keys");
        }
        Reply::Array(self.cache.iter().map(|(k, _)| k.clone()).collect())
    }
}

fn wrong_arity(command: &str) -> Reply {
    Reply::err(format!(
        "wrong number of arguments for '{}' command",
        command
    ))
}
