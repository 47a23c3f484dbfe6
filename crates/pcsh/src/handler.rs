//! Command handler for the cache shell

use policycache::DynCache;
use std::sync::Arc;
use tracing::debug;

use crate::reply::Reply;

pub struct CommandHandler {
    cache: Arc<DynCache<String, String>>,
}

impl CommandHandler {
    pub fn new(cache: Arc<DynCache<String, String>>) -> Self {
        Self { cache }
    }

    /// Execute one input line
    ///
    /// Returns `None` for blank lines and `#` comments.
    pub fn handle(&self, line: &str) -> Option<Reply> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let mut parts = line.split_whitespace();
        let command = parts.next()?.to_uppercase();
        let args: Vec<&str> = parts.collect();

        let reply = match command.as_str() {
            "PING" => self.handle_ping(&args),
            "GET" => self.handle_get(&args),
            "SET" => self.handle_set(&args),
            "DEL" => self.handle_del(&args),
            "EXISTS" => self.handle_exists(&args),
            "KEYS" => self.handle_keys(&args),
            "DBSIZE" => self.handle_dbsize(),
            "FLUSHDB" => self.handle_flushdb(),
            "INFO" => self.handle_info(),
            _ => Reply::Error(format!("ERR unknown command '{}'", command)),
        };

        Some(reply)
    }

    fn handle_ping(&self, args: &[&str]) -> Reply {
        match args {
            [] => Reply::Status("PONG".to_string()),
            [message] => Reply::Bulk(Some(message.to_string())),
            _ => Reply::wrong_arity("ping"),
        }
    }

    fn handle_get(&self, args: &[&str]) -> Reply {
        match args {
            [key] => Reply::Bulk(self.cache.get(*key)),
            _ => Reply::wrong_arity("get"),
        }
    }

    fn handle_set(&self, args: &[&str]) -> Reply {
        if args.len() < 2 {
            return Reply::wrong_arity("set");
        }

        let key = args[0].to_string();
        let value = args[1..].join(" ");

        if let Some((evicted, _)) = self.cache.set(key, value) {
            debug!("Evicted key: {}", evicted);
        }
        Reply::ok()
    }

    fn handle_del(&self, args: &[&str]) -> Reply {
        if args.is_empty() {
            return Reply::wrong_arity("del");
        }

        let deleted = args
            .iter()
            .filter(|key| self.cache.remove(**key).is_some())
            .count();
        Reply::Integer(deleted as i64)
    }

    fn handle_exists(&self, args: &[&str]) -> Reply {
        if args.is_empty() {
            return Reply::wrong_arity("exists");
        }

        let count = args
            .iter()
            .filter(|key| self.cache.contains_key(**key))
            .count();
        Reply::Integer(count as i64)
    }

    fn handle_keys(&self, args: &[&str]) -> Reply {
        if !args.is_empty() {
            return Reply::wrong_arity("keys");
        }

        Reply::Array(
            self.cache
                .keys()
                .into_iter()
                .map(|key| Reply::Bulk(Some(key)))
                .collect(),
        )
    }

    fn handle_dbsize(&self) -> Reply {
        Reply::Integer(self.cache.len() as i64)
    }

    fn handle_flushdb(&self) -> Reply {
        self.cache.clear();
        Reply::ok()
    }

    fn handle_info(&self) -> Reply {
        let info = format!(
            "# Cache\n\
             pcsh_version:{}\n\
             policy:{}\n\
             size:{}\n\
             capacity:{}\n",
            env!("CARGO_PKG_VERSION"),
            self.cache.policy_name(),
            self.cache.len(),
            self.cache.capacity(),
        );
        Reply::Text(info)
    }
}
