use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:12345";
pub const DEFAULT_ROOT: &str = "./www/";

/// What a connection answers with once the request has been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeMode {
    /// Map the request path under the server root and stream the file.
    Files,
    /// Answer every well-formed request with a fixed "It works!" body.
    Fixed,
}

impl FromStr for ServeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "files" | "file" => Ok(ServeMode::Files),
            "fixed" => Ok(ServeMode::Fixed),
            other => anyhow::bail!("unknown serve mode '{}'", other),
        }
    }
}

/// How per-connection failures are reported to the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Close the connection without writing anything.
    Close,
    /// Write a 4xx/5xx response, then close.
    Respond,
}

/// Per-connection settings, shared read-only between workers.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub root: String,
    pub mode: ServeMode,
    pub error_policy: ErrorPolicy,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub site: SiteConfig,
    pub debug: bool,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup instead of the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN").unwrap_or_else(|| DEFAULT_LISTEN.to_string());
        let root = lookup("SERVER_ROOT").unwrap_or_else(|| DEFAULT_ROOT.to_string());

        let mode = match lookup("SERVE_MODE") {
            Some(value) => value.parse().context("invalid SERVE_MODE")?,
            None => ServeMode::Files,
        };

        let error_policy = if lookup("ERROR_RESPONSES").is_some_and(|v| is_truthy(&v)) {
            ErrorPolicy::Respond
        } else {
            ErrorPolicy::Close
        };

        let debug = lookup("DEBUG").is_some_and(|v| is_truthy(&v));

        Ok(Self {
            listen_addr,
            site: SiteConfig {
                root,
                mode,
                error_policy,
            },
            debug,
        })
    }

    pub fn site(&self) -> Arc<SiteConfig> {
        Arc::new(self.site.clone())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
