use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";
pub const DEFAULT_CONTENT_FILE: &str = "frontend/data/content.json";
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Default content document handed to editors on first visit and on reset.
    pub content_file: PathBuf,
    pub static_dir: PathBuf,
    /// When set, CORS only admits this origin.
    pub frontend_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR `{}` is not a socket address", bind_addr))?;

        Ok(Self {
            bind_addr,
            content_file: lookup("CONTENT_FILE")
                .unwrap_or_else(|| DEFAULT_CONTENT_FILE.to_string())
                .into(),
            static_dir: lookup("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
            frontend_url: lookup("FRONTEND_URL").filter(|url| !url.trim().is_empty()),
        })
    }
}
