use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub struct Config {
    /// Interface to bind, `HOST`.
    pub host: String,
    /// Preferred port, `PORT`. One fallback to `port + 1` is tried on bind failure.
    pub port: u16,
    /// Directory served under `/static`, `STATIC_DIR`.
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("PORT") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {:?}", v))?,
            Err(_) => 3000,
        };
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Ok(Config {
            host,
            port,
            static_dir,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("cannot parse {}:{}", self.host, self.port))
    }

    pub fn fallback_addr(&self) -> anyhow::Result<SocketAddr> {
        let port = self
            .port
            .checked_add(1)
            .context("no fallback port above 65535")?;
        format!("{}:{}", self.host, port)
            .parse()
            .with_context(|| format!("cannot parse {}:{}", self.host, port))
    }
}
