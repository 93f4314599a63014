use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_PATH: &str = "data/campuscommons.db";

/// Process configuration. Only the listening port and the store file are
/// configurable; everything else is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub db_path: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("COMMONS_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("COMMONS_PORT is not a valid port: {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        let db_path = lookup("COMMONS_DB_PATH")
            .unwrap_or_else(|| DEFAULT_DB_PATH.into())
            .into();

        Ok(Self { port, db_path })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        (Ipv4Addr::UNSPECIFIED, self.port).into()
    }
}
