use std::env;
use std::path::PathBuf;

use anyhow::{Context, bail};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store: StoreBackend,
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
    pub operator_email: String,
    pub notify_webhook_url: Option<String>,
    pub notify_verify: bool,
}

impl Config {
    /// Read the whole configuration from the environment. Called once at
    /// startup; the result is never mutated afterwards.
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            port: var_or("PORT", "3000")
                .parse()
                .context("PORT must be a port number")?,
            store: parse_backend(&var_or("RSVP_STORE", "file"))?,
            data_dir: PathBuf::from(var_or("DATA_DIR", "data")),
            public_dir: PathBuf::from(var_or("PUBLIC_DIR", "public")),
            operator_email: var_or("OPERATOR_EMAIL", "operator@localhost"),
            notify_webhook_url: env::var("NOTIFY_WEBHOOK_URL").ok(),
            notify_verify: var_or("NOTIFY_VERIFY", "false")
                .parse()
                .context("NOTIFY_VERIFY must be true or false")?,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn parse_backend(raw: &str) -> anyhow::Result<StoreBackend> {
    match raw {
        "file" => Ok(StoreBackend::File),
        "memory" => Ok(StoreBackend::Memory),
        other => bail!("RSVP_STORE must be \"file\" or \"memory\", got \"{other}\""),
    }
}
