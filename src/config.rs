//! Command line, environment and on-disk configuration.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::github::{ClientConfig, DEFAULT_API_URL};

const APP_DIR: &str = "gh-lookup";

/// Look up public GitHub profiles from the terminal.
#[derive(Debug, Parser)]
#[command(name = "gh-lookup", version, about)]
pub struct Cli {
    /// Username to look up right away
    pub username: Option<String>,

    /// Bearer token sent with every request; unauthenticated when absent
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GH_LOOKUP_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Log file (the terminal belongs to the UI)
    #[arg(long, env = "GH_LOOKUP_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Directory holding theme.conf and keybinds.conf
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

impl Cli {
    pub fn client_config(&self) -> Result<ClientConfig> {
        Ok(ClientConfig::new(&self.api_url)?
            .with_token(self.token.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs)))
    }

    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone().unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        })
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join("gh-lookup.log")
        })
    }
}

/// Send `tracing` output to `path`, filtered by `RUST_LOG` (default `info`).
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["gh-lookup"]).expect("parse");
        assert!(cli.username.is_none());
        assert_eq!(cli.timeout_secs, 10);
        let cfg = cli.client_config().expect("client config");
        assert_eq!(cfg.timeout, Duration::from_secs(10));
    }

    #[test]
    fn explicit_flags() {
        let cli = Cli::try_parse_from([
            "gh-lookup",
            "octocat",
            "--token",
            "secret",
            "--api-url",
            "http://127.0.0.1:9000",
            "--timeout-secs",
            "3",
            "--config-dir",
            "/tmp/ghl",
        ])
        .expect("parse");
        assert_eq!(cli.username.as_deref(), Some("octocat"));
        assert_eq!(cli.config_dir(), PathBuf::from("/tmp/ghl"));
        let cfg = cli.client_config().expect("client config");
        assert_eq!(cfg.token.as_deref(), Some("secret"));
        assert_eq!(cfg.api_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(cfg.timeout, Duration::from_secs(3));
    }

    #[test]
    fn zero_timeout_rejected() {
        assert!(Cli::try_parse_from(["gh-lookup", "--timeout-secs", "0"]).is_err());
    }
}
