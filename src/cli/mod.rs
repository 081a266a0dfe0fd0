//! Command-line interface

use crate::models::Config;
use clap::Parser;
use std::time::Duration;
use url::Url;

/// Breadcrumb API Benchmark - times path-from-root lookups over deep directory chains
#[derive(Parser, Debug, Clone)]
#[command(name = "breadcrumb-bench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the file-management API
    #[arg(long, default_value = crate::defaults::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Number of nested directories to create
    #[arg(long, default_value_t = crate::defaults::DEFAULT_DEPTH)]
    pub depth: u32,

    /// Number of timed breadcrumb calls after the warm-up
    #[arg(long, default_value_t = crate::defaults::DEFAULT_REPEATS)]
    pub repeats: u32,

    /// Request timeout in seconds
    #[arg(short, long, value_parser = parse_duration, default_value_t = crate::defaults::DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.repeats < 1 {
            return Err("--repeats must be at least 1".to_string());
        }

        match Url::parse(&self.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => {
                return Err(format!(
                    "Base URL must use http or https, got '{}'",
                    url.scheme()
                ));
            }
            Err(e) => return Err(format!("Invalid base URL '{}': {}", self.base_url, e)),
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            supports_color()
        }
    }

    /// Build the resolved run configuration
    pub fn into_config(self) -> Config {
        let enable_color = self.use_colors();
        Config {
            base_url: self.base_url,
            depth: self.depth,
            repeats: self.repeats,
            timeout: Duration::from_secs(self.timeout),
            enable_color,
            verbose: self.verbose,
            debug: self.debug,
        }
    }
}

/// Parse a timeout value in whole seconds
fn parse_duration(s: &str) -> Result<u64, String> {
    if s.starts_with('+') || s.starts_with("0x") || s.starts_with("0X") {
        return Err(format!("Invalid duration: {}", s));
    }

    s.parse::<u64>()
        .map_err(|_| format!("Invalid duration: {}", s))
        .and_then(|secs| {
            if secs == 0 {
                Err("Duration must be greater than 0".to_string())
            } else {
                Ok(secs)
            }
        })
}

/// Detect terminal color support from the environment
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    true
}
