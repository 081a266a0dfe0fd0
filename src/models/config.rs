//! Run configuration and throwaway account material

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Resolved configuration for a benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the file-management API (e.g. `http://localhost:3000/api`)
    pub base_url: String,

    /// Number of nested directories to create
    pub depth: u32,

    /// Number of timed breadcrumb calls (excluding the warm-up)
    pub repeats: u32,

    /// Request timeout for the underlying HTTP client
    pub timeout: Duration,

    /// Enable colored output
    pub enable_color: bool,

    /// Enable verbose output
    pub verbose: bool,

    /// Enable debug output
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: crate::defaults::DEFAULT_BASE_URL.to_string(),
            depth: crate::defaults::DEFAULT_DEPTH,
            repeats: crate::defaults::DEFAULT_REPEATS,
            timeout: crate::defaults::DEFAULT_TIMEOUT,
            enable_color: true,
            verbose: false,
            debug: false,
        }
    }
}

/// Throwaway account material for a single benchmark run
///
/// Derived from a random identifier so concurrent or repeated runs never
/// collide on the server. Lives only for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub email: String,
    pub nickname: Option<String>,
    pub description: Option<String>,
}

impl Credentials {
    /// Generate fresh credentials from a random 12-hex-char run id
    pub fn generate() -> Self {
        let uid: String = Uuid::new_v4().simple().to_string()[..12].to_string();
        Self {
            username: format!("bench_{}", uid),
            password: format!("P@ssw0rd_{}!", uid),
            email: format!("{}@example.local", uid),
            nickname: None,
            description: None,
        }
    }
}
