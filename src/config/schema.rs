use serde::{Deserialize, Serialize};

use crate::report::DEFAULT_WINDOW_DAYS;

/// Repositories watched when the config omits `repositories`
pub const DEFAULT_REPOSITORIES: [&str; 3] = [
    "kedgeproject/kedge",
    "kubernetes/kompose",
    "redhat-developer/ocdev",
];

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// "owner/name" entries, reported in this order
    pub repositories: Vec<String>,
    pub window_days: u32,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repositories: DEFAULT_REPOSITORIES.iter().map(|r| r.to_string()).collect(),
            window_days: DEFAULT_WINDOW_DAYS,
            port: DEFAULT_PORT,
        }
    }
}
