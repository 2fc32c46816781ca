use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Idle time after which a session is closed (5 minutes)
pub const DEFAULT_IDLE_SECS: u64 = 5 * 60;

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Where persisted settings live
    pub state_path: PathBuf,
    pub idle_timeout: Duration,
    /// Fixed queue seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Users allowed to stop any session
    pub owners: Vec<String>,
    /// User id of the local (stdin) player
    pub user: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from("state.json"),
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_SECS),
            seed: None,
            owners: Vec::new(),
            user: "local".to_string(),
        }
    }
}

impl HostConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let state_path = lookup("CHAT_TETRIS_STATE_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.state_path);

        let idle_timeout = lookup("CHAT_TETRIS_IDLE_SECS")
            .and_then(|s| s.trim().parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.idle_timeout);

        let seed = lookup("CHAT_TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let owners = lookup("CHAT_TETRIS_OWNERS")
            .map(|s| parse_owner_list(&s))
            .unwrap_or_default();

        let user = lookup("CHAT_TETRIS_USER")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.user);

        Self {
            state_path,
            idle_timeout,
            seed,
            owners,
            user,
        }
    }

    pub fn is_owner(&self, user: &str) -> bool {
        self.owners.iter().any(|owner| owner == user)
    }
}

fn parse_owner_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
