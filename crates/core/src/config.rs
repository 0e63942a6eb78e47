use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::context::DeploymentEdition;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
pub(crate) fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

// ── Top-level config ──────────────────────────────────────────

/// Framework-level configuration, read from environment variables.
///
/// When `DATACHECK_PROFILE=PROD`, every key is first looked up as
/// `PROD_{KEY}`, falling back to the unprefixed `{KEY}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    /// Root directory for file-backed stores.
    pub data_dir: PathBuf,
    /// Which product edition is running (decides partner attribution).
    pub edition: DeploymentEdition,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        let profile = env_or("DATACHECK_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();

        let edition = match profiled_env_opt(p, "DATACHECK_EDITION").as_deref() {
            Some("cloud") => DeploymentEdition::Cloud,
            _ => DeploymentEdition::SelfHosted,
        };

        Self {
            profile: p.to_string(),
            data_dir: PathBuf::from(profiled_env_or(p, "DATACHECK_DATA_DIR", "data")),
            edition,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env-based tests must run serially to avoid interfering with each other.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        let keys = [
            "DATACHECK_PROFILE",
            "DATACHECK_DATA_DIR",
            "DATACHECK_EDITION",
            "TEST_DATACHECK_DATA_DIR",
            "TEST_DATACHECK_EDITION",
        ];
        for k in keys {
            env::remove_var(k);
        }
    }

    #[test]
    fn defaults_when_no_env_vars() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        let cfg = Config::for_profile("");

        assert_eq!(cfg.data_dir, PathBuf::from("data"));
        assert_eq!(cfg.edition, DeploymentEdition::SelfHosted);
    }

    #[test]
    fn reads_edition_and_data_dir() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        env::set_var("DATACHECK_EDITION", "cloud");
        env::set_var("DATACHECK_DATA_DIR", "/var/lib/datacheck");

        let cfg = Config::for_profile("");
        assert_eq!(cfg.edition, DeploymentEdition::Cloud);
        assert_eq!(cfg.data_dir, PathBuf::from("/var/lib/datacheck"));

        clear_env();
    }

    #[test]
    fn profiled_env_takes_precedence() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        env::set_var("DATACHECK_DATA_DIR", "base");
        env::set_var("TEST_DATACHECK_DATA_DIR", "test");

        let cfg = Config::for_profile("TEST");
        assert_eq!(cfg.data_dir, PathBuf::from("test"));

        clear_env();
    }

    #[test]
    fn unknown_edition_falls_back_to_self_hosted() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        env::set_var("DATACHECK_EDITION", "enterprise");

        let cfg = Config::for_profile("");
        assert_eq!(cfg.edition, DeploymentEdition::SelfHosted);

        clear_env();
    }
}
