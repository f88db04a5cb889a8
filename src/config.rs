use std::env;
use std::str::FromStr;

use crate::constants::DEFAULT_DAILY_GOAL;
use crate::logging::LogConfig;
use crate::progress::ProgressOptions;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    pub sled_path: String,
    pub seed_on_empty: bool,
    pub default_daily_goal: u32,
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self {
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
            sled_path: env_or("SLED_PATH", "./data/progress.sled"),
            seed_on_empty: env_or_bool("SEED_ON_EMPTY", true),
            default_daily_goal: env_or_parse("DEFAULT_DAILY_GOAL", DEFAULT_DAILY_GOAL),
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            log_level: self.log_level.clone(),
            enable_file_logs: self.enable_file_logs,
            log_dir: self.log_dir.clone(),
        }
    }

    pub fn progress_options(&self) -> ProgressOptions {
        ProgressOptions {
            seed_on_empty: self.seed_on_empty,
            default_daily_goal: self.default_daily_goal,
        }
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};

    use super::*;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn managed_keys() -> &'static [&'static str] {
        &[
            "RUST_LOG",
            "SLED_PATH",
            "SEED_ON_EMPTY",
            "DEFAULT_DAILY_GOAL",
            "ENABLE_FILE_LOGS",
        ]
    }

    fn clear_keys(keys: &[&str]) {
        for key in keys {
            env::remove_var(key);
        }
    }

    #[test]
    fn loads_defaults_when_missing() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        let cfg = Config::from_env();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.sled_path, "./data/progress.sled");
        assert!(cfg.seed_on_empty);
        assert_eq!(cfg.default_daily_goal, 20);
        assert!(!cfg.enable_file_logs);
    }

    #[test]
    fn parses_overrides() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        env::set_var("DEFAULT_DAILY_GOAL", "35");
        env::set_var("SEED_ON_EMPTY", "off");
        env::set_var("SLED_PATH", "/tmp/cards.sled");

        let cfg = Config::from_env();
        let options = cfg.progress_options();
        assert_eq!(options.default_daily_goal, 35);
        assert!(!options.seed_on_empty);
        assert_eq!(cfg.sled_path, "/tmp/cards.sled");
        clear_keys(managed_keys());
    }

    #[test]
    fn invalid_values_fall_back() {
        let _guard = env_lock().lock().expect("env lock");
        clear_keys(managed_keys());

        env::set_var("DEFAULT_DAILY_GOAL", "lots");
        env::set_var("SEED_ON_EMPTY", "maybe");

        let cfg = Config::from_env();
        assert_eq!(cfg.default_daily_goal, 20);
        assert!(cfg.seed_on_empty);
        clear_keys(managed_keys());
    }
}
