use serde::Deserialize;
use std::fs;

const CONFIG_FILE: &str = "console.toml";
const SERVER_URL_ENV: &str = "CONSOLE_SERVER_URL";
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub server_url: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    server_url: Option<String>,
}

impl StartupConfig {
    /// Defaults, then `console.toml`, then `CONSOLE_SERVER_URL`, then the
    /// CLI flag; later layers win.
    pub fn load(cli_server_url: Option<String>) -> Self {
        let file = match fs::read_to_string(CONFIG_FILE) {
            Ok(raw) => match toml::from_str::<FileConfig>(&raw) {
                Ok(file) => Some(file),
                Err(err) => {
                    tracing::warn!("ignoring malformed {CONFIG_FILE}: {err}");
                    None
                }
            },
            Err(_) => None,
        };
        let env = std::env::var(SERVER_URL_ENV).ok();
        Self::layered(file, env, cli_server_url)
    }

    fn layered(file: Option<FileConfig>, env: Option<String>, cli: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = file.and_then(|file| file.server_url) {
            config.server_url = value;
        }
        if let Some(value) = env.filter(|value| !value.trim().is_empty()) {
            config.server_url = value;
        }
        if let Some(value) = cli {
            config.server_url = value;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_overrides() {
        let config = StartupConfig::layered(None, None, None);
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn file_overrides_default_and_env_overrides_file() {
        let file = FileConfig {
            server_url: Some("http://file:5000".to_string()),
        };
        let config = StartupConfig::layered(Some(file), Some("http://env:5000".to_string()), None);
        assert_eq!(config.server_url, "http://env:5000");
    }

    #[test]
    fn cli_flag_wins_over_everything() {
        let file = FileConfig {
            server_url: Some("http://file:5000".to_string()),
        };
        let config = StartupConfig::layered(
            Some(file),
            Some("http://env:5000".to_string()),
            Some("http://cli:5000".to_string()),
        );
        assert_eq!(config.server_url, "http://cli:5000");
    }

    #[test]
    fn blank_env_value_is_ignored() {
        let config = StartupConfig::layered(None, Some("   ".to_string()), None);
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn file_config_parses_partial_toml() {
        let file: FileConfig = toml::from_str("server_url = \"http://box:8080\"").expect("parse");
        assert_eq!(file.server_url.as_deref(), Some("http://box:8080"));

        let empty: FileConfig = toml::from_str("").expect("parse empty");
        assert!(empty.server_url.is_none());
    }
}
