use std::{env, path::PathBuf};

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub bind_addr: String,
    pub kv_dir: PathBuf,
    pub muse: MuseConfig,
}

#[derive(Clone, PartialEq, Eq)]
pub struct MuseConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
}

impl std::fmt::Debug for MuseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MuseConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match read("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|err| anyhow::anyhow!("invalid PORT `{raw}`: {err}"))?,
            None => 3000,
        };

        Ok(Self {
            port,
            bind_addr: read("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),
            kv_dir: read("CONTENT_KV_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data/kv")),
            muse: MuseConfig {
                api_key: read("GEMINI_API_KEY"),
                api_base: read("GEMINI_API_BASE")
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
                model: read("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            },
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = config_from(&[]).expect("defaults");
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
        assert_eq!(config.kv_dir, PathBuf::from("./data/kv"));
        assert_eq!(config.muse.api_key, None);
        assert_eq!(config.muse.model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = config_from(&[("GEMINI_API_KEY", "   "), ("PORT", "8080")]).expect("parse");
        assert_eq!(config.muse.api_key, None);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(config_from(&[("PORT", "http")]).is_err());
    }

    #[test]
    fn debug_output_hides_the_key() {
        let config = config_from(&[("GEMINI_API_KEY", "secret-key")]).expect("parse");
        assert!(!format!("{config:?}").contains("secret-key"));
    }
}
