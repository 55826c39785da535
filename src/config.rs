use crate::error::ConfigError;
use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Listening configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST` and `PORT` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let port = match port.filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidVar {
                    name: "PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: host
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn port_override() {
        let config = ServerConfig::from_vars(Some("127.0.0.1".into()), Some("8080".into())).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ServerConfig::from_vars(Some(" ".into()), Some("".into())).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = ServerConfig::from_vars(None, Some("http".into())).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        assert!(ServerConfig::from_vars(None, Some("70000".into())).is_err());
    }
}
