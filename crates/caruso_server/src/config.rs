//! Server configuration.

use caruso_error::ConfigError;
use std::path::PathBuf;

/// Configuration for the HTTP server and artifact storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Directory for generated audio files
    pub audio_dir: PathBuf,
    /// Path of the metadata ledger file
    pub ledger_path: PathBuf,
    /// Maximum number of artifacts to retain
    pub capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            audio_dir: PathBuf::from("audio_generations"),
            ledger_path: PathBuf::from("audio_metadata.json"),
            capacity: 5,
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `CARUSO_PORT` (default: 8000)
    /// - `CARUSO_AUDIO_DIR` (default: "audio_generations")
    /// - `CARUSO_LEDGER_PATH` (default: "audio_metadata.json")
    /// - `CARUSO_RETENTION` (default: 5, must be a positive integer)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("CARUSO_PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::new(format!("CARUSO_PORT is not a valid port: {port}")))?;
        }

        if let Ok(audio_dir) = std::env::var("CARUSO_AUDIO_DIR") {
            config.audio_dir = PathBuf::from(audio_dir);
        }

        if let Ok(ledger_path) = std::env::var("CARUSO_LEDGER_PATH") {
            config.ledger_path = PathBuf::from(ledger_path);
        }

        if let Ok(capacity) = std::env::var("CARUSO_RETENTION") {
            config.capacity = capacity.parse().map_err(|_| {
                ConfigError::new(format!("CARUSO_RETENTION is not a valid count: {capacity}"))
            })?;
            if config.capacity == 0 {
                return Err(ConfigError::new(
                    "CARUSO_RETENTION must be greater than zero",
                ));
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_service_layout() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.audio_dir, PathBuf::from("audio_generations"));
        assert_eq!(config.ledger_path, PathBuf::from("audio_metadata.json"));
        assert_eq!(config.capacity, 5);
    }
}
