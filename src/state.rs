use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::{
    equipment::EquipmentRepository,
    farm::FarmRepository,
    notification::{NotificationRepository, NotificationService},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub notification_service: NotificationService,
    pub farm_repository: Arc<FarmRepository>,
    pub equipment_repository: Arc<EquipmentRepository>,
}

impl AppState {
    /// Builds the state from seed data. Every restart starts from the seed.
    pub fn new(config: Config) -> Self {
        let (notification_tx, _) = broadcast::channel(config.notification_event_capacity);

        let notification_service = NotificationService::new(
            NotificationRepository::seeded(),
            notification_tx,
            config.notification_strict_ids,
        );

        Self {
            config: Arc::new(config),
            notification_service,
            farm_repository: Arc::new(FarmRepository::seeded()),
            equipment_repository: Arc::new(EquipmentRepository::seeded()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub notification_strict_ids: bool,
    pub notification_event_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            notification_strict_ids: false,
            notification_event_capacity: 100,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                expected: "a port number",
                value,
            })?,
            None => defaults.port,
        };

        let notification_strict_ids = match lookup("NOTIFICATION_STRICT_IDS") {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "NOTIFICATION_STRICT_IDS",
                        expected: "a boolean",
                        value,
                    })
                }
            },
            None => defaults.notification_strict_ids,
        };

        let notification_event_capacity = match lookup("NOTIFICATION_EVENT_CAPACITY") {
            Some(value) => match value.parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "NOTIFICATION_EVENT_CAPACITY",
                        expected: "a positive integer",
                        value,
                    })
                }
            },
            None => defaults.notification_event_capacity,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            notification_strict_ids,
            notification_event_capacity,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:3000");
        assert!(!config.notification_strict_ids);
        assert_eq!(config.notification_event_capacity, 100);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("NOTIFICATION_STRICT_IDS", "TRUE"),
            ("NOTIFICATION_EVENT_CAPACITY", "8"),
        ])
        .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert!(config.notification_strict_ids);
        assert_eq!(config.notification_event_capacity, 8);
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("NOTIFICATION_STRICT_IDS", "maybe")]).is_err());
        assert!(config_from(&[("NOTIFICATION_EVENT_CAPACITY", "0")]).is_err());
    }
}
