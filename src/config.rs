use color_eyre::eyre::{Result, WrapErr};
use database::RosterSourceConfig;
use std::env;

pub const DEFAULT_PORT: u16 = 18000;

#[derive(Debug)]
pub struct AppConfig {
    pub is_one_shot: bool,
    pub source: RosterSourceConfig,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let is_one_shot = var("MODE").as_deref() == Some("ONESHOT");

        let source = match var("ROSTER_SOURCE") {
            Some(value) => value
                .parse()
                .wrap_err_with(|| format!("invalid ROSTER_SOURCE {:?}", value))?,
            None => RosterSourceConfig::default(),
        };

        let port = match var("PORT") {
            Some(value) => value
                .parse()
                .wrap_err_with(|| format!("invalid PORT {:?}", value))?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            is_one_shot,
            source,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        AppConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_embedded_server() {
        let config = config(&[]).unwrap();

        assert!(!config.is_one_shot);
        assert!(matches!(config.source, RosterSourceConfig::Embedded(_)));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn reads_all_variables() {
        let config = config(&[
            ("MODE", "ONESHOT"),
            ("ROSTER_SOURCE", "http://localhost:8080/data/roster.json"),
            ("PORT", "8081"),
        ])
        .unwrap();

        assert!(config.is_one_shot);
        assert!(matches!(config.source, RosterSourceConfig::Http(_)));
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("ROSTER_SOURCE", "https://example.com/roster.json")]).is_err());
    }
}
