//! Start-up configuration, read from the environment (and `.env`).

use crate::console::ResponseOrdering;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const APP_NAME: &str = "Clinic Console";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub bind: String,
    pub backend_url: String,
    pub ordering: ResponseOrdering,
    pub app_name: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            bind: DEFAULT_BIND.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            ordering: ResponseOrdering::default(),
            app_name: APP_NAME.to_string(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = ConsoleConfig::default();

        let ordering = match get("CONSOLE_RESPONSE_ORDERING") {
            Some(raw) => ResponseOrdering::parse(&raw).unwrap_or_else(|| {
                log::warn!("Unknown CONSOLE_RESPONSE_ORDERING '{raw}', using last-arrival");
                ResponseOrdering::LastArrival
            }),
            None => defaults.ordering,
        };

        ConsoleConfig {
            bind: get("CONSOLE_BIND").unwrap_or(defaults.bind),
            backend_url: get("CLINIC_BACKEND_URL").unwrap_or(defaults.backend_url),
            ordering,
            app_name: get("CONSOLE_APP_NAME").unwrap_or(defaults.app_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ConsoleConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, ConsoleConfig::default());
        assert_eq!(cfg.ordering, ResponseOrdering::LastArrival);
    }

    #[test]
    fn reads_overrides() {
        let cfg = ConsoleConfig::from_lookup(lookup(&[
            ("CONSOLE_BIND", "0.0.0.0:9000"),
            ("CLINIC_BACKEND_URL", "http://backend:5000"),
            ("CONSOLE_RESPONSE_ORDERING", "newest-request"),
        ]));
        assert_eq!(cfg.bind, "0.0.0.0:9000");
        assert_eq!(cfg.backend_url, "http://backend:5000");
        assert_eq!(cfg.ordering, ResponseOrdering::NewestRequest);
    }

    #[test]
    fn unknown_ordering_falls_back() {
        let cfg = ConsoleConfig::from_lookup(lookup(&[("CONSOLE_RESPONSE_ORDERING", "fastest")]));
        assert_eq!(cfg.ordering, ResponseOrdering::LastArrival);
    }

    #[test]
    fn blank_values_are_ignored() {
        let cfg = ConsoleConfig::from_lookup(lookup(&[("CONSOLE_BIND", "  ")]));
        assert_eq!(cfg.bind, DEFAULT_BIND);
    }
}
