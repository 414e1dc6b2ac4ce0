use std::path::PathBuf;

/// Environment variable overriding the listings file location.
pub const DATA_PATH_ENV: &str = "SWIGGY_DASH_DATA";

/// Where the listings file lives when nothing overrides it.
pub const DEFAULT_DATA_PATH: &str = "data/swiggy.csv";

/// Startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl DashboardConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(DATA_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            Some(path) => Self {
                data_path: PathBuf::from(path),
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_override() {
        let config = DashboardConfig::from_lookup(|_| None);
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn env_override_wins() {
        let config = DashboardConfig::from_lookup(|key| {
            (key == DATA_PATH_ENV).then(|| "/srv/listings.csv".to_string())
        });
        assert_eq!(config.data_path, PathBuf::from("/srv/listings.csv"));
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = DashboardConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, DashboardConfig::default());
    }
}
