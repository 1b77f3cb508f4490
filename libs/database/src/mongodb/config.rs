#[cfg(feature = "config")]
use core_config::{env_or_default, ConfigError, FromEnv};

/// MongoDB connection settings.
///
/// Defaults target a local instance (`mongodb://localhost:27017`,
/// database `mydatabase`); deployments override through the
/// environment (with the `config` feature) or construct one directly.
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string: mongodb://[user:pass@]host[:port][?options]
    pub url: String,
    /// Database name
    pub database: String,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

const DEFAULT_URL: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "mydatabase";

impl MongoConfig {
    /// Settings for `url` with the default database and timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: DEFAULT_DATABASE.to_string(),
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }

    /// Settings for `url` against a named database.
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Self::new(url)
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

/// Environment variables (all optional):
/// - `MONGODB_URL` (default: `mongodb://localhost:27017`)
/// - `MONGODB_DATABASE` (default: `mydatabase`)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let parse_secs = |key: &str, default: &str| {
            env_or_default(key, default)
                .parse::<u64>()
                .map_err(|e| ConfigError::ParseError {
                    key: key.to_string(),
                    details: format!("{}", e),
                })
        };

        Ok(Self {
            url: env_or_default("MONGODB_URL", DEFAULT_URL),
            database: env_or_default("MONGODB_DATABASE", DEFAULT_DATABASE),
            connect_timeout_secs: parse_secs("MONGODB_CONNECT_TIMEOUT_SECS", "10")?,
            server_selection_timeout_secs: parse_secs("MONGODB_SERVER_SELECTION_TIMEOUT_SECS", "30")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(MongoConfig::new("mongodb://db:27017").database, "mydatabase");
        assert_eq!(
            MongoConfig::with_database("mongodb://db:27017", "inventory").database,
            "inventory"
        );
        assert_eq!(MongoConfig::default().url, "mongodb://localhost:27017");
    }

    #[cfg(feature = "config")]
    mod from_env {
        use super::*;
        use core_config::FromEnv;

        #[test]
        fn test_unset_environment_yields_local_defaults() {
            temp_env::with_vars(
                [
                    ("MONGODB_URL", None::<&str>),
                    ("MONGODB_DATABASE", None::<&str>),
                ],
                || {
                    let config = MongoConfig::from_env().unwrap();
                    assert_eq!(config.url, "mongodb://localhost:27017");
                    assert_eq!(config.database, "mydatabase");
                    assert_eq!(config.connect_timeout_secs, 10);
                    assert_eq!(config.server_selection_timeout_secs, 30);
                },
            );
        }

        #[test]
        fn test_environment_overrides_apply() {
            temp_env::with_vars(
                [
                    ("MONGODB_URL", Some("mongodb://db-host:27017")),
                    ("MONGODB_DATABASE", Some("warehouse")),
                    ("MONGODB_CONNECT_TIMEOUT_SECS", Some("3")),
                ],
                || {
                    let config = MongoConfig::from_env().unwrap();
                    assert_eq!(config.url, "mongodb://db-host:27017");
                    assert_eq!(config.database, "warehouse");
                    assert_eq!(config.connect_timeout_secs, 3);
                },
            );
        }

        #[test]
        fn test_unparseable_timeout_is_an_error() {
            temp_env::with_var("MONGODB_CONNECT_TIMEOUT_SECS", Some("soon"), || {
                let err = MongoConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("MONGODB_CONNECT_TIMEOUT_SECS"));
            });
        }
    }
}
