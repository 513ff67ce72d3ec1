#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse_or_default};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 28015;
pub const DEFAULT_DATABASE: &str = "gvent";
pub const DEFAULT_MIN_POOL_SIZE: u32 = 3;
pub const DEFAULT_MAX_POOL_SIZE: u32 = 10;

/// Document database configuration
///
/// Holds where the database lives and how the connection pool is sized.
/// It can be constructed manually or loaded from environment variables (with `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// // Manual construction
/// let config = MongoConfig::new("db.internal", 27017);
///
/// // Full connection string
/// let config = MongoConfig::default().with_url("mongodb://user:pass@db:27017");
///
/// // From environment variables (requires `config` feature)
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MongoConfig {
    /// Database host
    pub host: String,

    /// Database port
    pub port: u16,

    /// Logical database name
    pub database: String,

    /// Full connection string; when set, `host` and `port` are ignored
    pub url: Option<String>,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    /// Connections opened up front and kept in the pool
    pub min_pool_size: u32,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Create a config pointing at `host:port` with default database and pool sizes
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Use an explicit connection string instead of `host`/`port`
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the logical database name
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the initial and maximum pool sizes
    pub fn with_pool_size(mut self, min_pool_size: u32, max_pool_size: u32) -> Self {
        self.min_pool_size = min_pool_size;
        self.max_pool_size = max_pool_size;
        self
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Connection string for the driver
    pub fn url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("mongodb://{}:{}", self.host, self.port),
        }
    }

    /// Connection string with any `user:password@` part masked, for logging
    pub fn redacted_url(&self) -> String {
        let url = self.url();
        let Some((scheme, rest)) = url.split_once("://") else {
            return url;
        };
        let authority = rest.split('/').next().unwrap_or(rest);
        match authority.rfind('@') {
            Some(at) => format!("{}://***{}", scheme, &rest[at..]),
            None => url,
        }
    }

    /// Get the database name
    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            url: None,
            app_name: None,
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

/// Load MongoConfig from environment variables
///
/// Environment variables (all optional, unset or empty falls back to the default):
/// - `GVENT_DATABASE_HOST` (default: localhost)
/// - `GVENT_DATABASE_PORT` (default: 28015)
/// - `GVENT_DATABASE_NAME` (default: gvent)
/// - `GVENT_DATABASE_POOL_INITIAL` (default: 3)
/// - `GVENT_DATABASE_POOL_MAX` (default: 10)
/// - `GVENT_DATABASE_URL` - full connection string, overrides host and port
/// - `GVENT_DATABASE_APP_NAME` - application name for server logs
/// - `GVENT_DATABASE_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `GVENT_DATABASE_SERVER_SELECTION_TIMEOUT_SECS` (default: 30)
///
/// A numeric variable that is set but does not parse is an error, as is an
/// initial pool size larger than the maximum. Neither falls back to the
/// default pool size.
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let config = Self {
            host: non_empty("GVENT_DATABASE_HOST").unwrap_or(defaults.host),
            port: env_parse_or_default("GVENT_DATABASE_PORT", defaults.port)?,
            database: non_empty("GVENT_DATABASE_NAME").unwrap_or(defaults.database),
            url: non_empty("GVENT_DATABASE_URL"),
            app_name: non_empty("GVENT_DATABASE_APP_NAME"),
            min_pool_size: env_parse_or_default(
                "GVENT_DATABASE_POOL_INITIAL",
                defaults.min_pool_size,
            )?,
            max_pool_size: env_parse_or_default("GVENT_DATABASE_POOL_MAX", defaults.max_pool_size)?,
            connect_timeout_secs: env_parse_or_default(
                "GVENT_DATABASE_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            server_selection_timeout_secs: env_parse_or_default(
                "GVENT_DATABASE_SERVER_SELECTION_TIMEOUT_SECS",
                defaults.server_selection_timeout_secs,
            )?,
        };

        if config.min_pool_size > config.max_pool_size {
            return Err(ConfigError::Invalid {
                key: "GVENT_DATABASE_POOL_INITIAL".to_string(),
                details: format!(
                    "initial pool size {} exceeds maximum {}",
                    config.min_pool_size, config.max_pool_size
                ),
            });
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_default() {
        let config = MongoConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 28015);
        assert_eq!(config.database, "gvent");
        assert_eq!(config.min_pool_size, 3);
        assert_eq!(config.max_pool_size, 10);
        assert_eq!(config.url(), "mongodb://localhost:28015");
    }

    #[test]
    fn test_mongo_config_new() {
        let config = MongoConfig::new("db.internal", 27017);
        assert_eq!(config.url(), "mongodb://db.internal:27017");
        assert_eq!(config.database(), "gvent");
    }

    #[test]
    fn test_url_override_wins() {
        let config = MongoConfig::new("ignored", 1).with_url("mongodb://other:27017/?replicaSet=rs0");
        assert_eq!(config.url(), "mongodb://other:27017/?replicaSet=rs0");
    }

    #[test]
    fn test_redacted_url_hides_credentials() {
        let config = MongoConfig::default().with_url("mongodb://user:s3cret@db:27017/?authSource=admin");
        let redacted = config.redacted_url();

        assert_eq!(redacted, "mongodb://***@db:27017/?authSource=admin");
        assert!(!redacted.contains("s3cret"));
    }

    #[test]
    fn test_redacted_url_ignores_at_sign_in_options() {
        let config = MongoConfig::default().with_url("mongodb://db:27017/?appName=a@b");
        assert_eq!(config.redacted_url(), "mongodb://db:27017/?appName=a@b");
    }

    #[test]
    fn test_redacted_url_leaves_plain_urls() {
        assert_eq!(
            MongoConfig::new("db", 27017).redacted_url(),
            "mongodb://db:27017"
        );
    }

    #[test]
    fn test_builders() {
        let config = MongoConfig::default()
            .with_database("calendar")
            .with_pool_size(1, 4)
            .with_app_name("gvent-api");
        assert_eq!(config.database, "calendar");
        assert_eq!(config.min_pool_size, 1);
        assert_eq!(config.max_pool_size, 4);
        assert_eq!(config.app_name, Some("gvent-api".to_string()));
    }

    #[cfg(feature = "config")]
    const ALL_VARS: [&str; 9] = [
        "GVENT_DATABASE_HOST",
        "GVENT_DATABASE_PORT",
        "GVENT_DATABASE_NAME",
        "GVENT_DATABASE_POOL_INITIAL",
        "GVENT_DATABASE_POOL_MAX",
        "GVENT_DATABASE_URL",
        "GVENT_DATABASE_APP_NAME",
        "GVENT_DATABASE_CONNECT_TIMEOUT_SECS",
        "GVENT_DATABASE_SERVER_SELECTION_TIMEOUT_SECS",
    ];

    #[cfg(feature = "config")]
    fn with_env<F: FnOnce()>(set: &[(&str, &str)], f: F) {
        let vars: Vec<(&str, Option<&str>)> = ALL_VARS
            .iter()
            .map(|key| {
                let value = set.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
                (*key, value)
            })
            .collect();
        temp_env::with_vars(vars, f);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_defaults_when_unset() {
        with_env(&[], || {
            let config = MongoConfig::from_env().unwrap();
            assert_eq!(config, MongoConfig::default());
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_reads_values() {
        with_env(
            &[
                ("GVENT_DATABASE_HOST", "db"),
                ("GVENT_DATABASE_PORT", "27017"),
                ("GVENT_DATABASE_NAME", "staging"),
                ("GVENT_DATABASE_POOL_INITIAL", "2"),
                ("GVENT_DATABASE_POOL_MAX", "20"),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url(), "mongodb://db:27017");
                assert_eq!(config.database, "staging");
                assert_eq!(config.min_pool_size, 2);
                assert_eq!(config.max_pool_size, 20);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_empty_values_use_defaults() {
        with_env(
            &[("GVENT_DATABASE_HOST", ""), ("GVENT_DATABASE_PORT", "")],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.host, "localhost");
                assert_eq!(config.port, 28015);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_unparsable_pool_size_fails() {
        with_env(&[("GVENT_DATABASE_POOL_MAX", "ten")], || {
            let err = MongoConfig::from_env().unwrap_err();
            assert!(
                matches!(err, ConfigError::ParseError { ref key, .. } if key == "GVENT_DATABASE_POOL_MAX")
            );
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_unparsable_port_fails() {
        with_env(&[("GVENT_DATABASE_PORT", "not-a-port")], || {
            let err = MongoConfig::from_env().unwrap_err();
            assert!(
                matches!(err, ConfigError::ParseError { ref key, .. } if key == "GVENT_DATABASE_PORT")
            );
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_initial_larger_than_max_fails() {
        with_env(
            &[
                ("GVENT_DATABASE_POOL_INITIAL", "11"),
                ("GVENT_DATABASE_POOL_MAX", "10"),
            ],
            || {
                let err = MongoConfig::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::Invalid { .. }));
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_url_override() {
        with_env(
            &[
                ("GVENT_DATABASE_HOST", "ignored"),
                ("GVENT_DATABASE_URL", "mongodb://mongo:27017"),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url(), "mongodb://mongo:27017");
            },
        );
    }
}
