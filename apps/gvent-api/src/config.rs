use core_config::tracing::log_level_from_env;
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use tracing::Level;

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            mongodb: MongoConfig::from_env()?,
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            log_level: log_level_from_env(),
        })
    }
}
