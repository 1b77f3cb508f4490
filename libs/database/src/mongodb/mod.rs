//! MongoDB support: configuration, connection, health checks

pub mod config;
pub mod connector;
pub mod health;

pub use config::MongoConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_retry, MongoError,
};
pub use health::check_health;
