pub mod cache;
pub mod errors;
pub mod health;
pub mod logging;
pub mod providers;
pub mod race;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use health::HealthConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use providers::ProviderConfig;
pub use race::RaceConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
