//! Ferrous DoH Domain Layer
pub mod config;
pub mod doh_query;
pub mod errors;
pub mod provider;

pub use config::{CliOverrides, Config, ConfigError};
pub use doh_query::{
    CacheKey, DohFormat, DohQuery, UpstreamRequest, DNS_JSON_CONTENT_TYPE, DNS_MESSAGE_CONTENT_TYPE,
};
pub use errors::DomainError;
pub use provider::Provider;
