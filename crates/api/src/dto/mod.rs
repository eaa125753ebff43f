pub mod cache;
pub mod doh;
pub mod providers;

pub use cache::CacheStatsResponse;
pub use doh::DohParams;
pub use providers::ProviderHealthResponse;
