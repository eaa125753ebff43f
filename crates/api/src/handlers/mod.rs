pub mod cache;
pub mod doh;
pub mod health;
pub mod providers;

pub use cache::get_cache_stats;
pub use doh::{doh_get, doh_post, preflight, unsupported_method};
pub use health::health_check;
pub use providers::get_providers;
