pub mod failover;
pub mod health;
pub mod orchestrator;
pub mod query;
pub mod racing;
pub mod registry;
pub mod strategy;

pub use failover::FailoverStrategy;
pub use health::{HealthRecord, HealthTracker};
pub use orchestrator::RaceOrchestrator;
pub use racing::RacingStrategy;
pub use registry::ProviderRegistry;
pub use strategy::{QueryContext, UpstreamResult};
