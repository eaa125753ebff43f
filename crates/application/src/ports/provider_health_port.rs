/// Current view of one provider, in health order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderHealth {
    pub name: String,
    pub url: String,
    pub failures: u32,
}

/// Port for querying provider health ordering.
pub trait ProviderHealthPort: Send + Sync {
    fn provider_health(&self) -> Vec<ProviderHealth>;
}
