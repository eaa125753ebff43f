use super::health::HealthTracker;
use ferrous_doh_application::ports::{ProviderHealth, ProviderHealthPort};
use ferrous_doh_domain::Provider;
use std::sync::Arc;

/// Startup-ordered provider list, re-sorted by live failure count on demand.
pub struct ProviderRegistry {
    providers: Vec<Provider>,
    health: Arc<HealthTracker>,
}

impl ProviderRegistry {
    pub fn new(providers: Vec<Provider>, health: Arc<HealthTracker>) -> Self {
        Self { providers, health }
    }

    /// Providers sorted ascending by failure count. The sort is stable, so
    /// providers with equal counts keep their configured order.
    pub fn ordered_providers(&self) -> Vec<Provider> {
        let mut ranked: Vec<(u32, &Provider)> = self
            .providers
            .iter()
            .map(|p| (self.health.failure_count(&p.name), p))
            .collect();
        ranked.sort_by_key(|(failures, _)| *failures);
        ranked.into_iter().map(|(_, p)| p.clone()).collect()
    }

    pub fn record_failure(&self, provider: &Provider) {
        self.health.record_failure(&provider.name);
    }

    pub fn health(&self) -> &Arc<HealthTracker> {
        &self.health
    }
}

impl ProviderHealthPort for ProviderRegistry {
    fn provider_health(&self) -> Vec<ProviderHealth> {
        self.ordered_providers()
            .into_iter()
            .map(|p| ProviderHealth {
                failures: self.health.failure_count(&p.name),
                name: p.name.to_string(),
                url: p.url.to_string(),
            })
            .collect()
    }
}
