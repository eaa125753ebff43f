use ferrous_doh_application::ports::{DohResolver, UpstreamTransport};
use ferrous_doh_application::use_cases::HandleDohQueryUseCase;
use ferrous_doh_domain::Config;
use ferrous_doh_infrastructure::dns::{
    CachedDohResolver, HealthTracker, HttpsTransport, ProviderRegistry, RaceOrchestrator,
    ResponseCache, ResponseCacheConfig,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DohServices {
    pub registry: Arc<ProviderRegistry>,
    pub cache: Option<Arc<ResponseCache>>,
    pub handler_use_case: Arc<HandleDohQueryUseCase>,
}

impl DohServices {
    pub fn new(config: &Config) -> Self {
        info!(
            providers = config.providers.len(),
            racing_width = config.race.racing_width,
            timeout_ms = config.race.timeout_ms,
            "Initializing DoH services"
        );

        let registry = Self::build_registry(config);
        let timeout = Duration::from_millis(config.race.timeout_ms);
        let transport: Arc<dyn UpstreamTransport> =
            Arc::new(HttpsTransport::for_attempt_timeout(timeout));

        let orchestrator: Arc<dyn DohResolver> = Arc::new(RaceOrchestrator::new(
            Arc::clone(&registry),
            transport,
            config.race.racing_width,
            timeout,
        ));

        let (resolver, cache) = if config.cache.enabled {
            let cache = Self::build_cache(config);
            let resolver: Arc<dyn DohResolver> =
                Arc::new(CachedDohResolver::new(orchestrator, Arc::clone(&cache)));
            (resolver, Some(cache))
        } else {
            info!("Response cache disabled");
            (orchestrator, None)
        };

        Self {
            registry,
            cache,
            handler_use_case: Arc::new(HandleDohQueryUseCase::new(resolver)),
        }
    }

    fn build_registry(config: &Config) -> Arc<ProviderRegistry> {
        let health = Arc::new(HealthTracker::new(Duration::from_millis(
            config.health.reset_interval_ms,
        )));
        let providers = config.provider_list();

        for provider in &providers {
            info!(provider = %provider.name, url = %provider.url, "Upstream provider registered");
        }

        Arc::new(ProviderRegistry::new(providers, health))
    }

    fn build_cache(config: &Config) -> Arc<ResponseCache> {
        info!(
            max_entries = config.cache.max_entries,
            eviction_batch = config.cache.eviction_batch,
            default_ttl_ms = config.cache.default_ttl_ms,
            "Response cache enabled"
        );

        Arc::new(ResponseCache::new(ResponseCacheConfig {
            max_entries: config.cache.max_entries,
            eviction_batch: config.cache.eviction_batch,
            default_ttl: Duration::from_millis(config.cache.default_ttl_ms),
        }))
    }
}
