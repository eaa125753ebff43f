use ferrous_doh_application::ports::ProviderHealth;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct ProviderHealthResponse {
    pub name: String,
    pub url: String,
    pub failures: u32,
    pub healthy: bool,
}

impl From<ProviderHealth> for ProviderHealthResponse {
    fn from(health: ProviderHealth) -> Self {
        Self {
            healthy: health.failures == 0,
            name: health.name,
            url: health.url,
            failures: health.failures,
        }
    }
}
