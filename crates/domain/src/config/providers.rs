use serde::{Deserialize, Serialize};

use crate::Provider;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProviderConfig {
    pub name: String,
    pub url: String,
}

impl ProviderConfig {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    pub fn to_provider(&self) -> Provider {
        Provider::new(self.name.as_str(), self.url.as_str())
    }
}

pub fn default_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig::new("cloudflare", "https://cloudflare-dns.com/dns-query"),
        ProviderConfig::new("google", "https://dns.google/dns-query"),
        ProviderConfig::new("quad9", "https://dns.quad9.net/dns-query"),
        ProviderConfig::new("adguard", "https://dns.adguard-dns.com/dns-query"),
        ProviderConfig::new("nextdns", "https://dns.nextdns.io/dns-query"),
    ]
}
