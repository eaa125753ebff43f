use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Provider {provider} returned HTTP {status}")]
    ProviderHttp { provider: String, status: u16 },

    #[error("Provider {provider} timed out after {timeout_ms}ms")]
    ProviderTimeout { provider: String, timeout_ms: u64 },

    #[error("Request to provider {provider} failed: {message}")]
    ProviderTransport { provider: String, message: String },

    #[error("All {attempted} upstream providers failed")]
    AllProvidersFailed { attempted: usize },

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl DomainError {
    /// Errors attributable to a single provider attempt.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::ProviderHttp { .. } | Self::ProviderTimeout { .. } | Self::ProviderTransport { .. }
        )
    }
}
