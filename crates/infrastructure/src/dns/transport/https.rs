//! HTTPS transport for forwarding DoH queries (RFC 8484) to a provider.
//!
//! GET requests carry the client's query string unchanged; POST requests
//! carry the raw wireformat body. Every request gets randomised privacy
//! headers.

use super::privacy::{random_padding, random_user_agent, PADDING_HEADER};
use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_application::ports::UpstreamTransport;
use ferrous_doh_domain::doh_query::DNS_MESSAGE_CONTENT_TYPE;
use ferrous_doh_domain::{DohFormat, DomainError, Provider, UpstreamRequest};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::time::Duration;
use tracing::debug;

/// Headroom between the per-attempt bound and the client's own timeout, so
/// an attempt that runs out of time reports `ProviderTimeout`.
pub const CLIENT_TIMEOUT_SLACK: Duration = Duration::from_millis(500);

pub struct HttpsTransport {
    client: reqwest::Client,
}

impl HttpsTransport {
    /// Client for callers that bound each attempt with `attempt_timeout`.
    pub fn for_attempt_timeout(attempt_timeout: Duration) -> Self {
        Self::new(attempt_timeout + CLIENT_TIMEOUT_SLACK)
    }

    /// `timeout` is a transport-level ceiling; callers apply their own
    /// per-attempt bound on top of it.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    fn transport_error(provider: &Provider, err: reqwest::Error) -> DomainError {
        DomainError::ProviderTransport {
            provider: provider.name.to_string(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl UpstreamTransport for HttpsTransport {
    async fn send(
        &self,
        provider: &Provider,
        request: &UpstreamRequest,
        format: DohFormat,
    ) -> Result<Bytes, DomainError> {
        let builder = match request {
            UpstreamRequest::Get { query_string } => {
                self.client.get(provider.url_with_query(query_string))
            }
            UpstreamRequest::Post { body } => self
                .client
                .post(provider.url.as_ref())
                .header(CONTENT_TYPE, DNS_MESSAGE_CONTENT_TYPE)
                .body(body.clone()),
        };

        debug!(provider = %provider, "Sending DoH query");

        let response = builder
            .header(ACCEPT, format.content_type())
            .header(USER_AGENT, random_user_agent())
            .header(PADDING_HEADER, random_padding())
            .send()
            .await
            .map_err(|e| Self::transport_error(provider, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::ProviderHttp {
                provider: provider.name.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::transport_error(provider, e))?;

        debug!(provider = %provider, response_len = body.len(), "DoH response received");
        Ok(body)
    }
}
