use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_application::ports::UpstreamTransport;
use ferrous_doh_domain::{DohFormat, DomainError, Provider, UpstreamRequest};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub enum MockBehavior {
    /// Respond with the body after the delay.
    Succeed { delay: Duration, body: Bytes },
    /// Respond with the HTTP status after the delay.
    FailHttp { delay: Duration, status: u16 },
    /// Never respond within any sensible timeout.
    Hang,
}

impl MockBehavior {
    pub fn ok_after(ms: u64, body: &'static [u8]) -> Self {
        Self::Succeed {
            delay: Duration::from_millis(ms),
            body: Bytes::from_static(body),
        }
    }

    pub fn fail_now() -> Self {
        Self::FailHttp {
            delay: Duration::ZERO,
            status: 503,
        }
    }
}

pub struct MockTransport {
    behaviors: HashMap<String, MockBehavior>,
    calls: Mutex<Vec<String>>,
    total: AtomicUsize,
}

impl MockTransport {
    pub fn new(behaviors: &[(&str, MockBehavior)]) -> Arc<Self> {
        Arc::new(Self {
            behaviors: behaviors
                .iter()
                .map(|(name, b)| (name.to_string(), b.clone()))
                .collect(),
            calls: Mutex::new(Vec::new()),
            total: AtomicUsize::new(0),
        })
    }

    pub fn call_order(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, provider: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_str() == provider)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamTransport for MockTransport {
    async fn send(
        &self,
        provider: &Provider,
        _request: &UpstreamRequest,
        _format: DohFormat,
    ) -> Result<Bytes, DomainError> {
        self.total.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(provider.name.to_string());

        match self.behaviors.get(&*provider.name).cloned() {
            Some(MockBehavior::Succeed { delay, body }) => {
                tokio::time::sleep(delay).await;
                Ok(body)
            }
            Some(MockBehavior::FailHttp { delay, status }) => {
                tokio::time::sleep(delay).await;
                Err(DomainError::ProviderHttp {
                    provider: provider.name.to_string(),
                    status,
                })
            }
            Some(MockBehavior::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(DomainError::ProviderTransport {
                    provider: provider.name.to_string(),
                    message: "hung".to_string(),
                })
            }
            None => Err(DomainError::ProviderTransport {
                provider: provider.name.to_string(),
                message: "no behaviour configured".to_string(),
            }),
        }
    }
}
