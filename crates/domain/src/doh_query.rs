use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine as _;
use bytes::Bytes;
use std::fmt;
use std::hash::BuildHasher;
use std::sync::{Arc, LazyLock};

use crate::DomainError;

pub const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// Fixed seeds keep key derivation deterministic for the lifetime of the process.
static KEY_HASHER: LazyLock<ahash::RandomState> = LazyLock::new(|| {
    ahash::RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    )
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DohFormat {
    Wire,
    Json,
}

impl DohFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Wire => DNS_MESSAGE_CONTENT_TYPE,
            Self::Json => DNS_JSON_CONTENT_TYPE,
        }
    }
}

/// Shape of the request forwarded to every provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamRequest {
    Get { query_string: String },
    Post { body: Bytes },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(Arc<str>);

impl CacheKey {
    /// Keys a wireformat message by a 64-bit hash of the whole payload.
    pub fn for_wire(message: &[u8]) -> Self {
        let hash = KEY_HASHER.hash_one(message);
        Self(Arc::from(format!("wire:{:016x}:{}", hash, message.len())))
    }

    pub fn for_json(name: &str, record_type: &str) -> Self {
        let name = name.trim_end_matches('.').to_ascii_lowercase();
        let record_type = record_type.to_ascii_uppercase();
        Self(Arc::from(format!("json:{}:{}", name, record_type)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A client query, normalised from one of the accepted HTTP shapes.
#[derive(Debug, Clone)]
pub struct DohQuery {
    pub format: DohFormat,
    pub upstream: UpstreamRequest,
    pub cache_key: CacheKey,
}

impl DohQuery {
    /// GET with a base64url `dns` parameter. The raw query string is forwarded as-is.
    pub fn wire_get(dns_param: &str, raw_query: &str) -> Result<Self, DomainError> {
        let message = decode_dns_param(dns_param)?;
        Ok(Self {
            format: DohFormat::Wire,
            upstream: UpstreamRequest::Get {
                query_string: raw_query.to_string(),
            },
            cache_key: CacheKey::for_wire(&message),
        })
    }

    /// POST with a raw wireformat body.
    pub fn wire_post(body: Bytes) -> Result<Self, DomainError> {
        if body.is_empty() {
            return Err(DomainError::MalformedRequest(
                "empty DNS message body".to_string(),
            ));
        }
        Ok(Self {
            format: DohFormat::Wire,
            cache_key: CacheKey::for_wire(&body),
            upstream: UpstreamRequest::Post { body },
        })
    }

    /// JSON API query. `record_type` defaults to `A`.
    pub fn json(name: &str, record_type: Option<&str>, raw_query: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::MalformedRequest(
                "missing 'name' parameter".to_string(),
            ));
        }
        let record_type = record_type
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("A");
        Ok(Self {
            format: DohFormat::Json,
            upstream: UpstreamRequest::Get {
                query_string: raw_query.to_string(),
            },
            cache_key: CacheKey::for_json(name, record_type),
        })
    }
}

fn decode_dns_param(dns_param: &str) -> Result<Vec<u8>, DomainError> {
    let trimmed = dns_param.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MalformedRequest(
            "empty 'dns' parameter".to_string(),
        ));
    }
    let decoded = if trimmed.ends_with('=') {
        URL_SAFE.decode(trimmed)
    } else {
        URL_SAFE_NO_PAD.decode(trimmed)
    };
    decoded.map_err(|e| DomainError::MalformedRequest(format!("invalid base64url 'dns' parameter: {}", e)))
}
