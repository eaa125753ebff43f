use crate::{
    dto::DohParams,
    errors::ApiError,
    response::{dns_response, preflight_response},
    state::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Query, RawQuery, State},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderMap, Method,
    },
    response::Response,
};
use bytes::Bytes;
use ferrous_doh_domain::{DohQuery, DNS_JSON_CONTENT_TYPE, DNS_MESSAGE_CONTENT_TYPE};
use tracing::{debug, instrument};

#[instrument(skip_all, name = "doh_get")]
pub async fn doh_get(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
    params: Result<Query<DohParams>, QueryRejection>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let raw_query = raw_query.unwrap_or_default();

    let query = if let Some(dns) = params.dns.as_deref() {
        DohQuery::wire_get(dns, &raw_query)?
    } else if params.name.is_some() || header_has(&headers, ACCEPT, DNS_JSON_CONTENT_TYPE) {
        DohQuery::json(
            params.name.as_deref().unwrap_or_default(),
            params.record_type.as_deref(),
            &raw_query,
        )?
    } else {
        return Err(ApiError::bad_request(
            "expected a 'dns' or 'name' parameter",
        ));
    };

    debug!(key = %query.cache_key, format = ?query.format, "DoH GET");
    let answer = state.handle_query.execute(&query).await?;
    Ok(dns_response(answer.format, answer.payload))
}

#[instrument(skip_all, name = "doh_post")]
pub async fn doh_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    if !header_has(&headers, CONTENT_TYPE, DNS_MESSAGE_CONTENT_TYPE) {
        return Err(ApiError::bad_request(format!(
            "Content-Type must be {}",
            DNS_MESSAGE_CONTENT_TYPE
        )));
    }

    let query = DohQuery::wire_post(body)?;

    debug!(key = %query.cache_key, "DoH POST");
    let answer = state.handle_query.execute(&query).await?;
    Ok(dns_response(answer.format, answer.payload))
}

pub async fn preflight() -> Response {
    preflight_response()
}

pub async fn unsupported_method(method: Method) -> ApiError {
    ApiError::bad_request(format!("unsupported method {}", method))
}

/// True when any comma-separated media type in the header matches `media_type`,
/// ignoring parameters such as `; charset=`.
fn header_has(headers: &HeaderMap, name: axum::http::HeaderName, media_type: &str) -> bool {
    headers
        .get_all(name)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|part| part.split(';').next())
        .any(|part| part.trim().eq_ignore_ascii_case(media_type))
}
