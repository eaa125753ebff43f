use crate::response::text_response;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ferrous_doh_domain::DomainError;

pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(DomainError::MalformedRequest(message.into()))
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::MalformedRequest(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::AllProvidersFailed { .. } => {
                (StatusCode::BAD_GATEWAY, self.0.to_string())
            }
            e if e.is_provider_failure() => (StatusCode::BAD_GATEWAY, self.0.to_string()),

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        text_response(status, message)
    }
}
