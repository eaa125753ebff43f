use crate::{dto::ProviderHealthResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_providers")]
pub async fn get_providers(State(state): State<AppState>) -> Json<Vec<ProviderHealthResponse>> {
    let providers: Vec<ProviderHealthResponse> = state
        .providers
        .provider_health()
        .into_iter()
        .map(ProviderHealthResponse::from)
        .collect();

    debug!(count = providers.len(), "Provider health retrieved");
    Json(providers)
}
