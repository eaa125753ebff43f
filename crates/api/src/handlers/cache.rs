use crate::{dto::CacheStatsResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_cache_stats")]
pub async fn get_cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let Some(cache) = state.cache.as_ref() else {
        return Json(CacheStatsResponse::disabled());
    };

    let snapshot = cache.cache_metrics_snapshot();

    debug!(
        total_entries = snapshot.total_entries,
        hits = snapshot.hits,
        misses = snapshot.misses,
        hit_rate = snapshot.hit_rate,
        "Cache metrics retrieved"
    );

    Json(CacheStatsResponse {
        enabled: true,
        total_entries: snapshot.total_entries,
        hits: snapshot.hits,
        misses: snapshot.misses,
        insertions: snapshot.insertions,
        evictions: snapshot.evictions,
        expirations: snapshot.expirations,
        hit_rate: snapshot.hit_rate,
    })
}
