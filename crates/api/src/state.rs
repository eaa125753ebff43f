use ferrous_doh_application::{
    ports::{ProviderHealthPort, ResponseCachePort},
    use_cases::HandleDohQueryUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub handle_query: Arc<HandleDohQueryUseCase>,
    pub providers: Arc<dyn ProviderHealthPort>,
    /// `None` when the response cache is disabled.
    pub cache: Option<Arc<dyn ResponseCachePort>>,
}
