pub mod dto;
pub mod errors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::{create_api_routes, create_doh_routes};
pub use state::AppState;
