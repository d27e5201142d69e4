pub mod get;
pub mod messages;
pub mod post;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::appstate::AppState;

pub use get::{get_ac_status, get_fan_speed, get_heartbeat, get_temperature};
pub use post::{post_set_fan_speed, post_toggle_ac, post_update_temperature};

/// Build the axum [`Router`] serving the device endpoints.
///
/// Cross-origin requests are allowed from anywhere, and every request/response
/// is traced through `tower_http`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // GET endpoints
        .route("/temperature", get(get_temperature))
        .route("/fan_speed", get(get_fan_speed))
        .route("/ac_status", get(get_ac_status))
        .route("/heartbeat", get(get_heartbeat))
        // POST endpoints
        .route("/update_temperature", post(post_update_temperature))
        .route("/set_fan_speed", post(post_set_fan_speed))
        .route("/toggle_ac", post(post_toggle_ac))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // Give the routers access to the application state
        .with_state(state)
}
