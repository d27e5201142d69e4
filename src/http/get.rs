use axum::Json;
use axum::extract::State;
use tracing::*;

use crate::appstate::AppState;
use crate::http::messages::{
    AcStatusResponse, FanSpeedResponse, HeartbeatMessage, TemperatureResponse,
};

/// Return the current temperature
#[axum::debug_handler]
pub async fn get_temperature(State(state): State<AppState>) -> Json<TemperatureResponse> {
    let current_temperature = state.device.temperature();
    debug!("GET temperature returning {}", current_temperature);
    Json(TemperatureResponse {
        current_temperature,
    })
}

/// Return the current fan speed
#[axum::debug_handler]
pub async fn get_fan_speed(State(state): State<AppState>) -> Json<FanSpeedResponse> {
    let fan_speed = state.device.fan_speed();
    debug!("GET fan speed returning {:?}", fan_speed);
    Json(FanSpeedResponse { fan_speed })
}

/// Return the current AC status
#[axum::debug_handler]
pub async fn get_ac_status(State(state): State<AppState>) -> Json<AcStatusResponse> {
    let ac_status = state.device.ac_status();
    debug!("GET AC status returning {:?}", ac_status);
    Json(AcStatusResponse { ac_status })
}

/// Return a heartbeat message
#[axum::debug_handler]
pub async fn get_heartbeat(_state: State<AppState>) -> Json<HeartbeatMessage> {
    Json(HeartbeatMessage::new())
}
