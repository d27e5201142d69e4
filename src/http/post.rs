use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::*;

use crate::appstate::AppState;
use crate::error::ApiError;
use crate::http::messages::{Acknowledgement, FanSpeedUpdate, TemperatureUpdate, ToggleAcResponse};

/// Accept only a JSON object as update body, then map its fields onto `T`.
/// Arrays, scalars and `null` would otherwise deserialize positionally or as an empty update.
fn object_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, ApiError> {
    let Json(body) = payload?;
    let kind = match &body {
        Value::Object(_) => return Ok(serde_json::from_value(body)?),
        Value::Array(_) => "an array",
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
    };
    Err(ApiError::NotAnObject(kind))
}

/// POST request handler to update the temperature, a missing field leaves it unchanged
#[axum::debug_handler]
pub async fn post_update_temperature(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let update: TemperatureUpdate = object_body(payload)?;
    info!("POST update temperature: {:?}", update);

    state.device.set_temperature(update.temperature);
    Ok(Json(Acknowledgement::success("Temperature updated")))
}

/// POST request handler to set the fan speed, a missing field leaves it unchanged
#[axum::debug_handler]
pub async fn post_set_fan_speed(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let update: FanSpeedUpdate = object_body(payload)?;
    info!("POST set fan speed: {:?}", update);

    state.device.set_fan_speed(update.fan_speed);
    Ok(Json(Acknowledgement::success("Fan speed set")))
}

/// POST request handler flipping the AC between "On" and "Off"
#[axum::debug_handler]
pub async fn post_toggle_ac(State(state): State<AppState>) -> Json<ToggleAcResponse> {
    let ac_status = state.device.toggle_ac();
    Json(ToggleAcResponse {
        status: "success".to_string(),
        ac_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> Result<TemperatureUpdate, ApiError> {
        object_body(Ok(Json(body)))
    }

    #[test]
    fn object_bodies_are_accepted() {
        assert_eq!(parse(json!({"temperature": 21.5})).unwrap().temperature, Some(21.5));
        assert_eq!(parse(json!({})).unwrap().temperature, None);
    }

    #[test]
    fn positional_array_is_rejected() {
        assert!(matches!(
            parse(json!([99.5])),
            Err(ApiError::NotAnObject("an array"))
        ));
        assert!(matches!(parse(json!([])), Err(ApiError::NotAnObject(_))));
    }

    #[test]
    fn scalars_and_null_are_rejected() {
        assert!(matches!(parse(json!(5)), Err(ApiError::NotAnObject("a number"))));
        assert!(matches!(parse(Value::Null), Err(ApiError::NotAnObject("null"))));
    }

    #[test]
    fn mistyped_field_is_rejected() {
        assert!(matches!(
            parse(json!({"temperature": "hot"})),
            Err(ApiError::InvalidField(_))
        ));
    }
}
