use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct HeartbeatMessage {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

impl HeartbeatMessage {
    pub fn new() -> Self {
        Self {
            status: "alive",
            timestamp: Utc::now(),
        }
    }
}

impl Default for HeartbeatMessage {
    fn default() -> Self {
        Self::new()
    }
}

/// Body of `GET /temperature`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TemperatureResponse {
    pub current_temperature: f64,
}

/// Body of `GET /fan_speed`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FanSpeedResponse {
    pub fan_speed: String,
}

/// Body of `GET /ac_status`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AcStatusResponse {
    pub ac_status: String,
}

/// Body of `POST /update_temperature`, a missing or null field keeps the current temperature
#[derive(Deserialize, Debug, Clone, Default)]
pub struct TemperatureUpdate {
    #[serde(default)]
    pub temperature: Option<f64>,
}

/// Body of `POST /set_fan_speed`, a missing or null field keeps the current fan speed
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FanSpeedUpdate {
    #[serde(default)]
    pub fan_speed: Option<String>,
}

/// Acknowledgement returned by the setters
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Acknowledgement {
    pub status: String,
    pub message: String,
}

impl Acknowledgement {
    pub fn success(message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
        }
    }
}

/// Body of `POST /toggle_ac`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToggleAcResponse {
    pub status: String,
    pub ac_status: String,
}
