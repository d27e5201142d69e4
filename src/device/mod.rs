pub mod store;

use serde::Serialize;

pub use store::DeviceStore;

/// The only value of `ac_status` recognised as "off"
pub const AC_OFF: &str = "Off";
pub const AC_ON: &str = "On";

/// State of the simulated climate-control device
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceState {
    /// Current temperature, no range is enforced
    pub temperature: f64,
    /// Fan speed, any string is accepted
    pub fan_speed: String,
    /// Air conditioning status, only ever changed by [`DeviceState::toggle_ac`]
    pub ac_status: String,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            temperature: 20.0,
            fan_speed: "medium".to_string(),
            ac_status: AC_OFF.to_string(),
        }
    }
}

impl DeviceState {
    /// Replace the temperature if a new one was supplied, keep the current one otherwise
    pub fn apply_temperature(&mut self, temperature: Option<f64>) {
        if let Some(temperature) = temperature {
            self.temperature = temperature;
        }
    }

    /// Replace the fan speed if a new one was supplied, keep the current one otherwise
    pub fn apply_fan_speed(&mut self, fan_speed: Option<String>) {
        if let Some(fan_speed) = fan_speed {
            self.fan_speed = fan_speed;
        }
    }

    /// Flip the AC status and return the new value.
    /// "Off" turns into "On", every other value turns into "Off".
    pub fn toggle_ac(&mut self) -> String {
        self.ac_status = if self.ac_status == AC_OFF {
            AC_ON.to_string()
        } else {
            AC_OFF.to_string()
        };
        self.ac_status.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fresh_device() {
        let state = DeviceState::default();
        assert_eq!(state.temperature, 20.0);
        assert_eq!(state.fan_speed, "medium");
        assert_eq!(state.ac_status, "Off");
    }

    #[test]
    fn absent_values_leave_fields_untouched() {
        let mut state = DeviceState::default();
        state.apply_temperature(None);
        state.apply_fan_speed(None);
        assert_eq!(state, DeviceState::default());
    }

    #[test]
    fn present_values_replace_fields() {
        let mut state = DeviceState::default();
        state.apply_temperature(Some(-3.5));
        state.apply_fan_speed(Some("turbo".to_string()));
        assert_eq!(state.temperature, -3.5);
        assert_eq!(state.fan_speed, "turbo");
        assert_eq!(state.ac_status, "Off");
    }

    #[test]
    fn toggle_cycles_between_off_and_on() {
        let mut state = DeviceState::default();
        assert_eq!(state.toggle_ac(), "On");
        assert_eq!(state.toggle_ac(), "Off");
        assert_eq!(state.ac_status, "Off");
    }

    #[test]
    fn toggle_treats_unknown_status_as_on() {
        let mut state = DeviceState {
            ac_status: "off".to_string(),
            ..DeviceState::default()
        };
        assert_eq!(state.toggle_ac(), "Off");
    }
}
