use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::*;

use crate::device::DeviceState;

/// Shared handle to the single device instance.
///
/// Cloning the store clones the handle, every clone observes and mutates the same state.
/// Each operation holds the lock for exactly one read or read-modify-write.
#[derive(Debug, Clone, Default)]
pub struct DeviceStore {
    state: Arc<Mutex<DeviceState>>,
}

impl DeviceStore {
    pub fn new(initial: DeviceState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial)),
        }
    }

    // A panic while holding the guard cannot leave a scalar field half written,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, DeviceState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("device state mutex poisoned, recovering guard");
            PoisonError::into_inner(poisoned)
        })
    }

    pub fn temperature(&self) -> f64 {
        self.lock().temperature
    }

    pub fn set_temperature(&self, temperature: Option<f64>) {
        let mut state = self.lock();
        state.apply_temperature(temperature);
        info!("temperature is now {}", state.temperature);
    }

    pub fn fan_speed(&self) -> String {
        self.lock().fan_speed.clone()
    }

    pub fn set_fan_speed(&self, fan_speed: Option<String>) {
        let mut state = self.lock();
        state.apply_fan_speed(fan_speed);
        info!("fan speed is now {:?}", state.fan_speed);
    }

    pub fn ac_status(&self) -> String {
        self.lock().ac_status.clone()
    }

    /// Flip the AC status, returns the value after the flip
    pub fn toggle_ac(&self) -> String {
        let new_status = self.lock().toggle_ac();
        info!("AC toggled to {:?}", new_status);
        new_status
    }

    /// Copy of the whole device state
    pub fn snapshot(&self) -> DeviceState {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn set_then_get_temperature() {
        let store = DeviceStore::default();
        for t in [25.5, -40.0, 0.0, 1e9] {
            store.set_temperature(Some(t));
            assert_eq!(store.temperature(), t);
        }
    }

    #[test]
    fn missing_temperature_is_a_no_op() {
        let store = DeviceStore::default();
        store.set_temperature(Some(18.0));
        store.set_temperature(None);
        store.set_temperature(None);
        assert_eq!(store.temperature(), 18.0);
    }

    #[test]
    fn set_then_get_fan_speed() {
        let store = DeviceStore::default();
        for s in ["low", "", "warp nine", "HIGH"] {
            store.set_fan_speed(Some(s.to_string()));
            assert_eq!(store.fan_speed(), s);
        }
        store.set_fan_speed(None);
        assert_eq!(store.fan_speed(), "HIGH");
    }

    #[test]
    fn clones_share_one_instance() {
        let store = DeviceStore::default();
        let other = store.clone();
        other.toggle_ac();
        assert_eq!(store.ac_status(), "On");
        assert_eq!(store.toggle_ac(), "Off");
        assert_eq!(other.ac_status(), "Off");
    }

    #[test]
    fn custom_initial_state_is_kept() {
        let store = DeviceStore::new(DeviceState {
            ac_status: "Cooling".to_string(),
            ..DeviceState::default()
        });
        assert_eq!(store.ac_status(), "Cooling");
        assert_eq!(store.toggle_ac(), "Off");
        assert_eq!(store.toggle_ac(), "On");
    }

    #[test]
    fn concurrent_fan_speed_writers_leave_one_input() {
        let store = DeviceStore::default();
        let inputs: Vec<String> = (0..32).map(|i| format!("speed-{i}")).collect();

        let handles: Vec<_> = inputs
            .iter()
            .cloned()
            .map(|speed| {
                let store = store.clone();
                thread::spawn(move || store.set_fan_speed(Some(speed)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(inputs.contains(&store.fan_speed()));
        let snapshot = store.snapshot();
        assert_eq!(snapshot.temperature, 20.0);
        assert_eq!(snapshot.ac_status, "Off");
    }

    #[test]
    fn poisoned_lock_still_serves_state() {
        let store = DeviceStore::default();
        let poisoner = store.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.state.lock().unwrap();
            panic!("poison the device mutex");
        })
        .join();

        assert_eq!(store.temperature(), 20.0);
        assert_eq!(store.toggle_ac(), "On");
    }
}
