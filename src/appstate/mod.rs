use crate::device::{DeviceState, DeviceStore};

/// All shared state handed to the http handlers
#[derive(Debug, Default, Clone)]
pub struct AppState {
    /// The one simulated climate-control device
    pub device: DeviceStore,
}

impl AppState {
    pub fn new(initial: DeviceState) -> Self {
        Self {
            device: DeviceStore::new(initial),
        }
    }
}
