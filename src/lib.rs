pub mod appstate;
pub mod config;
pub mod device;
pub mod error;
pub mod http;
