// lib.rs

pub use anyhow::bail;
pub use log::*;

mod config;
pub use config::*;

mod sensor;
pub use sensor::*;

mod payload;
pub use payload::*;

mod net;
pub use net::*;

mod upload;
pub use upload::*;

mod monitor;
pub use monitor::*;

#[cfg(target_os = "espidf")]
mod hw;
#[cfg(target_os = "espidf")]
pub use hw::*;

pub const FW_VERSION: &str = env!("CARGO_PKG_VERSION");

// EOF
