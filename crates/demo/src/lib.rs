//! Walkthrough of the record contract, driven by environment configuration.

pub mod config;
pub mod showcase;

pub use config::{ConfigError, DemoConfig};
pub use showcase::{Report, run};
