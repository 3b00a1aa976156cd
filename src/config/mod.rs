//! Configuration loading and management for the Salary Engine.
//!
//! This module loads the payroll settings, the initial team roster and
//! optional seed work days from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Team size: {}", config.members().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineConfig, PayPeriodConfig, RosterConfig, ServerConfig, Settings, WorkDaysConfig,
};
