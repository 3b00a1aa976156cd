//! Configuration types for the salary engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::MIN_PAYDAY;
use crate::models::{TeamMember, WorkDayRecord};

fn default_payday() -> u32 {
    MIN_PAYDAY
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

/// Pay period settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayPeriodConfig {
    /// Day of month on which a new pay period begins, in `1..=28`.
    #[serde(default = "default_payday")]
    pub payday: u32,
}

impl Default for PayPeriodConfig {
    fn default() -> Self {
        Self {
            payday: default_payday(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address the service listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Contents of `settings.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Payroll settings.
    #[serde(default)]
    pub payroll: PayPeriodConfig,
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Contents of `roster.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// The initial team members.
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// Contents of `work_days.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkDaysConfig {
    /// Seed work-day records.
    #[serde(default)]
    pub work_days: Vec<WorkDayRecord>,
}

/// The complete configuration loaded from a config directory.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    settings: Settings,
    members: Vec<TeamMember>,
    work_days: Vec<WorkDayRecord>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        settings: Settings,
        members: Vec<TeamMember>,
        work_days: Vec<WorkDayRecord>,
    ) -> Self {
        Self {
            settings,
            members,
            work_days,
        }
    }

    /// Returns the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the roster members in file order.
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Returns the seed work days in file order.
    pub fn work_days(&self) -> &[WorkDayRecord] {
        &self.work_days
    }
}
