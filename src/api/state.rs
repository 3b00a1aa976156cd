//! Application state for the Salary Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::registry::{
    InMemoryRoster, InMemorySettings, InMemoryWorkDays, SettingsStore, TeamRoster,
    WorkDayRegistry,
};

/// Shared application state.
///
/// Holds the registries every handler reads from and writes to. Cloning is
/// cheap; all clones share the same registries.
#[derive(Clone)]
pub struct AppState {
    roster: Arc<dyn TeamRoster>,
    work_days: Arc<dyn WorkDayRegistry>,
    settings: Arc<dyn SettingsStore>,
}

impl AppState {
    /// Creates application state over the given registries.
    pub fn new(
        roster: Arc<dyn TeamRoster>,
        work_days: Arc<dyn WorkDayRegistry>,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        Self {
            roster,
            work_days,
            settings,
        }
    }

    /// Creates in-memory registries seeded from the loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> EngineResult<Self> {
        let roster = InMemoryRoster::with_members(config.members().iter().cloned())?;
        let work_days = InMemoryWorkDays::with_records(config.work_days().iter().cloned());
        let settings = InMemorySettings::new(config.payday())?;

        Ok(Self::new(
            Arc::new(roster),
            Arc::new(work_days),
            Arc::new(settings),
        ))
    }

    /// Returns the team roster.
    pub fn roster(&self) -> &dyn TeamRoster {
        self.roster.as_ref()
    }

    /// Returns the work-day registry.
    pub fn work_days(&self) -> &dyn WorkDayRegistry {
        self.work_days.as_ref()
    }

    /// Returns the settings store.
    pub fn settings(&self) -> &dyn SettingsStore {
        self.settings.as_ref()
    }
}
