//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the salary
//! engine configuration from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::validate_payday;
use crate::error::{EngineError, EngineResult};
use crate::models::{TeamMember, WorkDayRecord};

use super::types::{EngineConfig, RosterConfig, Settings, WorkDaysConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── settings.yaml   # Payday and server settings
/// ├── roster.yaml     # Team members and their rates
/// └── work_days.yaml  # Optional seed work days
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Payday: {}", loader.payday());
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails with `ConfigNotFound` if `settings.yaml` or `roster.yaml` is
    /// missing, and with `ConfigParseError` if any file is malformed, holds
    /// an out-of-range payday, an invalid member, duplicate entries, or a
    /// work day for a member missing from the roster.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("settings.yaml");
        let settings = Self::load_yaml::<Settings>(&settings_path)?;
        validate_payday(settings.payroll.payday).map_err(|e| EngineError::ConfigParseError {
            path: settings_path.display().to_string(),
            message: e.to_string(),
        })?;

        let roster_path = path.join("roster.yaml");
        let roster = Self::load_yaml::<RosterConfig>(&roster_path)?;
        Self::check_members(&roster_path, &roster.members)?;

        let work_days_path = path.join("work_days.yaml");
        let work_days = if work_days_path.exists() {
            Self::load_yaml::<WorkDaysConfig>(&work_days_path)?
        } else {
            WorkDaysConfig::default()
        };
        Self::check_work_days(&work_days_path, &work_days.work_days, &roster.members)?;

        debug!(
            path = %path.display(),
            payday = settings.payroll.payday,
            members = roster.members.len(),
            work_days = work_days.work_days.len(),
            "Loaded configuration"
        );

        Ok(Self {
            config: EngineConfig::new(settings, roster.members, work_days.work_days),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_members(path: &Path, members: &[TeamMember]) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let mut seen = HashSet::new();
        for member in members {
            member.validate().map_err(|e| parse_error(e.to_string()))?;
            if !seen.insert(member.id.as_str()) {
                return Err(parse_error(format!("duplicate member id '{}'", member.id)));
            }
        }
        Ok(())
    }

    fn check_work_days(
        path: &Path,
        records: &[WorkDayRecord],
        members: &[TeamMember],
    ) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let roster: HashSet<&str> = members.iter().map(|m| m.id.as_str()).collect();
        let mut seen = HashSet::new();
        for record in records {
            if !roster.contains(record.member_id.as_str()) {
                return Err(parse_error(format!(
                    "work day for unknown member '{}' on {}",
                    record.member_id, record.date
                )));
            }
            if !seen.insert((record.member_id.as_str(), record.date)) {
                return Err(parse_error(format!(
                    "duplicate work day for member '{}' on {}",
                    record.member_id, record.date
                )));
            }
        }
        Ok(())
    }

    /// Returns the configured payday.
    pub fn payday(&self) -> u32 {
        self.config.settings().payroll.payday
    }

    /// Returns the address the HTTP server binds to.
    pub fn bind_address(&self) -> &str {
        &self.config.settings().server.bind_address
    }

    /// Returns the roster members.
    pub fn members(&self) -> &[TeamMember] {
        self.config.members()
    }

    /// Returns the seed work days.
    pub fn work_days(&self) -> &[WorkDayRecord] {
        self.config.work_days()
    }
}
