//! In-memory registry implementations.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{PoisonError, RwLock};

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::validate_payday;
use crate::error::{EngineError, EngineResult};
use crate::models::{MemberRateProfile, TeamMember, WorkDayFlags, WorkDayRecord};

use super::{SettingsStore, TeamRoster, WorkDayRegistry};

fn poisoned<T>(_: PoisonError<T>) -> EngineError {
    EngineError::StorageError {
        message: "registry lock poisoned".to_string(),
    }
}

/// A [`TeamRoster`] backed by a map in memory.
#[derive(Debug, Default)]
pub struct InMemoryRoster {
    members: RwLock<BTreeMap<String, TeamMember>>,
}

impl InMemoryRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster seeded with the given members.
    ///
    /// Every member is validated; a later duplicate ID replaces an earlier one.
    pub fn with_members(members: impl IntoIterator<Item = TeamMember>) -> EngineResult<Self> {
        let roster = Self::new();
        for member in members {
            roster.upsert_member(member)?;
        }
        Ok(roster)
    }
}

impl TeamRoster for InMemoryRoster {
    fn upsert_member(&self, member: TeamMember) -> EngineResult<bool> {
        member.validate()?;
        let mut members = self.members.write().map_err(poisoned)?;
        let created = members.insert(member.id.clone(), member).is_none();
        Ok(created)
    }

    fn get_member(&self, member_id: &str) -> EngineResult<Option<TeamMember>> {
        let members = self.members.read().map_err(poisoned)?;
        Ok(members.get(member_id).cloned())
    }

    fn list_members(&self) -> EngineResult<Vec<TeamMember>> {
        let members = self.members.read().map_err(poisoned)?;
        Ok(members.values().cloned().collect())
    }

    fn remove_member(&self, member_id: &str) -> EngineResult<bool> {
        let mut members = self.members.write().map_err(poisoned)?;
        Ok(members.remove(member_id).is_some())
    }

    fn set_rates(&self, member_id: &str, rates: MemberRateProfile) -> EngineResult<TeamMember> {
        rates.validate()?;
        let mut members = self.members.write().map_err(poisoned)?;
        let member = members
            .get_mut(member_id)
            .ok_or_else(|| EngineError::MemberNotFound {
                member_id: member_id.to_string(),
            })?;
        member.rates = rates;
        Ok(member.clone())
    }
}

type WorkDayKey = (String, NaiveDate);

/// A [`WorkDayRegistry`] backed by an ordered map keyed by `(member_id, date)`.
#[derive(Debug, Default)]
pub struct InMemoryWorkDays {
    records: RwLock<BTreeMap<WorkDayKey, WorkDayRecord>>,
}

impl InMemoryWorkDays {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with records. Later duplicates replace
    /// earlier ones.
    pub fn with_records(records: impl IntoIterator<Item = WorkDayRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|record| ((record.member_id.clone(), record.date), record))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }

    fn member_range(member_id: &str) -> std::ops::RangeInclusive<WorkDayKey> {
        (member_id.to_string(), NaiveDate::MIN)..=(member_id.to_string(), NaiveDate::MAX)
    }
}

impl WorkDayRegistry for InMemoryWorkDays {
    fn mark_worked(&self, record: WorkDayRecord) -> EngineResult<bool> {
        let mut records = self.records.write().map_err(poisoned)?;
        let key = (record.member_id.clone(), record.date);
        let created = records.insert(key, record).is_none();
        Ok(created)
    }

    fn unmark(&self, member_id: &str, date: NaiveDate) -> EngineResult<bool> {
        let mut records = self.records.write().map_err(poisoned)?;
        Ok(records.remove(&(member_id.to_string(), date)).is_some())
    }

    fn set_flags(
        &self,
        member_id: &str,
        date: NaiveDate,
        flags: WorkDayFlags,
    ) -> EngineResult<WorkDayRecord> {
        let mut records = self.records.write().map_err(poisoned)?;
        let record = records
            .get_mut(&(member_id.to_string(), date))
            .ok_or_else(|| EngineError::WorkDayNotFound {
                member_id: member_id.to_string(),
                date,
            })?;
        record.apply_flags(flags);
        Ok(record.clone())
    }

    fn get(&self, member_id: &str, date: NaiveDate) -> EngineResult<Option<WorkDayRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(&(member_id.to_string(), date)).cloned())
    }

    fn list_for_member(&self, member_id: &str) -> EngineResult<Vec<WorkDayRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .range(Self::member_range(member_id))
            .map(|(_, record)| record.clone())
            .collect())
    }

    fn list_all(&self) -> EngineResult<Vec<WorkDayRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.values().cloned().collect())
    }

    fn remove_member(&self, member_id: &str) -> EngineResult<usize> {
        let mut records = self.records.write().map_err(poisoned)?;
        let before = records.len();
        records.retain(|(owner, _), _| owner != member_id);
        let removed = before - records.len();
        debug!(member_id = %member_id, removed, "Removed member work days");
        Ok(removed)
    }
}

/// A [`SettingsStore`] holding the payday in memory.
#[derive(Debug)]
pub struct InMemorySettings {
    payday: AtomicU32,
}

impl InMemorySettings {
    /// Creates a store with the given payday.
    pub fn new(payday: u32) -> EngineResult<Self> {
        Ok(Self {
            payday: AtomicU32::new(validate_payday(payday)?),
        })
    }
}

impl Default for InMemorySettings {
    fn default() -> Self {
        Self {
            payday: AtomicU32::new(crate::calculation::MIN_PAYDAY),
        }
    }
}

impl SettingsStore for InMemorySettings {
    fn payday(&self) -> EngineResult<u32> {
        Ok(self.payday.load(Ordering::Acquire))
    }

    fn set_payday(&self, payday: u32) -> EngineResult<()> {
        self.payday.store(validate_payday(payday)?, Ordering::Release);
        Ok(())
    }
}
