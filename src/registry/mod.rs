//! Registries owning the engine's input data.
//!
//! Each entity has its own storage trait with clearly owned read and write
//! methods: the [`TeamRoster`] owns members and their rates, the
//! [`WorkDayRegistry`] owns work-day records and the [`SettingsStore`]
//! owns the payday. The salary calculation only ever reads from them.
//!
//! All operations are synchronous. The in-memory implementations in this
//! module are what the HTTP service runs on.

mod memory;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{MemberRateProfile, TeamMember, WorkDayFlags, WorkDayRecord};

pub use memory::{InMemoryRoster, InMemorySettings, InMemoryWorkDays};

/// Storage for team members and their rate profiles.
pub trait TeamRoster: Send + Sync {
    /// Inserts or replaces a member. Returns true if the member was new.
    fn upsert_member(&self, member: TeamMember) -> EngineResult<bool>;

    /// Retrieves a member by ID.
    fn get_member(&self, member_id: &str) -> EngineResult<Option<TeamMember>>;

    /// Lists all members ordered by ID.
    fn list_members(&self) -> EngineResult<Vec<TeamMember>>;

    /// Removes a member. Returns true if the member existed.
    fn remove_member(&self, member_id: &str) -> EngineResult<bool>;

    /// Replaces a member's rate profile and returns the updated member.
    fn set_rates(&self, member_id: &str, rates: MemberRateProfile) -> EngineResult<TeamMember>;

    /// Returns a member's rate profile, if the member exists.
    fn rate_profile(&self, member_id: &str) -> EngineResult<Option<MemberRateProfile>> {
        Ok(self.get_member(member_id)?.map(|member| member.rates))
    }
}

/// Storage for work-day records, unique per `(member_id, date)`.
pub trait WorkDayRegistry: Send + Sync {
    /// Marks a day worked, replacing the flags of an existing record.
    /// Returns true if a new record was created.
    fn mark_worked(&self, record: WorkDayRecord) -> EngineResult<bool>;

    /// Removes a work day. Returns true if it existed.
    fn unmark(&self, member_id: &str, date: NaiveDate) -> EngineResult<bool>;

    /// Updates the flags of an existing record in place.
    fn set_flags(
        &self,
        member_id: &str,
        date: NaiveDate,
        flags: WorkDayFlags,
    ) -> EngineResult<WorkDayRecord>;

    /// Retrieves a single record.
    fn get(&self, member_id: &str, date: NaiveDate) -> EngineResult<Option<WorkDayRecord>>;

    /// Lists a member's records ordered by date.
    fn list_for_member(&self, member_id: &str) -> EngineResult<Vec<WorkDayRecord>>;

    /// Lists every record ordered by member ID, then date.
    fn list_all(&self) -> EngineResult<Vec<WorkDayRecord>>;

    /// Removes all of a member's records. Returns how many were removed.
    fn remove_member(&self, member_id: &str) -> EngineResult<usize>;
}

/// Storage for tenant-wide payroll settings.
pub trait SettingsStore: Send + Sync {
    /// The day of month on which a new pay period begins.
    fn payday(&self) -> EngineResult<u32>;

    /// Changes the payday. Values outside `1..=28` are rejected.
    fn set_payday(&self, payday: u32) -> EngineResult<()>;
}
