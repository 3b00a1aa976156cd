//! Team member model and related types.
//!
//! This module defines the [`TeamMember`] roster entry and the
//! [`MemberRateProfile`] used to price a member's worked days.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Per-member compensation configuration.
///
/// The default profile pays nothing; it stands in for members without
/// configured rates.
///
/// # Example
///
/// ```
/// use salary_engine::models::MemberRateProfile;
/// use rust_decimal::Decimal;
///
/// let rates = MemberRateProfile::new(Decimal::from(1000), Decimal::from(500));
/// assert_eq!(rates.daily_rate, Decimal::from(1000));
/// assert_eq!(MemberRateProfile::default().car_bonus, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRateProfile {
    /// Base pay for one ordinary worked day.
    #[serde(default)]
    pub daily_rate: Decimal,
    /// Flat additional pay for a day worked with a car.
    #[serde(default)]
    pub car_bonus: Decimal,
}

impl MemberRateProfile {
    /// Creates a rate profile.
    pub fn new(daily_rate: Decimal, car_bonus: Decimal) -> Self {
        Self {
            daily_rate,
            car_bonus,
        }
    }

    /// Checks that neither rate is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.daily_rate < Decimal::ZERO {
            return Err(EngineError::InvalidMember {
                field: "daily_rate".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if self.car_bonus < Decimal::ZERO {
            return Err(EngineError::InvalidMember {
                field: "car_bonus".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

/// A member of the team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Unique identifier for the member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Job title or role (e.g., "installer", "driver").
    #[serde(default)]
    pub role: String,
    /// The member's compensation rates.
    #[serde(default)]
    pub rates: MemberRateProfile,
}

impl TeamMember {
    /// Creates a member with the given rates and an empty role.
    pub fn new(id: impl Into<String>, name: impl Into<String>, rates: MemberRateProfile) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: String::new(),
            rates,
        }
    }

    /// Validates the roster invariants for this member.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::{MemberRateProfile, TeamMember};
    ///
    /// let member = TeamMember::new("", "Nameless", MemberRateProfile::default());
    /// assert!(member.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidMember {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidMember {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        self.rates.validate()
    }
}
