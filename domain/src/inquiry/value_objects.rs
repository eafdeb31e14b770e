//! Inquiry value objects

use crate::core::error::DomainError;
use chrono::{NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nature of the project being inquired about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectType {
    #[default]
    Editorial,
    Commercial,
    Event,
    Personal,
    Other,
}

impl ProjectType {
    /// Lenient match for typed input, e.g. `event` for `Event`
    pub fn from_input(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(input))
    }

    pub const ALL: [ProjectType; 5] = [
        ProjectType::Editorial,
        ProjectType::Commercial,
        ProjectType::Event,
        ProjectType::Personal,
        ProjectType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Editorial => "Editorial",
            ProjectType::Commercial => "Commercial",
            ProjectType::Event => "Event",
            ProjectType::Personal => "Personal",
            ProjectType::Other => "Other",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectType {
    type Err = DomainError;

    /// Exact match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DomainError::InvalidProjectType(s.to_string()))
    }
}

/// How the inquirer found the artist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReferralSource {
    #[default]
    Instagram,
    Website,
    Referral,
    Other,
}

impl ReferralSource {
    /// Lenient match for typed input, e.g. `event` for `Event`
    pub fn from_input(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(input))
    }

    pub const ALL: [ReferralSource; 4] = [
        ReferralSource::Instagram,
        ReferralSource::Website,
        ReferralSource::Referral,
        ReferralSource::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferralSource::Instagram => "Instagram",
            ReferralSource::Website => "Website",
            ReferralSource::Referral => "Referral",
            ReferralSource::Other => "Other",
        }
    }
}

impl fmt::Display for ReferralSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReferralSource {
    type Err = DomainError;

    /// Exact match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DomainError::InvalidReferralSource(s.to_string()))
    }
}

/// When the project is happening
///
/// `to` is optional. `to >= from` is implied by the date picker but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn single(day: NaiveDate) -> Self {
        Self { from: day, to: None }
    }

    /// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
    ///
    /// Browsers serialize a picked day as local midnight in UTC, so
    /// Helsinki's June 1 arrives as `2024-05-31T21:00:00.000Z`. Timestamps
    /// are rounded to the nearest UTC day, which recovers the picked day for
    /// any offset within twelve hours of UTC.
    pub fn parse_date(raw: &str) -> Result<NaiveDate, DomainError> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date);
        }
        let instant = chrono::DateTime::parse_from_rfc3339(raw)
            .map_err(|_| DomainError::InvalidDate(raw.to_string()))?
            .with_timezone(&Utc);
        instant
            .checked_add_signed(TimeDelta::hours(12))
            .map(|rounded| rounded.date_naive())
            .ok_or_else(|| DomainError::InvalidDate(raw.to_string()))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(
                f,
                "{} - {}",
                self.from.format("%Y-%m-%d"),
                to.format("%Y-%m-%d")
            ),
            None => write!(f, "{}", self.from.format("%Y-%m-%d")),
        }
    }
}
