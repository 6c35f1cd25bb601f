// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use ref_alloc::ScheduleRegistry;
use ref_alloc_domain::{Fixture, Official};

/// API request to register a new official under a generated identifier.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterOfficialRequest {
    /// The official's full name, `"First Surname"`.
    pub name: String,
    /// The qualification code (e.g., `NJB2`).
    pub qualification: String,
    /// The home region.
    pub home: String,
    /// The availability code (e.g., `YNN`).
    pub availability: String,
    /// Matches already officiated this season, as entered.
    pub assignments: String,
}

/// API response for a successful official registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterOfficialResponse {
    /// The generated identifier.
    pub id: String,
    /// The registered full name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API request to replace an official's editable details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOfficialRequest {
    /// The official's identifier.
    pub id: String,
    /// The new qualification code.
    pub qualification: String,
    /// The new home region.
    pub home: String,
    /// The new availability code.
    pub availability: String,
}

/// API response for a successful edit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EditOfficialResponse {
    /// The edited official's identifier.
    pub id: String,
    /// A success message.
    pub message: String,
}

/// API response for a successful removal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RemoveOfficialResponse {
    /// The removed official's identifier.
    pub id: String,
    /// The removed official's full name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API response for a scheduled match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleMatchResponse {
    /// The fixture that was created.
    pub fixture: FixtureInfo,
    /// A success message.
    pub message: String,
}

/// API response for an unscheduled match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnscheduleMatchResponse {
    /// The fixture that was removed.
    pub fixture: FixtureInfo,
    /// A success message.
    pub message: String,
}

/// Official information for listings and snapshots.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OfficialInfo {
    /// The identifier.
    pub id: String,
    /// The first name.
    pub first_name: String,
    /// The surname.
    pub surname: String,
    /// The qualification code.
    pub qualification: String,
    /// Matches assigned this season.
    pub assignments: u32,
    /// The home region.
    pub home: String,
    /// The availability code.
    pub availability: String,
}

impl From<&Official> for OfficialInfo {
    fn from(official: &Official) -> Self {
        Self {
            id: official.id().value().to_string(),
            first_name: official.first_name().to_string(),
            surname: official.surname().to_string(),
            qualification: official.qualification().code().to_string(),
            assignments: official.assignments(),
            home: official.home().as_str().to_string(),
            availability: official.availability().code(),
        }
    }
}

/// Fixture information for listings and snapshots.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FixtureInfo {
    /// The week of the season.
    pub week: u8,
    /// The venue region.
    pub venue: String,
    /// The match level.
    pub level: String,
    /// Identifier of referee 1.
    pub referee_1: String,
    /// Identifier of referee 2.
    pub referee_2: String,
}

impl From<&Fixture> for FixtureInfo {
    fn from(fixture: &Fixture) -> Self {
        Self {
            week: fixture.week().number(),
            venue: fixture.venue().as_str().to_string(),
            level: fixture.level().as_str().to_string(),
            referee_1: fixture.referee_1().value().to_string(),
            referee_2: fixture.referee_2().value().to_string(),
        }
    }
}

/// One bar of the allocation chart.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AllocationCount {
    /// The official's identifier.
    pub id: String,
    /// Matches assigned this season.
    pub assignments: u32,
}

/// A point-in-time view of the whole registry.
///
/// Officials are ordered by identifier and fixtures by scheduling order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegistrySnapshot {
    /// The configured official capacity.
    pub max_officials: usize,
    /// The number of weeks in the season.
    pub weeks_in_season: u8,
    /// All registered officials.
    pub officials: Vec<OfficialInfo>,
    /// All scheduled fixtures.
    pub fixtures: Vec<FixtureInfo>,
}

impl From<&ScheduleRegistry> for RegistrySnapshot {
    fn from(registry: &ScheduleRegistry) -> Self {
        Self {
            max_officials: registry.limits().max_officials,
            weeks_in_season: registry.limits().weeks_in_season,
            officials: registry
                .officials_sorted_by_id()
                .into_iter()
                .map(OfficialInfo::from)
                .collect(),
            fixtures: registry.fixtures().iter().map(FixtureInfo::from).collect(),
        }
    }
}
