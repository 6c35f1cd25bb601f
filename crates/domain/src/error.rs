// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Region;

/// Errors that can occur while enforcing allocation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The registry already holds the maximum number of officials.
    CapacityExceeded {
        /// The configured official capacity.
        capacity: usize,
    },
    /// An official with this identifier is already registered.
    DuplicateOfficialId(String),
    /// No official is registered under this identifier.
    OfficialNotFound(String),
    /// The official is still referenced by active fixtures.
    OfficialAssigned {
        /// The official's identifier.
        id: String,
        /// The weeks of the fixtures referencing the official.
        weeks: Vec<u8>,
    },
    /// The official is not available in their own home region.
    HomeRegionUnavailable {
        /// The official's identifier.
        id: String,
        /// The official's home region.
        home: Region,
    },
    /// A fixture is already scheduled for this week.
    DuplicateWeek(u8),
    /// No fixture is scheduled for this week.
    FixtureNotFound(u8),
    /// The week lies outside the season.
    InvalidWeek {
        /// The requested week.
        week: u8,
        /// The last week of the season.
        max: u8,
    },
    /// Too few eligible officials to staff the match.
    InsufficientOfficials {
        /// The number of officials a match requires.
        required: usize,
        /// The number of eligible officials found.
        found: usize,
    },
    /// An official's assignment count would drop below zero.
    AssignmentUnderflow(String),
    /// An official's assignment count cannot be raised any further.
    AssignmentOverflow(String),
    /// A full name could not be split into first name and surname.
    InvalidName(String),
    /// A region name is not one of North, Central or South.
    InvalidRegion(String),
    /// A match level is not one of Senior or Junior.
    InvalidLevel(String),
    /// An availability code is not three `Y`/`N` characters.
    InvalidAvailabilityCode(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "Registry is full: at most {capacity} officials allowed")
            }
            Self::DuplicateOfficialId(id) => {
                write!(f, "Official with ID '{id}' already exists")
            }
            Self::OfficialNotFound(id) => write!(f, "Official with ID '{id}' not found"),
            Self::OfficialAssigned { id, weeks } => {
                let weeks: Vec<String> = weeks.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Official '{id}' is assigned to fixtures in weeks {}",
                    weeks.join(", ")
                )
            }
            Self::HomeRegionUnavailable { id, home } => {
                write!(
                    f,
                    "Official '{id}' must be available in home region {home}"
                )
            }
            Self::DuplicateWeek(week) => {
                write!(f, "A fixture is already scheduled for week {week}")
            }
            Self::FixtureNotFound(week) => write!(f, "No fixture scheduled for week {week}"),
            Self::InvalidWeek { week, max } => {
                write!(f, "Invalid week: {week}. Must be between 1 and {max}")
            }
            Self::InsufficientOfficials { required, found } => {
                write!(
                    f,
                    "Match requires {required} eligible officials, found {found}"
                )
            }
            Self::AssignmentUnderflow(id) => {
                write!(f, "Official '{id}' has no assignments to release")
            }
            Self::AssignmentOverflow(id) => {
                write!(f, "Official '{id}' cannot take any more assignments")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidRegion(value) => write!(f, "Invalid region: '{value}'"),
            Self::InvalidLevel(value) => write!(f, "Invalid match level: '{value}'"),
            Self::InvalidAvailabilityCode(value) => {
                write!(f, "Invalid availability code: '{value}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
