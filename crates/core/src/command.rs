// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ref_alloc_domain::{
    Availability, MatchLevel, Official, OfficialId, Qualification, Region, Week,
};

/// A command represents caller intent as data only.
///
/// Commands are the only way the boundary layer requests registry changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new official.
    RegisterOfficial {
        /// The official to register.
        official: Official,
    },
    /// Remove an official who has no active fixtures.
    RemoveOfficial {
        /// The official's identifier.
        id: OfficialId,
    },
    /// Replace an official's editable details.
    EditOfficial {
        /// The official's identifier.
        id: OfficialId,
        /// The new qualification.
        qualification: Qualification,
        /// The new home region.
        home: Region,
        /// The new regional availability.
        availability: Availability,
    },
    /// Schedule a match and allocate two officials to it.
    ScheduleMatch {
        /// The venue region.
        venue: Region,
        /// The match level.
        level: MatchLevel,
        /// The week of the season.
        week: Week,
    },
    /// Remove a scheduled match and release its officials.
    UnscheduleMatch {
        /// The week of the fixture to remove.
        week: Week,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RegisterOfficial { .. } => "RegisterOfficial",
            Self::RemoveOfficial { .. } => "RemoveOfficial",
            Self::EditOfficial { .. } => "EditOfficial",
            Self::ScheduleMatch { .. } => "ScheduleMatch",
            Self::UnscheduleMatch { .. } => "UnscheduleMatch",
        }
    }
}
