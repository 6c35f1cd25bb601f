// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Number of officials that staff a single fixture.
pub const OFFICIALS_PER_MATCH: usize = 2;

/// Default maximum number of registered officials.
pub const MAXIMUM_NUMBER_OF_OFFICIALS: usize = 12;

/// Default number of weeks in a season.
pub const WEEKS_IN_A_SEASON: u8 = 52;

/// Capacity limits enforced by a `ScheduleRegistry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryLimits {
    /// The maximum number of officials that can be registered.
    pub max_officials: usize,
    /// The number of weeks in the season; fixtures use weeks `1..=weeks_in_season`.
    pub weeks_in_season: u8,
}

impl RegistryLimits {
    /// Creates limits with the given capacity and season length.
    #[must_use]
    pub const fn new(max_officials: usize, weeks_in_season: u8) -> Self {
        Self {
            max_officials,
            weeks_in_season,
        }
    }
}

impl Default for RegistryLimits {
    fn default() -> Self {
        Self::new(MAXIMUM_NUMBER_OF_OFFICIALS, WEEKS_IN_A_SEASON)
    }
}
