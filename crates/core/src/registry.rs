// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::limits::{OFFICIALS_PER_MATCH, RegistryLimits};
use ref_alloc_domain::{
    Availability, DomainError, Fixture, MatchLevel, Official, OfficialId, Qualification, Region,
    Week, compare_by_id, rank_candidates, validate_home_availability, validate_official_id_unique,
    validate_week,
};
use tracing::{debug, info};

/// The registry of officials and scheduled fixtures for one season.
///
/// Officials are owned here; fixtures refer to them by identifier, so every
/// assignment count lives on exactly one record. Each operation checks all of
/// its preconditions before mutating anything: a failed call leaves the
/// registry untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleRegistry {
    limits: RegistryLimits,
    officials: Vec<Official>,
    fixtures: Vec<Fixture>,
}

impl ScheduleRegistry {
    /// Creates an empty registry with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with custom limits.
    #[must_use]
    pub const fn with_limits(limits: RegistryLimits) -> Self {
        Self {
            limits,
            officials: Vec::new(),
            fixtures: Vec::new(),
        }
    }

    /// Returns the limits this registry enforces.
    #[must_use]
    pub const fn limits(&self) -> RegistryLimits {
        self.limits
    }

    /// Returns all officials in registration order.
    #[must_use]
    pub fn officials(&self) -> &[Official] {
        &self.officials
    }

    /// Returns all fixtures in scheduling order.
    #[must_use]
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Returns whether no more officials can be registered.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.officials.len() >= self.limits.max_officials
    }

    /// Registers a new official.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The registry is at capacity
    /// - An official with the same identifier is already registered
    /// - The official is not available in their home region
    pub fn register_official(&mut self, official: Official) -> Result<(), CoreError> {
        if self.is_full() {
            return Err(CoreError::DomainViolation(DomainError::CapacityExceeded {
                capacity: self.limits.max_officials,
            }));
        }
        validate_official_id_unique(official.id(), &self.officials)?;
        validate_home_availability(official.id(), official.home(), official.availability())?;

        info!(
            id = %official.id(),
            name = %official.full_name(),
            home = %official.home(),
            "Registered official"
        );
        self.officials.push(official);
        Ok(())
    }

    /// Removes an official and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No official has this identifier
    /// - The official is assigned to any active fixture
    pub fn remove_official(&mut self, id: &OfficialId) -> Result<Official, CoreError> {
        let position: usize = self.position_of(id)?;

        let weeks: Vec<u8> = self
            .fixtures
            .iter()
            .filter(|fixture| fixture.involves(id))
            .map(|fixture| fixture.week().number())
            .collect();
        if !weeks.is_empty() {
            return Err(CoreError::DomainViolation(DomainError::OfficialAssigned {
                id: id.value().to_string(),
                weeks,
            }));
        }

        let removed: Official = self.officials.remove(position);
        info!(id = %removed.id(), "Removed official");
        Ok(removed)
    }

    /// Replaces an official's qualification, home region and availability.
    ///
    /// Identifier, name and assignment count are never changed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No official has this identifier
    /// - The new availability excludes the new home region
    pub fn edit_official(
        &mut self,
        id: &OfficialId,
        qualification: Qualification,
        home: Region,
        availability: Availability,
    ) -> Result<(), CoreError> {
        let position: usize = self.position_of(id)?;
        validate_home_availability(id, home, availability)?;

        self.officials[position].update_details(qualification, home, availability);
        info!(id = %id, home = %home, availability = %availability.code(), "Edited official");
        Ok(())
    }

    /// Finds an official by identifier.
    #[must_use]
    pub fn official_by_id(&self, id: &OfficialId) -> Option<&Official> {
        self.officials.iter().find(|official| official.id() == id)
    }

    /// Finds the first official whose full name is exactly `full_name`.
    #[must_use]
    pub fn official_by_full_name(&self, full_name: &str) -> Option<&Official> {
        self.officials
            .iter()
            .find(|official| official.full_name() == full_name)
    }

    /// Returns all officials ordered by identifier.
    #[must_use]
    pub fn officials_sorted_by_id(&self) -> Vec<&Official> {
        let mut sorted: Vec<&Official> = self.officials.iter().collect();
        sorted.sort_by(|a, b| compare_by_id(a, b));
        sorted
    }

    /// Finds the fixture scheduled for a week.
    #[must_use]
    pub fn fixture_by_week(&self, week: Week) -> Option<&Fixture> {
        self.fixtures.iter().find(|fixture| fixture.week() == week)
    }

    /// Returns the weeks of every fixture the official is assigned to.
    #[must_use]
    pub fn weeks_assigned_to(&self, id: &OfficialId) -> Vec<Week> {
        self.fixtures
            .iter()
            .filter(|fixture| fixture.involves(id))
            .map(Fixture::week)
            .collect()
    }

    /// Returns the eligible officials for a match, best candidate first.
    ///
    /// This is the order `schedule_match` picks from. Nothing is assigned.
    #[must_use]
    pub fn suitable_officials(&self, venue: Region, level: MatchLevel) -> Vec<&Official> {
        rank_candidates(&self.officials, venue, level)
    }

    /// Schedules a match and assigns the two best-ranked officials to it.
    ///
    /// The first candidate becomes referee 1 and the second referee 2; each
    /// has their assignment count raised by one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The week is outside the season
    /// - A fixture already exists for the week
    /// - Fewer than two officials are eligible
    /// - A chosen official's assignment count is already at its maximum
    pub fn schedule_match(
        &mut self,
        venue: Region,
        level: MatchLevel,
        week: Week,
    ) -> Result<Fixture, CoreError> {
        validate_week(week, self.limits.weeks_in_season)?;
        if self.fixture_by_week(week).is_some() {
            return Err(CoreError::DomainViolation(DomainError::DuplicateWeek(
                week.number(),
            )));
        }

        let candidates: Vec<&Official> = self.suitable_officials(venue, level);
        debug!(
            venue = %venue,
            level = %level,
            week = %week,
            candidates = ?candidates.iter().map(|c| c.id().value()).collect::<Vec<_>>(),
            "Ranked candidates"
        );
        let [first, second, ..] = candidates.as_slice() else {
            return Err(CoreError::DomainViolation(
                DomainError::InsufficientOfficials {
                    required: OFFICIALS_PER_MATCH,
                    found: candidates.len(),
                },
            ));
        };

        let fixture: Fixture =
            Fixture::new(venue, level, week, first.id().clone(), second.id().clone());
        let positions: Vec<usize> = fixture
            .referees()
            .iter()
            .map(|id| self.position_of(id))
            .collect::<Result<_, _>>()?;
        if let Some(&position) = positions
            .iter()
            .find(|&&position| self.officials[position].assignments() == u32::MAX)
        {
            return Err(CoreError::DomainViolation(DomainError::AssignmentOverflow(
                self.officials[position].id().value().to_string(),
            )));
        }

        for position in positions {
            self.officials[position].record_assignment()?;
        }
        self.fixtures.push(fixture.clone());

        info!(
            week = %week,
            venue = %venue,
            level = %level,
            referee_1 = %fixture.referee_1(),
            referee_2 = %fixture.referee_2(),
            "Scheduled match"
        );
        Ok(fixture)
    }

    /// Removes the fixture for a week and releases both of its officials.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No fixture exists for the week
    /// - A referenced official is missing or has no assignment to release
    pub fn unschedule_match(&mut self, week: Week) -> Result<Fixture, CoreError> {
        let fixture_position: usize = self
            .fixtures
            .iter()
            .position(|fixture| fixture.week() == week)
            .ok_or(CoreError::DomainViolation(DomainError::FixtureNotFound(
                week.number(),
            )))?;

        let positions: Vec<usize> = self.fixtures[fixture_position]
            .referees()
            .iter()
            .map(|id| self.position_of(id))
            .collect::<Result<_, _>>()?;
        if let Some(&position) = positions
            .iter()
            .find(|&&position| self.officials[position].assignments() == 0)
        {
            return Err(CoreError::DomainViolation(
                DomainError::AssignmentUnderflow(
                    self.officials[position].id().value().to_string(),
                ),
            ));
        }

        for position in positions {
            self.officials[position].release_assignment()?;
        }
        let removed: Fixture = self.fixtures.remove(fixture_position);

        info!(week = %week, "Unscheduled match");
        Ok(removed)
    }

    /// Locates an official's index in registration order.
    fn position_of(&self, id: &OfficialId) -> Result<usize, CoreError> {
        self.officials
            .iter()
            .position(|official| official.id() == id)
            .ok_or_else(|| {
                CoreError::DomainViolation(DomainError::OfficialNotFound(id.value().to_string()))
            })
    }
}
