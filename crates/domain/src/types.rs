// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the three geographic regions of the league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// The northern region.
    North,
    /// The central region.
    Central,
    /// The southern region.
    South,
}

impl Region {
    /// All regions in availability-code order.
    pub const ALL: [Self; 3] = [Self::North, Self::Central, Self::South];

    /// Converts this region to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::North => "North",
            Self::Central => "Central",
            Self::South => "South",
        }
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "North" => Ok(Self::North),
            "Central" => Ok(Self::Central),
            "South" => Ok(Self::South),
            _ => Err(DomainError::InvalidRegion(s.to_string())),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The level a match is played at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchLevel {
    /// Senior matches require an official qualified above level 1.
    Senior,
    /// Junior matches may be officiated by anyone.
    Junior,
}

impl MatchLevel {
    /// Converts this level to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Senior => "Senior",
            Self::Junior => "Junior",
        }
    }
}

impl FromStr for MatchLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Senior" => Ok(Self::Senior),
            "Junior" => Ok(Self::Junior),
            _ => Err(DomainError::InvalidLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether an official is willing to travel to each region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Availability {
    north: bool,
    central: bool,
    south: bool,
}

impl Availability {
    /// Creates availability from the three regional flags.
    #[must_use]
    pub const fn new(north: bool, central: bool, south: bool) -> Self {
        Self {
            north,
            central,
            south,
        }
    }

    /// Availability limited to a single region.
    #[must_use]
    pub const fn only(region: Region) -> Self {
        match region {
            Region::North => Self::new(true, false, false),
            Region::Central => Self::new(false, true, false),
            Region::South => Self::new(false, false, true),
        }
    }

    /// Decodes a compact availability code such as `"YNY"`.
    ///
    /// The code holds exactly one `Y` or `N` per region, in North, Central,
    /// South order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAvailabilityCode` if the code is not three
    /// `Y`/`N` characters.
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        let flags: Vec<bool> = code
            .chars()
            .map(|c| match c {
                'Y' => Ok(true),
                'N' => Ok(false),
                _ => Err(DomainError::InvalidAvailabilityCode(code.to_string())),
            })
            .collect::<Result<_, _>>()?;

        match flags.as_slice() {
            [north, central, south] => Ok(Self::new(*north, *central, *south)),
            _ => Err(DomainError::InvalidAvailabilityCode(code.to_string())),
        }
    }

    /// Encodes this availability as a compact code such as `"YNY"`.
    #[must_use]
    pub fn code(&self) -> String {
        Region::ALL
            .iter()
            .map(|region| if self.is_available_in(*region) { 'Y' } else { 'N' })
            .collect()
    }

    /// Returns whether the official will officiate in the given region.
    #[must_use]
    pub const fn is_available_in(&self, region: Region) -> bool {
        match region {
            Region::North => self.north,
            Region::Central => self.central,
            Region::South => self.south,
        }
    }
}

/// The identifier of an official, e.g. `"JS1"`.
///
/// Identifiers are fixed once an official is registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfficialId {
    value: String,
}

impl OfficialId {
    /// Creates a new `OfficialId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the identifier starts with the given pair of initials.
    #[must_use]
    pub fn has_initials(&self, first: char, second: char) -> bool {
        let mut chars = self.value.chars();
        chars.next() == Some(first) && chars.next() == Some(second)
    }
}

impl std::fmt::Display for OfficialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An official's qualification code, e.g. `"NJB2"` or `"IJB1"`.
///
/// The trailing character carries the qualification level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Qualification {
    code: String,
}

impl Qualification {
    /// Creates a new `Qualification`.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
        }
    }

    /// Returns the qualification code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns whether this qualification permits officiating the given level.
    ///
    /// Senior matches need a level strictly above `'1'`; an empty code never
    /// qualifies. Junior matches accept every code.
    #[must_use]
    pub fn permits(&self, level: MatchLevel) -> bool {
        match level {
            MatchLevel::Junior => true,
            MatchLevel::Senior => self.code.chars().last().is_some_and(|level| level > '1'),
        }
    }
}

impl std::fmt::Display for Qualification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// A week of the season, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(u8);

impl Week {
    /// Creates a new `Week`. Range checks happen against the season length.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Returns the week number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Week {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered match official.
///
/// Identity (identifier and name) is fixed at creation. Qualification, home
/// region and availability may be edited; the assignment count only moves as
/// fixtures are scheduled and removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Official {
    id: OfficialId,
    first_name: String,
    surname: String,
    qualification: Qualification,
    assignments: u32,
    home: Region,
    availability: Availability,
}

impl Official {
    /// Creates a new `Official`.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier
    /// * `first_name` - The official's first name
    /// * `surname` - The official's surname
    /// * `qualification` - The qualification code
    /// * `assignments` - The number of matches already assigned this season
    /// * `home` - The region the official lives in
    /// * `availability` - The regions the official will travel to
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        id: OfficialId,
        first_name: String,
        surname: String,
        qualification: Qualification,
        assignments: u32,
        home: Region,
        availability: Availability,
    ) -> Self {
        Self {
            id,
            first_name,
            surname,
            qualification,
            assignments,
            home,
            availability,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &OfficialId {
        &self.id
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the surname.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Returns `"First Surname"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }

    /// Returns the qualification.
    #[must_use]
    pub const fn qualification(&self) -> &Qualification {
        &self.qualification
    }

    /// Returns the number of fixtures currently assigned to this official.
    #[must_use]
    pub const fn assignments(&self) -> u32 {
        self.assignments
    }

    /// Returns the home region.
    #[must_use]
    pub const fn home(&self) -> Region {
        self.home
    }

    /// Returns the regional availability.
    #[must_use]
    pub const fn availability(&self) -> Availability {
        self.availability
    }

    /// Returns whether this official may officiate a `level` match at `venue`.
    #[must_use]
    pub fn is_eligible_for(&self, level: MatchLevel, venue: Region) -> bool {
        self.qualification.permits(level) && self.availability.is_available_in(venue)
    }

    /// Replaces the editable details of this official.
    pub fn update_details(
        &mut self,
        qualification: Qualification,
        home: Region,
        availability: Availability,
    ) {
        self.qualification = qualification;
        self.home = home;
        self.availability = availability;
    }

    /// Records one more fixture assignment.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentOverflow` if the count is already at
    /// its maximum.
    pub fn record_assignment(&mut self) -> Result<(), DomainError> {
        self.assignments = self
            .assignments
            .checked_add(1)
            .ok_or_else(|| DomainError::AssignmentOverflow(self.id.value().to_string()))?;
        Ok(())
    }

    /// Releases one fixture assignment.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AssignmentUnderflow` if the count is already zero.
    pub fn release_assignment(&mut self) -> Result<(), DomainError> {
        self.assignments = self
            .assignments
            .checked_sub(1)
            .ok_or_else(|| DomainError::AssignmentUnderflow(self.id.value().to_string()))?;
        Ok(())
    }
}

/// A match scheduled for one week of the season.
///
/// A fixture only exists once both of its officials have been chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    venue: Region,
    level: MatchLevel,
    week: Week,
    referees: [OfficialId; 2],
}

impl Fixture {
    /// Creates a new `Fixture` staffed by two officials.
    #[must_use]
    pub const fn new(
        venue: Region,
        level: MatchLevel,
        week: Week,
        referee_1: OfficialId,
        referee_2: OfficialId,
    ) -> Self {
        Self {
            venue,
            level,
            week,
            referees: [referee_1, referee_2],
        }
    }

    /// Returns the venue region.
    #[must_use]
    pub const fn venue(&self) -> Region {
        self.venue
    }

    /// Returns the match level.
    #[must_use]
    pub const fn level(&self) -> MatchLevel {
        self.level
    }

    /// Returns the week.
    #[must_use]
    pub const fn week(&self) -> Week {
        self.week
    }

    /// Returns the first referee.
    #[must_use]
    pub const fn referee_1(&self) -> &OfficialId {
        &self.referees[0]
    }

    /// Returns the second referee.
    #[must_use]
    pub const fn referee_2(&self) -> &OfficialId {
        &self.referees[1]
    }

    /// Returns both referees in allocation order.
    #[must_use]
    pub const fn referees(&self) -> &[OfficialId; 2] {
        &self.referees
    }

    /// Returns whether the given official officiates this fixture.
    #[must_use]
    pub fn involves(&self, id: &OfficialId) -> bool {
        self.referees.contains(id)
    }
}
