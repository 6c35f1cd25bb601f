// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Availability, Official, OfficialId, Region, Week};

/// Validates that an official is available in their own home region.
///
/// # Errors
///
/// Returns `DomainError::HomeRegionUnavailable` if the availability excludes
/// the home region.
pub fn validate_home_availability(
    id: &OfficialId,
    home: Region,
    availability: Availability,
) -> Result<(), DomainError> {
    // Rule: an official always officiates in their home region
    if !availability.is_available_in(home) {
        return Err(DomainError::HomeRegionUnavailable {
            id: id.value().to_string(),
            home,
        });
    }
    Ok(())
}

/// Validates that an official's identifier is not already registered.
///
/// # Errors
///
/// Returns `DomainError::DuplicateOfficialId` if the identifier is taken.
pub fn validate_official_id_unique(
    id: &OfficialId,
    existing: &[Official],
) -> Result<(), DomainError> {
    if existing.iter().any(|official| official.id() == id) {
        return Err(DomainError::DuplicateOfficialId(id.value().to_string()));
    }
    Ok(())
}

/// Validates that a week falls within a season of `weeks_in_season` weeks.
///
/// # Errors
///
/// Returns `DomainError::InvalidWeek` if the week is zero or beyond the
/// season.
pub fn validate_week(week: Week, weeks_in_season: u8) -> Result<(), DomainError> {
    if !(1..=weeks_in_season).contains(&week.number()) {
        return Err(DomainError::InvalidWeek {
            week: week.number(),
            max: weeks_in_season,
        });
    }
    Ok(())
}
