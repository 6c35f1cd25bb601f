// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers.
//!
//! Handlers translate string-typed requests into domain values, apply the
//! matching [`Command`] and translate the outcome into a response DTO.

use crate::error::{ApiError, translate_domain_error};
use crate::records::FixtureRequest;
use crate::request_response::{
    EditOfficialRequest, EditOfficialResponse, FixtureInfo, OfficialInfo,
    RegisterOfficialRequest, RegisterOfficialResponse, RemoveOfficialResponse,
    ScheduleMatchResponse, UnscheduleMatchResponse,
};
use ref_alloc::{Command, Outcome, ScheduleRegistry, apply};
use ref_alloc_domain::{
    Availability, Official, OfficialId, Qualification, Region, Week, generate_official_id,
    split_full_name,
};
use tracing::info;

/// Returns whether a name part is made only of ASCII letters and hyphens.
fn is_valid_name_part(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
}

/// Builds the error for an outcome the command cannot produce.
fn unexpected_outcome(outcome: &Outcome) -> ApiError {
    ApiError::Internal {
        message: format!("Unexpected command outcome: {outcome:?}"),
    }
}

/// Validates a full name entered for a new official.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` unless the name is exactly two
/// whitespace-separated parts, each made of letters and hyphens only.
pub fn validate_full_name(name: &str) -> Result<(), ApiError> {
    let (first_name, surname) = split_full_name(name).map_err(translate_domain_error)?;
    if is_valid_name_part(first_name) && is_valid_name_part(surname) {
        Ok(())
    } else {
        Err(ApiError::InvalidInput {
            field: String::from("name"),
            message: format!("'{name}' may contain only letters and hyphens"),
        })
    }
}

/// Parses a qualification code, rejecting blank input.
fn parse_qualification(code: &str) -> Result<Qualification, ApiError> {
    let code: &str = code.trim();
    if code.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("qualification"),
            message: String::from("Qualification must not be empty"),
        });
    }
    Ok(Qualification::new(code))
}

/// Parses an entered assignment count as a non-negative integer.
fn parse_assignments(value: &str) -> Result<u32, ApiError> {
    let value: &str = value.trim();
    value.parse().map_err(|_| ApiError::InvalidInput {
        field: String::from("assignments"),
        message: format!("'{value}' is not a non-negative whole number"),
    })
}

/// Parses the editable details shared by registration and edit requests.
fn parse_details(
    qualification: &str,
    home: &str,
    availability: &str,
) -> Result<(Qualification, Region, Availability), ApiError> {
    let qualification: Qualification = parse_qualification(qualification)?;
    let home: Region = home.trim().parse().map_err(translate_domain_error)?;
    let availability: Availability =
        Availability::from_code(availability.trim()).map_err(translate_domain_error)?;
    Ok((qualification, home, availability))
}

/// Registers a new official with a generated identifier.
///
/// # Arguments
///
/// * `registry` - The registry to update
/// * `request` - The registration request
///
/// # Returns
///
/// * `Ok(RegisterOfficialResponse)` carrying the generated identifier
/// * `Err(ApiError)` if the request is invalid or violates a domain rule
///
/// # Errors
///
/// Returns an error if:
/// - The name is not a valid first name and surname
/// - An official with the same full name is already registered
/// - The qualification, home region, availability code or assignment count
///   is invalid
/// - The registry rejects the official (capacity, home availability)
pub fn register_named_official(
    registry: &mut ScheduleRegistry,
    request: &RegisterOfficialRequest,
) -> Result<RegisterOfficialResponse, ApiError> {
    validate_full_name(&request.name)?;
    let (first_name, surname) = split_full_name(&request.name).map_err(translate_domain_error)?;
    let name: String = format!("{first_name} {surname}");

    if registry.official_by_full_name(&name).is_some() {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("unique_name"),
            message: format!("An official named '{name}' is already registered"),
        });
    }

    let (qualification, home, availability) =
        parse_details(&request.qualification, &request.home, &request.availability)?;
    let assignments: u32 = parse_assignments(&request.assignments)?;
    let id: OfficialId =
        generate_official_id(&name, registry.officials()).map_err(translate_domain_error)?;

    let official: Official = Official::new(
        id,
        first_name.to_string(),
        surname.to_string(),
        qualification,
        assignments,
        home,
        availability,
    );

    let id: OfficialId = match apply(registry, Command::RegisterOfficial { official })? {
        Outcome::OfficialRegistered(id) => id,
        other => return Err(unexpected_outcome(&other)),
    };

    info!(id = %id, name = %name, "Registered official from request");
    Ok(RegisterOfficialResponse {
        id: id.value().to_string(),
        message: format!("Registered {name} as {id}"),
        name,
    })
}

/// Replaces an official's qualification, home region and availability.
///
/// # Errors
///
/// Returns an error if a field is invalid, the official does not exist, or
/// the new availability excludes the new home region.
pub fn edit_official(
    registry: &mut ScheduleRegistry,
    request: &EditOfficialRequest,
) -> Result<EditOfficialResponse, ApiError> {
    let (qualification, home, availability) =
        parse_details(&request.qualification, &request.home, &request.availability)?;
    let command: Command = Command::EditOfficial {
        id: OfficialId::new(request.id.trim()),
        qualification,
        home,
        availability,
    };

    match apply(registry, command)? {
        Outcome::OfficialEdited(id) => Ok(EditOfficialResponse {
            message: format!("Updated {id}"),
            id: id.value().to_string(),
        }),
        other => Err(unexpected_outcome(&other)),
    }
}

/// Removes an official who has no active fixtures.
///
/// # Errors
///
/// Returns an error if the official does not exist or is still assigned.
pub fn remove_official(
    registry: &mut ScheduleRegistry,
    id: &str,
) -> Result<RemoveOfficialResponse, ApiError> {
    let command: Command = Command::RemoveOfficial {
        id: OfficialId::new(id.trim()),
    };

    match apply(registry, command)? {
        Outcome::OfficialRemoved(official) => Ok(RemoveOfficialResponse {
            id: official.id().value().to_string(),
            name: official.full_name(),
            message: format!("Removed {}", official.id()),
        }),
        other => Err(unexpected_outcome(&other)),
    }
}

/// Looks up an official by exact full name.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for a malformed name and
/// `ApiError::ResourceNotFound` if nobody has that name.
pub fn find_official_by_name(
    registry: &ScheduleRegistry,
    name: &str,
) -> Result<OfficialInfo, ApiError> {
    let (first_name, surname) = split_full_name(name).map_err(translate_domain_error)?;
    let name: String = format!("{first_name} {surname}");

    registry
        .official_by_full_name(&name)
        .map(OfficialInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Official"),
            message: format!("No official named '{name}'"),
        })
}

/// Schedules a match and allocates the two best-ranked officials to it.
///
/// # Errors
///
/// Returns an error if the week is outside the season or already taken, or
/// fewer than two officials are eligible.
pub fn schedule_match(
    registry: &mut ScheduleRegistry,
    request: FixtureRequest,
) -> Result<ScheduleMatchResponse, ApiError> {
    let command: Command = Command::ScheduleMatch {
        venue: request.venue,
        level: request.level,
        week: request.week,
    };

    match apply(registry, command)? {
        Outcome::MatchScheduled(fixture) => Ok(ScheduleMatchResponse {
            message: format!(
                "Week {}: {} and {} allocated",
                fixture.week(),
                fixture.referee_1(),
                fixture.referee_2()
            ),
            fixture: FixtureInfo::from(&fixture),
        }),
        other => Err(unexpected_outcome(&other)),
    }
}

/// Removes the fixture for a week and releases its officials.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no fixture is scheduled that week.
pub fn unschedule_match(
    registry: &mut ScheduleRegistry,
    week: u8,
) -> Result<UnscheduleMatchResponse, ApiError> {
    let command: Command = Command::UnscheduleMatch {
        week: Week::new(week),
    };

    match apply(registry, command)? {
        Outcome::MatchUnscheduled(fixture) => Ok(UnscheduleMatchResponse {
            message: format!("Week {} removed", fixture.week()),
            fixture: FixtureInfo::from(&fixture),
        }),
        other => Err(unexpected_outcome(&other)),
    }
}
