// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whitespace-separated record formats.
//!
//! An official record is
//! `id first_name surname qualification assignments home availability`,
//! for example `JS1 John Smith NJB2 0 North YNN`. A fixture request is
//! `week venue level`, for example `3 Central Senior`.

use crate::error::RecordError;
use ref_alloc_domain::{Availability, MatchLevel, Official, OfficialId, Qualification, Region, Week};

/// Field names of an official record, in order.
const OFFICIAL_FIELDS: [&str; 7] = [
    "id",
    "first_name",
    "surname",
    "qualification",
    "assignments",
    "home",
    "availability",
];

/// Field names of a fixture request, in order.
const FIXTURE_FIELDS: [&str; 3] = ["week", "venue", "level"];

/// A request to schedule one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureRequest {
    /// The week to play in.
    pub week: Week,
    /// The region the match is played in.
    pub venue: Region,
    /// The level of play.
    pub level: MatchLevel,
}

/// Names the first field a short record is missing.
fn missing_field(layout: &[&'static str], present: usize) -> RecordError {
    RecordError::MissingField {
        field: layout.get(present).copied().unwrap_or("record"),
    }
}

/// Parses one official record line.
///
/// # Errors
///
/// Returns an error if the line does not have exactly seven fields, the
/// assignment count is not a non-negative integer, or the home region or
/// availability code is invalid.
pub fn parse_official_record(line: &str) -> Result<Official, RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    decode_official_fields(&fields)
}

/// Decodes an official from an already-split record.
///
/// # Errors
///
/// See [`parse_official_record`].
pub fn decode_official_fields(fields: &[&str]) -> Result<Official, RecordError> {
    match fields {
        [id, first_name, surname, qualification, assignments, home, availability] => {
            let assignments: u32 = assignments.parse().map_err(|_| RecordError::InvalidCount {
                value: (*assignments).to_string(),
            })?;
            let home: Region = home.parse()?;
            let availability: Availability = Availability::from_code(availability)?;

            Ok(Official::new(
                OfficialId::new(id),
                (*first_name).to_string(),
                (*surname).to_string(),
                Qualification::new(qualification),
                assignments,
                home,
                availability,
            ))
        }
        [_, _, _, _, _, _, _, extra, ..] => Err(RecordError::TrailingField {
            value: (*extra).to_string(),
        }),
        short => Err(missing_field(&OFFICIAL_FIELDS, short.len())),
    }
}

/// Encodes an official in the record layout [`parse_official_record`] reads.
#[must_use]
pub fn encode_official_record(official: &Official) -> String {
    format!(
        "{} {} {} {} {} {} {}",
        official.id(),
        official.first_name(),
        official.surname(),
        official.qualification(),
        official.assignments(),
        official.home(),
        official.availability().code()
    )
}

/// Parses one fixture request line.
///
/// # Errors
///
/// Returns an error if the line does not have exactly three fields or a field
/// cannot be parsed.
pub fn parse_fixture_request(line: &str) -> Result<FixtureRequest, RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    decode_fixture_fields(&fields)
}

/// Decodes a fixture request from an already-split record.
///
/// The week is only checked to be a number here; the season range is
/// enforced when the match is scheduled.
///
/// # Errors
///
/// See [`parse_fixture_request`].
pub fn decode_fixture_fields(fields: &[&str]) -> Result<FixtureRequest, RecordError> {
    match fields {
        [week, venue, level] => {
            let week: u8 = week.parse().map_err(|_| RecordError::InvalidWeek {
                value: (*week).to_string(),
            })?;
            Ok(FixtureRequest {
                week: Week::new(week),
                venue: venue.parse()?,
                level: level.parse()?,
            })
        }
        [_, _, _, extra, ..] => Err(RecordError::TrailingField {
            value: (*extra).to_string(),
        }),
        short => Err(missing_field(&FIXTURE_FIELDS, short.len())),
    }
}
