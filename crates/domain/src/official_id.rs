// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Official, OfficialId};

/// Splits a full name into first name and surname.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` unless the name has exactly two
/// whitespace-separated parts.
pub fn split_full_name(full_name: &str) -> Result<(&str, &str), DomainError> {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    match parts.as_slice() {
        [first_name, surname] => Ok((first_name, surname)),
        _ => Err(DomainError::InvalidName(format!(
            "'{full_name}' must be a first name and a surname"
        ))),
    }
}

/// Uppercased first character of a name part.
fn initial(part: &str) -> Option<char> {
    part.chars().next().and_then(|c| c.to_uppercase().next())
}

/// Derives the identifier for a new official from their full name.
///
/// The identifier is the uppercased initials followed by a sequence number
/// that starts at 1 and counts up once for every existing official whose
/// identifier begins with the same initials. The result is distinct from the
/// identifiers present at the time of the call only; callers registering
/// several officials must generate each identifier after the previous
/// registration.
///
/// # Arguments
///
/// * `full_name` - The proposed name, `"First Surname"`
/// * `existing` - The officials currently registered
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name cannot be split into a
/// first name and surname.
pub fn generate_official_id(
    full_name: &str,
    existing: &[Official],
) -> Result<OfficialId, DomainError> {
    let (first_name, surname) = split_full_name(full_name)?;
    let (Some(first), Some(second)) = (initial(first_name), initial(surname)) else {
        return Err(DomainError::InvalidName(format!(
            "'{full_name}' has no initials"
        )));
    };

    let collisions: usize = existing
        .iter()
        .filter(|official| official.id().has_initials(first, second))
        .count();

    Ok(OfficialId::new(&format!("{first}{second}{}", collisions + 1)))
}
