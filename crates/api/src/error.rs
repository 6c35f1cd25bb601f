// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use ref_alloc::CoreError;
use ref_alloc_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A record line does not have the expected layout.
    InvalidRecordFormat {
        /// Why the record was rejected.
        reason: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidRecordFormat { reason } => write!(f, "Invalid record: {reason}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Errors raised while decoding a single whitespace-separated record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The record ended before this field.
    #[error("Missing field '{field}'")]
    MissingField { field: &'static str },

    /// The record has more fields than the layout allows.
    #[error("Unexpected trailing field '{value}'")]
    TrailingField { value: String },

    /// The assignment count is not a non-negative integer.
    #[error("Invalid assignment count '{value}'")]
    InvalidCount { value: String },

    /// The week is not an integer in range for a week number.
    #[error("Invalid week '{value}'")]
    InvalidWeek { value: String },

    /// A field was well-formed but rejected by the domain.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Domain(domain_err) => translate_domain_error(domain_err),
            other => Self::InvalidRecordFormat {
                reason: other.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    let rule = |rule: &str| ApiError::DomainRuleViolation {
        rule: String::from(rule),
        message: message.clone(),
    };
    let field = |field: &str| ApiError::InvalidInput {
        field: String::from(field),
        message: message.clone(),
    };
    let not_found = |resource_type: &str| ApiError::ResourceNotFound {
        resource_type: String::from(resource_type),
        message: message.clone(),
    };

    match err {
        DomainError::CapacityExceeded { .. } => rule("registry_capacity"),
        DomainError::DuplicateOfficialId(_) => rule("unique_official_id"),
        DomainError::OfficialAssigned { .. } => rule("unassigned_before_removal"),
        DomainError::HomeRegionUnavailable { .. } => rule("home_region_availability"),
        DomainError::DuplicateWeek(_) => rule("one_fixture_per_week"),
        DomainError::InsufficientOfficials { .. } => rule("officials_per_match"),
        DomainError::AssignmentUnderflow(_) => rule("non_negative_assignments"),
        DomainError::AssignmentOverflow(_) => rule("assignment_capacity"),
        DomainError::OfficialNotFound(_) => not_found("Official"),
        DomainError::FixtureNotFound(_) => not_found("Fixture"),
        DomainError::InvalidWeek { .. } => field("week"),
        DomainError::InvalidName(_) => field("name"),
        DomainError::InvalidRegion(_) => field("region"),
        DomainError::InvalidLevel(_) => field("level"),
        DomainError::InvalidAvailabilityCode(_) => field("availability"),
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}
