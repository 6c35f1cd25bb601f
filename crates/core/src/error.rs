// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ref_alloc_domain::DomainError;

/// Errors returned when the schedule registry refuses an operation.
///
/// Every refusal is a broken domain rule; the registry never partially
/// applies a refused operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The operation would break a domain rule.
    DomainViolation(DomainError),
}

impl CoreError {
    /// Returns the domain rule that caused the refusal.
    #[must_use]
    pub const fn domain_error(&self) -> &DomainError {
        match self {
            Self::DomainViolation(err) => err,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Registry refused the operation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.domain_error())
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
