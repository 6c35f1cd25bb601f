// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod official_id;
mod ranking;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use official_id::{generate_official_id, split_full_name};
pub use ranking::{
    Candidate, RegionalGroups, compare_by_assignments, compare_by_id, compose_by_proximity,
    filter_eligible, partition_by_home, rank_by_fairness, rank_candidates,
};

// Re-export public types
pub use error::DomainError;
pub use types::{
    Availability, Fixture, MatchLevel, Official, OfficialId, Qualification, Region, Week,
};
pub use validation::{validate_home_availability, validate_official_id_unique, validate_week};
