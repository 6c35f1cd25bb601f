// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Candidate ranking for match allocation.
//!
//! Officials are filtered by eligibility, grouped by home region, ranked by
//! fairness within each group and finally composed into a single sequence
//! ordered by proximity to the venue. Every function here is pure.

use crate::types::{MatchLevel, Official, Region};
use std::cmp::Ordering;

/// An eligible official together with their position in the registry.
///
/// The position breaks fairness ties when officials from different regions
/// compete for the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Zero-based position of the official in registry order.
    pub position: usize,
    /// The official.
    pub official: &'a Official,
}

/// Eligible officials grouped by home region.
///
/// Each group preserves the relative order it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionalGroups<'a> {
    /// Officials based in the North.
    pub north: Vec<Candidate<'a>>,
    /// Officials based in the Central region.
    pub central: Vec<Candidate<'a>>,
    /// Officials based in the South.
    pub south: Vec<Candidate<'a>>,
}

impl RegionalGroups<'_> {
    /// Total number of officials across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.north.len() + self.central.len() + self.south.len()
    }

    /// Returns whether every group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns the officials qualified for `level` and available at `venue`.
///
/// Registry order is preserved.
#[must_use]
pub fn filter_eligible(
    officials: &[Official],
    level: MatchLevel,
    venue: Region,
) -> Vec<Candidate<'_>> {
    officials
        .iter()
        .enumerate()
        .filter(|(_, official)| official.is_eligible_for(level, venue))
        .map(|(position, official)| Candidate { position, official })
        .collect()
}

/// Splits candidates into disjoint groups by home region.
#[must_use]
pub fn partition_by_home<'a>(candidates: &[Candidate<'a>]) -> RegionalGroups<'a> {
    let mut groups: RegionalGroups<'a> = RegionalGroups::default();
    for &candidate in candidates {
        match candidate.official.home() {
            Region::North => groups.north.push(candidate),
            Region::Central => groups.central.push(candidate),
            Region::South => groups.south.push(candidate),
        }
    }
    groups
}

/// Orders two officials by ascending assignment count.
#[must_use]
pub fn compare_by_assignments(a: &Official, b: &Official) -> Ordering {
    a.assignments().cmp(&b.assignments())
}

/// Orders two officials by plain lexicographic comparison of their identifiers.
#[must_use]
pub fn compare_by_id(a: &Official, b: &Official) -> Ordering {
    a.id().value().cmp(b.id().value())
}

/// Sorts candidates by ascending assignment count.
///
/// The sort is stable: candidates with equal counts keep their input order.
#[must_use]
pub fn rank_by_fairness(mut candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    candidates.sort_by(|a, b| compare_by_assignments(a.official, b.official));
    candidates
}

/// Flattens ranked regional groups into one sequence ordered by proximity.
///
/// - North venue: North, Central, South.
/// - South venue: South, Central, North.
/// - Central venue: Central first, then North and South officials competing
///   together on fairness alone, equal counts falling back to registry order.
#[must_use]
pub fn compose_by_proximity(groups: RegionalGroups<'_>, venue: Region) -> Vec<Candidate<'_>> {
    let RegionalGroups {
        north,
        central,
        south,
    } = groups;

    match venue {
        Region::North => [north, central, south].concat(),
        Region::South => [south, central, north].concat(),
        Region::Central => {
            let mut remote: Vec<Candidate<'_>> = [north, south].concat();
            remote.sort_by(|a, b| {
                compare_by_assignments(a.official, b.official)
                    .then_with(|| a.position.cmp(&b.position))
            });
            [central, remote].concat()
        }
    }
}

/// Returns the eligible officials for a match, best candidate first.
///
/// This is the full ranking pipeline: eligibility, regional grouping, fairness
/// within each group, then proximity composition.
#[must_use]
pub fn rank_candidates(officials: &[Official], venue: Region, level: MatchLevel) -> Vec<&Official> {
    let eligible: Vec<Candidate<'_>> = filter_eligible(officials, level, venue);
    let groups: RegionalGroups<'_> = partition_by_home(&eligible);
    let ranked: RegionalGroups<'_> = RegionalGroups {
        north: rank_by_fairness(groups.north),
        central: rank_by_fairness(groups.central),
        south: rank_by_fairness(groups.south),
    };
    compose_by_proximity(ranked, venue)
        .into_iter()
        .map(|candidate| candidate.official)
        .collect()
}
