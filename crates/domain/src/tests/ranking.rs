// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    candidate_ids, candidates, create_test_official, create_test_official_with, ids,
};
use crate::{
    Availability, Candidate, MatchLevel, Official, Region, RegionalGroups, compare_by_id,
    compose_by_proximity, filter_eligible, partition_by_home, rank_by_fairness, rank_candidates,
};
use std::cmp::Ordering;

#[test]
fn test_senior_filter_excludes_level_one() {
    let north: Availability = Availability::only(Region::North);
    let officials: Vec<Official> = vec![
        create_test_official_with("AA1", "NJB1", Region::North, north, 0),
        create_test_official_with("BB1", "NJB2", Region::North, north, 0),
        create_test_official_with("CC1", "IJB1", Region::North, north, 0),
    ];

    let senior: Vec<Candidate<'_>> =
        filter_eligible(&officials, MatchLevel::Senior, Region::North);
    assert_eq!(candidate_ids(&senior), vec!["BB1"]);
    assert_eq!(senior[0].position, 1);

    let junior: Vec<Candidate<'_>> =
        filter_eligible(&officials, MatchLevel::Junior, Region::North);
    assert_eq!(candidate_ids(&junior), vec!["AA1", "BB1", "CC1"]);
}

#[test]
fn test_filter_requires_exact_venue_availability() {
    let north_only: Availability = Availability::new(true, false, false);
    let central_south: Availability = Availability::new(false, true, true);
    let south_only: Availability = Availability::new(false, false, true);
    let officials: Vec<Official> = vec![
        create_test_official_with("AA1", "NJB2", Region::North, north_only, 0),
        create_test_official_with("BB1", "NJB2", Region::Central, central_south, 0),
        create_test_official_with("CC1", "NJB2", Region::South, south_only, 0),
    ];

    let central: Vec<Candidate<'_>> =
        filter_eligible(&officials, MatchLevel::Junior, Region::Central);
    assert_eq!(candidate_ids(&central), vec!["BB1"]);

    let south: Vec<Candidate<'_>> =
        filter_eligible(&officials, MatchLevel::Junior, Region::South);
    assert_eq!(candidate_ids(&south), vec!["BB1", "CC1"]);
}

#[test]
fn test_partition_preserves_order_within_region() {
    let officials: Vec<Official> = vec![
        create_test_official("N1", Region::North, 0),
        create_test_official("C1", Region::Central, 0),
        create_test_official("N2", Region::North, 0),
        create_test_official("S1", Region::South, 0),
        create_test_official("C2", Region::Central, 0),
    ];
    let groups: RegionalGroups<'_> = partition_by_home(&candidates(&officials));
    assert_eq!(candidate_ids(&groups.north), vec!["N1", "N2"]);
    assert_eq!(candidate_ids(&groups.central), vec!["C1", "C2"]);
    assert_eq!(candidate_ids(&groups.south), vec!["S1"]);
    assert_eq!(groups.len(), officials.len());
}

#[test]
fn test_rank_by_fairness_is_stable() {
    let officials: Vec<Official> = vec![
        create_test_official("A", Region::North, 2),
        create_test_official("B", Region::North, 1),
        create_test_official("C", Region::North, 2),
        create_test_official("D", Region::North, 1),
    ];

    let ranked: Vec<Candidate<'_>> = rank_by_fairness(candidates(&officials));
    assert_eq!(candidate_ids(&ranked), vec!["B", "D", "A", "C"]);
}

#[test]
fn test_compose_north_and_south_venues() {
    let officials: Vec<Official> = vec![
        create_test_official("N1", Region::North, 5),
        create_test_official("C1", Region::Central, 0),
        create_test_official("S1", Region::South, 1),
    ];
    let all: Vec<Candidate<'_>> = candidates(&officials);

    let north: Vec<Candidate<'_>> = compose_by_proximity(partition_by_home(&all), Region::North);
    assert_eq!(candidate_ids(&north), vec!["N1", "C1", "S1"]);

    let south: Vec<Candidate<'_>> = compose_by_proximity(partition_by_home(&all), Region::South);
    assert_eq!(candidate_ids(&south), vec!["S1", "C1", "N1"]);
}

#[test]
fn test_compose_central_reranks_north_and_south_together() {
    let officials: Vec<Official> = vec![
        create_test_official("N1", Region::North, 4),
        create_test_official("S1", Region::South, 1),
        create_test_official("C1", Region::Central, 9),
        create_test_official("N2", Region::North, 2),
    ];
    let composed: Vec<Candidate<'_>> =
        compose_by_proximity(partition_by_home(&candidates(&officials)), Region::Central);
    assert_eq!(candidate_ids(&composed), vec!["C1", "S1", "N2", "N1"]);
}

#[test]
fn test_central_venue_ties_keep_registry_order() {
    // South official registered before the North one, equal counts
    let officials: Vec<Official> = vec![
        create_test_official("S1", Region::South, 1),
        create_test_official("N1", Region::North, 1),
    ];

    let composed: Vec<&Official> = rank_candidates(&officials, Region::Central, MatchLevel::Junior);
    assert_eq!(ids(&composed), vec!["S1", "N1"]);

    let officials: Vec<Official> = vec![
        create_test_official("N1", Region::North, 1),
        create_test_official("S1", Region::South, 1),
    ];

    let composed: Vec<&Official> = rank_candidates(&officials, Region::Central, MatchLevel::Junior);
    assert_eq!(ids(&composed), vec!["N1", "S1"]);
}

#[test]
fn test_rank_candidates_worked_example() {
    let officials: Vec<Official> = vec![
        create_test_official("JS1", Region::North, 3),
        create_test_official("JS2", Region::North, 1),
        create_test_official("MK1", Region::Central, 0),
    ];

    let composed: Vec<&Official> = rank_candidates(&officials, Region::North, MatchLevel::Junior);
    assert_eq!(ids(&composed), vec!["JS2", "JS1", "MK1"]);
}

#[test]
fn test_rank_candidates_has_no_duplicates_or_gaps() {
    let officials: Vec<Official> = vec![
        create_test_official("A1", Region::North, 1),
        create_test_official("B1", Region::Central, 3),
        create_test_official("C1", Region::South, 0),
        create_test_official("D1", Region::North, 0),
        create_test_official("E1", Region::South, 2),
    ];

    for venue in Region::ALL {
        let composed: Vec<&Official> = rank_candidates(&officials, venue, MatchLevel::Junior);
        let mut sorted: Vec<String> = ids(&composed);
        sorted.sort();
        assert_eq!(sorted, vec!["A1", "B1", "C1", "D1", "E1"]);
    }
}

#[test]
fn test_rank_candidates_empty_registry() {
    let officials: Vec<Official> = Vec::new();
    assert!(rank_candidates(&officials, Region::South, MatchLevel::Senior).is_empty());
}

#[test]
fn test_compare_by_id_is_lexicographic() {
    let a: Official = create_test_official("AB2", Region::North, 0);
    let b: Official = create_test_official("AB10", Region::North, 0);
    let c: Official = create_test_official("AC1", Region::North, 0);

    assert_eq!(compare_by_id(&a, &b), Ordering::Greater);
    assert_eq!(compare_by_id(&a, &c), Ordering::Less);
    assert_eq!(compare_by_id(&a, &a.clone()), Ordering::Equal);
}
