// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Availability, Candidate, Official, OfficialId, Qualification, Region};

pub fn create_test_official(id: &str, home: Region, assignments: u32) -> Official {
    Official::new(
        OfficialId::new(id),
        String::from("Test"),
        String::from("Official"),
        Qualification::new("NJB2"),
        assignments,
        home,
        Availability::new(true, true, true),
    )
}

pub fn create_test_official_with(
    id: &str,
    qualification: &str,
    home: Region,
    availability: Availability,
    assignments: u32,
) -> Official {
    Official::new(
        OfficialId::new(id),
        String::from("Test"),
        String::from("Official"),
        Qualification::new(qualification),
        assignments,
        home,
        availability,
    )
}

pub fn ids(officials: &[&Official]) -> Vec<String> {
    officials
        .iter()
        .map(|official| official.id().value().to_string())
        .collect()
}

pub fn candidate_ids(candidates: &[Candidate<'_>]) -> Vec<String> {
    candidates
        .iter()
        .map(|candidate| candidate.official.id().value().to_string())
        .collect()
}

pub fn candidates(officials: &[Official]) -> Vec<Candidate<'_>> {
    officials
        .iter()
        .enumerate()
        .map(|(position, official)| Candidate { position, official })
        .collect()
}
