// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ScheduleRegistry;
use ref_alloc_domain::{Availability, Official, OfficialId, Qualification, Region};

pub fn create_test_official(id: &str, home: Region, assignments: u32) -> Official {
    create_test_official_with(
        id,
        "NJB2",
        home,
        Availability::new(true, true, true),
        assignments,
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
        format!("First{id}"),
        format!("Last{id}"),
        Qualification::new(qualification),
        assignments,
        home,
        availability,
    )
}

pub fn create_test_registry(officials: Vec<Official>) -> ScheduleRegistry {
    let mut registry: ScheduleRegistry = ScheduleRegistry::new();
    for official in officials {
        registry.register_official(official).unwrap();
    }
    registry
}

pub fn assignments_of(registry: &ScheduleRegistry, id: &str) -> u32 {
    registry
        .official_by_id(&OfficialId::new(id))
        .unwrap()
        .assignments()
}

pub fn ids(officials: &[&Official]) -> Vec<String> {
    officials
        .iter()
        .map(|official| official.id().value().to_string())
        .collect()
}
