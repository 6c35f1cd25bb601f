// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use ref_alloc::{RegistryLimits, ScheduleRegistry};

use crate::{LoadReport, RegisterOfficialRequest, load_officials};

/// A small officials file covering every region.
pub const OFFICIALS_FILE: &str = "\
JS1 John Smith NJB2 3 North YNN
JS2 Jane Smith NJB1 1 North YYN
MK1 Mary King IJB3 0 Central YYY
PW1 Peter Walsh NJB4 2 South NYY
";

pub fn create_test_registry() -> ScheduleRegistry {
    ScheduleRegistry::new()
}

pub fn create_loaded_registry() -> ScheduleRegistry {
    let mut registry: ScheduleRegistry = create_test_registry();
    let report: LoadReport = load_officials(OFFICIALS_FILE, &mut registry);
    assert!(report.failures.is_empty(), "{:?}", report.failures);
    registry
}

pub fn create_small_registry(max_officials: usize) -> ScheduleRegistry {
    ScheduleRegistry::with_limits(RegistryLimits::new(max_officials, 52))
}

pub fn create_valid_request() -> RegisterOfficialRequest {
    RegisterOfficialRequest {
        name: String::from("Alan Brown"),
        qualification: String::from("NJB2"),
        home: String::from("Central"),
        availability: String::from("NYN"),
        assignments: String::from("0"),
    }
}
