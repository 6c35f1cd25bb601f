// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text and JSON reports over the registry.

use crate::error::ApiError;
use crate::records::encode_official_record;
use crate::request_response::{AllocationCount, RegistrySnapshot};
use ref_alloc::ScheduleRegistry;
use ref_alloc_domain::{Fixture, Official, OfficialId, Region};

/// Width of the officials table border.
const TABLE_WIDTH: usize = 95;

/// Renders one officials-file record per official, in registry order.
///
/// The output can be loaded again with
/// [`load_officials`](crate::import::load_officials).
#[must_use]
pub fn officials_report(registry: &ScheduleRegistry) -> String {
    let mut report: String = String::new();
    for official in registry.officials() {
        report.push_str(&encode_official_record(official));
        report.push('\n');
    }
    report
}

/// Full name of the official with this identifier, or the identifier itself.
fn display_name(registry: &ScheduleRegistry, id: &OfficialId) -> String {
    registry
        .official_by_id(id)
        .map_or_else(|| id.value().to_string(), Official::full_name)
}

/// Renders one line per fixture, in scheduling order.
#[must_use]
pub fn fixtures_report(registry: &ScheduleRegistry) -> String {
    let mut report: String = String::new();
    for fixture in registry.fixtures() {
        report.push_str(&fixture_line(registry, fixture));
    }
    report
}

fn fixture_line(registry: &ScheduleRegistry, fixture: &Fixture) -> String {
    format!(
        " {:<10} {:<12} {:<12} {:<20} {:<20}\n",
        fixture.week().number(),
        fixture.level().as_str(),
        fixture.venue().as_str(),
        display_name(registry, fixture.referee_1()),
        display_name(registry, fixture.referee_2())
    )
}

/// `Y` or `N` for one region of an official's availability.
fn availability_flag(official: &Official, region: Region) -> &'static str {
    if official.availability().is_available_in(region) {
        "Y"
    } else {
        "N"
    }
}

/// Renders a fixed-width table of all officials, ordered by identifier.
#[must_use]
pub fn officials_table(registry: &ScheduleRegistry) -> String {
    let mut table: String = format!("{:>84}\n", "Availability");
    table.push_str(&format!(
        " {:<5}{:<13}{:<10}{:<15}{:<14}{:<8}{:>5}{:>11}{:>9}\n",
        "ID", "First Name", "Surname", "Qualification", "Allocations", "Home", "North",
        "Central", "South"
    ));
    table.push_str(&"=".repeat(TABLE_WIDTH));
    table.push('\n');

    for official in registry.officials_sorted_by_id() {
        table.push_str(&format!(
            " {:<7}{:<12}{:<14}{:<13}{:>4}{:>6}{:<7}{:>5}{:>10}{:>10}\n",
            official.id().value(),
            official.first_name(),
            official.surname(),
            official.qualification().code(),
            official.assignments(),
            "",
            official.home().as_str(),
            availability_flag(official, Region::North),
            availability_flag(official, Region::Central),
            availability_flag(official, Region::South)
        ));
    }
    table
}

/// Returns each official's assignment count, ordered by identifier.
#[must_use]
pub fn allocation_summary(registry: &ScheduleRegistry) -> Vec<AllocationCount> {
    registry
        .officials_sorted_by_id()
        .into_iter()
        .map(|official| AllocationCount {
            id: official.id().value().to_string(),
            assignments: official.assignments(),
        })
        .collect()
}

/// Serialises a snapshot of the registry as pretty-printed JSON.
///
/// # Errors
///
/// Returns `ApiError::Internal` if serialisation fails.
pub fn snapshot_json(registry: &ScheduleRegistry) -> Result<String, ApiError> {
    let snapshot: RegistrySnapshot = RegistrySnapshot::from(registry);
    serde_json::to_string_pretty(&snapshot).map_err(|e| ApiError::Internal {
        message: format!("Failed to serialise snapshot: {e}"),
    })
}
