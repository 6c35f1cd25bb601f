// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk loading of record files.
//!
//! Each line of the input is one record. Fields are separated by one or more
//! spaces; blank lines are skipped. A bad line is reported with its line
//! number and never stops the rest of the file from loading.

use csv::StringRecord;
use ref_alloc::{Command, ScheduleRegistry, apply};
use ref_alloc_domain::{Fixture, Official, OfficialId};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::handlers::schedule_match;
use crate::records::{FixtureRequest, decode_fixture_fields, decode_official_fields};

/// A record that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    /// The 1-based line number of the record.
    pub line: u64,
    /// Why the record was rejected.
    pub error: ApiError,
}

/// Result of loading an officials file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Identifiers of the officials registered, in file order.
    pub loaded: Vec<OfficialId>,
    /// Records that were rejected.
    pub failures: Vec<LoadFailure>,
}

/// Result of scheduling a batch of fixture requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleReport {
    /// Fixtures created, in file order.
    pub scheduled: Vec<Fixture>,
    /// Requests that were rejected.
    pub failures: Vec<LoadFailure>,
}

/// Builds a reader for space-separated, header-less records.
fn record_reader(input: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .quoting(false)
        .from_reader(input.as_bytes())
}

/// Non-empty fields of a record, splitting any that still hold whitespace.
fn record_fields(record: &StringRecord) -> Vec<&str> {
    record.iter().flat_map(str::split_whitespace).collect()
}

/// Reads every non-blank record and hands its fields to `handle`.
///
/// Records the reader cannot decode are reported as failures.
fn for_each_record<F>(input: &str, failures: &mut Vec<LoadFailure>, mut handle: F)
where
    F: FnMut(u64, &[&str]) -> Result<(), ApiError>,
{
    let mut reader = record_reader(input);

    for result in reader.records() {
        let record: StringRecord = match result {
            Ok(record) => record,
            Err(e) => {
                let line: u64 = e.position().map_or(0, csv::Position::line);
                warn!(line, error = %e, "Unreadable record");
                failures.push(LoadFailure {
                    line,
                    error: ApiError::InvalidRecordFormat {
                        reason: format!("Failed to read record: {e}"),
                    },
                });
                continue;
            }
        };

        let fields: Vec<&str> = record_fields(&record);
        if fields.is_empty() {
            continue;
        }

        let line: u64 = record.position().map_or(0, csv::Position::line);
        if let Err(error) = handle(line, &fields) {
            warn!(line, error = %error, "Skipped record");
            failures.push(LoadFailure { line, error });
        }
    }
}

/// Loads officials from a records file into the registry.
///
/// Every well-formed record is registered in file order. Once the registry
/// is full, the remaining records are reported as capacity failures.
///
/// # Arguments
///
/// * `input` - The file content
/// * `registry` - The registry to load into
///
/// # Returns
///
/// A `LoadReport` listing the registered identifiers and rejected lines.
pub fn load_officials(input: &str, registry: &mut ScheduleRegistry) -> LoadReport {
    let mut report: LoadReport = LoadReport::default();
    let mut loaded: Vec<OfficialId> = Vec::new();

    for_each_record(input, &mut report.failures, |line, fields| {
        let official: Official = decode_official_fields(fields)?;
        let id: OfficialId = official.id().clone();
        apply(registry, Command::RegisterOfficial { official })?;
        debug!(line, id = %id, "Loaded official");
        loaded.push(id);
        Ok(())
    });

    report.loaded = loaded;
    info!(
        loaded = report.loaded.len(),
        failed = report.failures.len(),
        "Loaded officials"
    );
    report
}

/// Schedules every fixture request in a requests file.
///
/// Requests are applied in file order, so earlier fixtures shape the
/// candidate ranking of later ones.
///
/// # Arguments
///
/// * `input` - The file content, one `week venue level` request per line
/// * `registry` - The registry to schedule into
///
/// # Returns
///
/// A `ScheduleReport` listing the created fixtures and rejected lines.
pub fn schedule_requests(input: &str, registry: &mut ScheduleRegistry) -> ScheduleReport {
    let mut report: ScheduleReport = ScheduleReport::default();
    let mut scheduled: Vec<Fixture> = Vec::new();

    for_each_record(input, &mut report.failures, |line, fields| {
        let request: FixtureRequest = decode_fixture_fields(fields)?;
        schedule_match(registry, request)?;
        if let Some(fixture) = registry.fixture_by_week(request.week) {
            debug!(line, week = %request.week, "Scheduled requested match");
            scheduled.push(fixture.clone());
        }
        Ok(())
    });

    report.scheduled = scheduled;
    info!(
        scheduled = report.scheduled.len(),
        failed = report.failures.len(),
        "Scheduled requested matches"
    );
    report
}
