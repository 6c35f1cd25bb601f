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
mod handlers;
mod import;
mod records;
mod reports;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, RecordError, translate_core_error, translate_domain_error};
pub use handlers::{
    edit_official, find_official_by_name, register_named_official, remove_official,
    schedule_match, unschedule_match, validate_full_name,
};
pub use import::{LoadFailure, LoadReport, ScheduleReport, load_officials, schedule_requests};
pub use records::{
    FixtureRequest, decode_fixture_fields, decode_official_fields, encode_official_record,
    parse_fixture_request, parse_official_record,
};
pub use reports::{
    allocation_summary, fixtures_report, officials_report, officials_table, snapshot_json,
};
pub use request_response::{
    AllocationCount, EditOfficialRequest, EditOfficialResponse, FixtureInfo, OfficialInfo,
    RegisterOfficialRequest, RegisterOfficialResponse, RegistrySnapshot, RemoveOfficialResponse,
    ScheduleMatchResponse, UnscheduleMatchResponse,
};
