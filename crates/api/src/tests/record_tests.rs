// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for official records and fixture requests.

use ref_alloc_domain::{DomainError, MatchLevel, Official, Region, Week};

use crate::{
    FixtureRequest, RecordError, encode_official_record, parse_fixture_request,
    parse_official_record,
};

#[test]
fn test_parse_official_record() {
    let official: Official = parse_official_record("JS1 John Smith NJB2 3 North YNY").unwrap();

    assert_eq!(official.id().value(), "JS1");
    assert_eq!(official.first_name(), "John");
    assert_eq!(official.surname(), "Smith");
    assert_eq!(official.qualification().code(), "NJB2");
    assert_eq!(official.assignments(), 3);
    assert_eq!(official.home(), Region::North);
    assert!(official.availability().is_available_in(Region::North));
    assert!(!official.availability().is_available_in(Region::Central));
    assert!(official.availability().is_available_in(Region::South));
}

#[test]
fn test_parse_official_record_tolerates_repeated_spaces() {
    let official: Official =
        parse_official_record("  MK1   Mary King IJB3 0  Central YYY ").unwrap();
    assert_eq!(official.full_name(), "Mary King");
    assert_eq!(official.home(), Region::Central);
}

#[test]
fn test_parse_official_record_reports_first_missing_field() {
    let result: Result<Official, RecordError> = parse_official_record("JS1 John Smith NJB2");
    assert_eq!(
        result,
        Err(RecordError::MissingField {
            field: "assignments"
        })
    );

    let result: Result<Official, RecordError> = parse_official_record("");
    assert_eq!(result, Err(RecordError::MissingField { field: "id" }));
}

#[test]
fn test_parse_official_record_rejects_trailing_field() {
    let result: Result<Official, RecordError> =
        parse_official_record("JS1 John Smith NJB2 3 North YNN extra");
    assert_eq!(
        result,
        Err(RecordError::TrailingField {
            value: String::from("extra")
        })
    );
}

#[test]
fn test_parse_official_record_rejects_bad_count() {
    let result: Result<Official, RecordError> =
        parse_official_record("JS1 John Smith NJB2 -1 North YNN");
    assert_eq!(
        result,
        Err(RecordError::InvalidCount {
            value: String::from("-1")
        })
    );
}

#[test]
fn test_parse_official_record_rejects_bad_region_and_code() {
    let result: Result<Official, RecordError> =
        parse_official_record("JS1 John Smith NJB2 3 East YNN");
    assert_eq!(
        result,
        Err(RecordError::Domain(DomainError::InvalidRegion(String::from(
            "East"
        ))))
    );

    let result: Result<Official, RecordError> =
        parse_official_record("JS1 John Smith NJB2 3 North YNX");
    assert_eq!(
        result,
        Err(RecordError::Domain(DomainError::InvalidAvailabilityCode(
            String::from("YNX")
        )))
    );
}

#[test]
fn test_encode_official_record_is_read_back_unchanged() {
    let line: &str = "PW1 Peter Walsh NJB4 2 South NYY";
    let official: Official = parse_official_record(line).unwrap();

    assert_eq!(encode_official_record(&official), line);
}

#[test]
fn test_parse_fixture_request() {
    let request: FixtureRequest = parse_fixture_request("3 Central Senior").unwrap();
    assert_eq!(
        request,
        FixtureRequest {
            week: Week::new(3),
            venue: Region::Central,
            level: MatchLevel::Senior,
        }
    );
}

#[test]
fn test_parse_fixture_request_errors() {
    assert_eq!(
        parse_fixture_request("3 Central"),
        Err(RecordError::MissingField { field: "level" })
    );
    assert_eq!(
        parse_fixture_request("three Central Senior"),
        Err(RecordError::InvalidWeek {
            value: String::from("three")
        })
    );
    assert_eq!(
        parse_fixture_request("300 Central Senior"),
        Err(RecordError::InvalidWeek {
            value: String::from("300")
        })
    );
    assert_eq!(
        parse_fixture_request("3 Central Senior Junior"),
        Err(RecordError::TrailingField {
            value: String::from("Junior")
        })
    );
    assert_eq!(
        parse_fixture_request("3 Central Adult"),
        Err(RecordError::Domain(DomainError::InvalidLevel(String::from(
            "Adult"
        ))))
    );
}
