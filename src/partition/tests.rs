//! Tests for partition module

use super::*;
use crate::types::MissingDatePolicy;
use crate::Error;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn pinned() -> FixedClock {
    FixedClock(ymd(2030, 6, 15))
}

// ============================================================================
// Date Stamp Tests
// ============================================================================

#[test_case("salesforce-data/2024-01-05T120000/", 2024, 1, 5 ; "typical batch folder")]
#[test_case("ds/run=2023-12-31T23:59:59Z/", 2023, 12, 31 ; "iso timestamp")]
#[test_case("ds/2024-02-29T000000/", 2024, 2, 29 ; "leap day")]
#[test_case("ds/2021-03-04T1/2022-05-06T2/", 2021, 3, 4 ; "first stamp wins")]
#[test_case("ds/x2019-07-08Ty/", 2019, 7, 8 ; "embedded stamp")]
fn test_extract_stamped_date(path: &str, y: i32, m: u32, d: u32) {
    let date = extract_process_date(path, &pinned(), MissingDatePolicy::Today).unwrap();
    assert_eq!(date, ymd(y, m, d));
}

#[test_case("salesforce-data/latest/" ; "no date at all")]
#[test_case("ds/2024-01-05/" ; "date without T")]
#[test_case("ds/2024-1-5T000000/" ; "unpadded date")]
#[test_case("ds/20240105T000000/" ; "compact date")]
#[test_case("" ; "empty path")]
fn test_fallback_to_clock(path: &str) {
    let date = extract_process_date(path, &pinned(), MissingDatePolicy::Today).unwrap();
    assert_eq!(date, ymd(2030, 6, 15));
}

#[test]
fn test_missing_date_fail_policy() {
    let err = extract_process_date("ds/latest/", &pinned(), MissingDatePolicy::Fail).unwrap_err();
    assert!(matches!(err, Error::MissingProcessDate { ref path } if path == "ds/latest/"));
}

#[test]
fn test_fail_policy_still_accepts_stamps() {
    let date =
        extract_process_date("ds/2024-01-05T1/", &pinned(), MissingDatePolicy::Fail).unwrap();
    assert_eq!(date, ymd(2024, 1, 5));
}

#[test_case("ds/2024-13-01T000000/" ; "month out of range")]
#[test_case("ds/2023-02-29T000000/" ; "not a leap year")]
#[test_case("ds/2024-04-31T000000/" ; "day out of range")]
#[test_case("ds/0000-01-05T000000/" ; "year zero")]
fn test_invalid_calendar_date(path: &str) {
    let err = extract_process_date(path, &pinned(), MissingDatePolicy::Today).unwrap_err();
    assert!(matches!(err, Error::InvalidProcessDate { .. }));
}

#[test]
fn test_find_date_stamp() {
    assert_eq!(find_date_stamp("a/2024-01-05T1/"), Some("2024-01-05"));
    assert_eq!(find_date_stamp("a/2024-01-05/"), None);
}

#[test]
fn test_system_clock_is_today() {
    let today = chrono::Local::now().date_naive();
    let clock_date = SystemClock.today();
    // tolerate a midnight rollover between the two reads
    assert!(clock_date == today || clock_date == today.succ_opt().unwrap());
}

// ============================================================================
// CuratedPartition Tests
// ============================================================================

#[test]
fn test_salesforce_destination_path() {
    let partition = CuratedPartition::new(
        "curated-bc",
        "bc-curatedzone-sf",
        "salesforce-data-cleaned",
        ymd(2024, 1, 5),
    );
    assert_eq!(
        partition.path(),
        "curated-bc/bc-curatedzone-sf/salesforce-data-cleaned/year=2024/month=01/day=05/"
    );
    assert_eq!(partition.to_string(), partition.path());
}

#[test]
fn test_partition_key_and_file_key() {
    let partition = CuratedPartition::new("b", "zone/", "ds-cleaned", ymd(2023, 11, 30));
    assert_eq!(partition.key(), "zone/ds-cleaned/year=2023/month=11/day=30/");
    assert_eq!(
        partition.file_key("part-00000.parquet"),
        "zone/ds-cleaned/year=2023/month=11/day=30/part-00000.parquet"
    );
}

#[test]
fn test_partition_without_prefix() {
    let partition = CuratedPartition::new("b", "", "ds-cleaned", ymd(2024, 7, 1));
    assert_eq!(partition.key(), "ds-cleaned/year=2024/month=07/day=01/");
    assert_eq!(partition.path(), "b/ds-cleaned/year=2024/month=07/day=01/");
}

#[test]
fn test_date_segments_padding() {
    let partition = CuratedPartition::new("b", "p", "s", ymd(999, 1, 2));
    assert_eq!(partition.date_segments(), "year=999/month=01/day=02");
}
