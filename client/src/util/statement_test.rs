use super::*;
use time::macros::date;

fn row(stamp: &str) -> Transaction {
    Transaction { date: Some(stamp.to_owned()), ..Transaction::default() }
}

fn stamps(rows: &[Transaction]) -> Vec<&str> {
    rows.iter().filter_map(|r| r.timestamp()).collect()
}

#[test]
fn parse_bound_accepts_iso_dates_and_blank_means_unset() {
    assert_eq!(parse_bound("2024-03-07"), Some(date!(2024 - 03 - 07)));
    assert_eq!(parse_bound("  "), None);
    assert_eq!(parse_bound("07/03/2024"), None);
}

#[test]
fn no_bounds_is_identity_including_unparseable_rows() {
    let rows = vec![row("2024-01-01T10:00:00"), row("not a date")];
    let filtered = filter_by_date_range(&rows, None, None);
    assert_eq!(filtered, rows);
}

#[test]
fn bounds_are_inclusive_whole_days() {
    let rows = vec![
        row("2024-03-01T00:00:00"),
        row("2024-03-05T23:59:59"),
        row("2024-03-06T00:00:01"),
        row("2024-02-29T23:59:59"),
    ];
    let filtered = filter_by_date_range(&rows, Some(date!(2024 - 03 - 01)), Some(date!(2024 - 03 - 05)));
    assert_eq!(stamps(&filtered), vec!["2024-03-01T00:00:00", "2024-03-05T23:59:59"]);
}

#[test]
fn single_sided_bounds() {
    let rows = vec![row("2024-01-15"), row("2024-06-15"), row("2024-12-15")];

    let from_only = filter_by_date_range(&rows, Some(date!(2024 - 06 - 01)), None);
    assert_eq!(stamps(&from_only), vec!["2024-06-15", "2024-12-15"]);

    let to_only = filter_by_date_range(&rows, None, Some(date!(2024 - 06 - 30)));
    assert_eq!(stamps(&to_only), vec!["2024-01-15", "2024-06-15"]);
}

#[test]
fn unparseable_rows_are_excluded_once_any_bound_is_set() {
    let rows = vec![row("2024-03-02"), row("garbage")];
    let filtered = filter_by_date_range(&rows, Some(date!(2024 - 03 - 01)), None);
    assert_eq!(stamps(&filtered), vec!["2024-03-02"]);
}

#[test]
fn bare_date_rows_fall_on_their_own_day() {
    // A bare date parses to midnight UTC, so it belongs to exactly that day.
    let rows = vec![row("2024-03-05")];
    assert_eq!(filter_by_date_range(&rows, Some(date!(2024 - 03 - 05)), Some(date!(2024 - 03 - 05))).len(), 1);
    assert!(filter_by_date_range(&rows, Some(date!(2024 - 03 - 06)), None).is_empty());
}
