use super::*;

#[test]
fn formats_us_long_form() {
    assert_eq!(format_long_date(2024, 3, 5).as_deref(), Some("March 5, 2024"));
    assert_eq!(format_long_date(1999, 12, 31).as_deref(), Some("December 31, 1999"));
}

#[test]
fn day_is_not_zero_padded() {
    assert_eq!(format_long_date(2025, 1, 1).as_deref(), Some("January 1, 2025"));
}

#[test]
fn leap_day_only_in_leap_years() {
    assert_eq!(format_long_date(2024, 2, 29).as_deref(), Some("February 29, 2024"));
    assert!(format_long_date(2023, 2, 29).is_none());
    assert!(format_long_date(1900, 2, 29).is_none());
    assert!(format_long_date(2000, 2, 29).is_some());
}

#[test]
fn rejects_out_of_range_parts() {
    assert!(format_long_date(2024, 0, 1).is_none());
    assert!(format_long_date(2024, 13, 1).is_none());
    assert!(format_long_date(2024, 4, 31).is_none());
    assert!(format_long_date(2024, 5, 0).is_none());
    assert!(format_long_date(2024, 300, 1).is_none());
    assert!(format_long_date(2024, 1, 300).is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn today_is_unavailable_off_browser() {
    assert!(today().is_none());
}
