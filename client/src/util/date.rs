//! Completion date formatting for certificates.
//!
//! Dates render in the US long form, e.g. `March 5, 2024`. The browser clock
//! is only read under `hydrate`; server rendering has no date and the page
//! fills it in once hydrated.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::{Date, Month};

/// Format a calendar date as `Month D, YYYY`. `month` is 1-based.
///
/// Returns `None` for dates that do not exist.
pub fn format_long_date(year: i32, month: u32, day: u32) -> Option<String> {
    let month = Month::try_from(u8::try_from(month).ok()?).ok()?;
    let date = Date::from_calendar_date(year, month, u8::try_from(day).ok()?).ok()?;
    Some(format!("{} {}, {}", date.month(), date.day(), date.year()))
}

/// Today's date in the browser's local time zone.
pub fn today() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).ok()?;
        format_long_date(year, now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
