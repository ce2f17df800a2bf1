// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display formatting for times and human-relative durations.

use chrono::{Datelike, Months, NaiveDateTime};

/// Clock time, e.g. `09:15`.
pub const TIME_FORMAT: &str = "%H:%M";
/// Full date, e.g. `02 Mar, 2026`.
pub const DATE_FORMAT: &str = "%d %b, %Y";
/// Day and month, e.g. `02 Mar`.
pub const SHORT_DATE_FORMAT: &str = "%d %b";

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_TWO_AND_A_HALF_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

#[must_use]
pub fn format_time(at: NaiveDateTime) -> String {
    at.format(TIME_FORMAT).to_string()
}

#[must_use]
pub fn format_date(at: NaiveDateTime) -> String {
    at.format(DATE_FORMAT).to_string()
}

#[must_use]
pub fn format_short_date(at: NaiveDateTime) -> String {
    at.format(SHORT_DATE_FORMAT).to_string()
}

/// Describes the distance between two instants in words.
///
/// Minutes are rounded from seconds. Breakpoints:
///
/// ```text
/// < 1 minute      less than a minute
/// 1 minute        1 minute
/// < 45 minutes    N minutes
/// < 90 minutes    about 1 hour
/// < 24 hours      about N hours
/// < 42 hours      1 day
/// < 30 days       N days
/// < 60 days       about N months (N rounded from 30-day months)
/// < 12 months     N months
/// otherwise       about / over / almost N years
/// ```
///
/// The year wording depends on the whole calendar months past the last full
/// year: under 3 is "about", under 9 is "over", and 9 or more is "almost"
/// the next year.
///
/// With `add_suffix`, a `target` after `base` reads "in ..." and a `target`
/// before `base` reads "... ago".
#[must_use]
pub fn format_distance(target: NaiveDateTime, base: NaiveDateTime, add_suffix: bool) -> String {
    let seconds: i64 = (target - base).num_seconds();
    let minutes: i64 = (seconds.abs() + 30) / 60;

    let text: String = if minutes < 1 {
        String::from("less than a minute")
    } else if minutes == 1 {
        String::from("1 minute")
    } else if minutes < 45 {
        format!("{minutes} minutes")
    } else if minutes < 90 {
        String::from("about 1 hour")
    } else if minutes < MINUTES_IN_DAY {
        let hours: i64 = rounded_div(minutes, MINUTES_IN_HOUR);
        format!("about {hours} hours")
    } else if minutes < MINUTES_IN_TWO_AND_A_HALF_DAYS {
        String::from("1 day")
    } else if minutes < MINUTES_IN_MONTH {
        let days: i64 = rounded_div(minutes, MINUTES_IN_DAY);
        format!("{days} days")
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        let months: i64 = rounded_div(minutes, MINUTES_IN_MONTH);
        plural(months, "about 1 month", "about", "months")
    } else {
        let (earlier, later): (NaiveDateTime, NaiveDateTime) = if target < base {
            (target, base)
        } else {
            (base, target)
        };
        let months: u32 = whole_months_between(earlier, later);

        if months < 12 {
            let nearest: i64 = rounded_div(minutes, MINUTES_IN_MONTH).max(1);
            plural(nearest, "1 month", "", "months")
        } else {
            let years: i64 = i64::from(months / 12);
            match months % 12 {
                0..=2 => plural(years, "about 1 year", "about", "years"),
                3..=8 => plural(years, "over 1 year", "over", "years"),
                _ => format!("almost {} years", years + 1),
            }
        }
    };

    if !add_suffix {
        return text;
    }

    if seconds > 0 {
        format!("in {text}")
    } else {
        format!("{text} ago")
    }
}

/// Division rounding half up, for non-negative operands.
const fn rounded_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

fn plural(count: i64, one: &str, prefix: &str, unit: &str) -> String {
    if count == 1 {
        one.to_string()
    } else if prefix.is_empty() {
        format!("{count} {unit}")
    } else {
        format!("{prefix} {count} {unit}")
    }
}

/// Full calendar months from `earlier` to `later`.
///
/// A month only counts once `later` has reached the same day and time of
/// day; shorter months clamp to their last day.
fn whole_months_between(earlier: NaiveDateTime, later: NaiveDateTime) -> u32 {
    let calendar: i64 = (i64::from(later.year()) - i64::from(earlier.year())) * 12
        + i64::from(later.month0())
        - i64::from(earlier.month0());
    let Ok(mut months) = u32::try_from(calendar) else {
        return 0;
    };

    let reached = |count: u32| {
        later
            .checked_sub_months(Months::new(count))
            .is_some_and(|shifted| shifted >= earlier)
    };
    while months > 0 && !reached(months) {
        months -= 1;
    }
    months
}
