// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presentation values derived from a flight and the current instant.
//!
//! Every function here is pure: the current time is always a parameter and
//! flights are never modified. Status is taken as given; nothing here moves
//! a flight from one status to another.

use crate::format::{format_date, format_distance, format_time};
use chrono::{Duration, NaiveDateTime};
use flight_tracker_domain::{Flight, FlightStatus};
use serde::{Deserialize, Serialize};

/// Remaining-time text once a departed flight is past its scheduled arrival.
pub const LANDING_SOON: &str = "Landing soon";

pub const SCHEDULED_DEPARTURE_LABEL: &str = "Scheduled Departure";
pub const DELAYED_DEPARTURE_LABEL: &str = "Delayed Departure";
pub const DEPARTED_LABEL: &str = "Departed";
pub const LANDED_LABEL: &str = "Landed";
pub const ESTIMATED_ARRIVAL_LABEL: &str = "Estimated Arrival";

/// Smallest flight window used as the progress divisor.
const MIN_PROGRESS_WINDOW_MS: i64 = 60_000;

/// A labelled time for the departure or arrival panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDisplay {
    /// Panel heading, e.g. "Delayed Departure".
    pub label: String,
    /// The instant being shown.
    pub time: NaiveDateTime,
    /// `time` as clock text.
    pub time_text: String,
    /// Secondary line: the date, or the original time for a delay.
    pub subtitle: String,
}

impl TimeDisplay {
    fn dated(label: &str, time: NaiveDateTime) -> Self {
        Self {
            label: label.to_string(),
            time,
            time_text: format_time(time),
            subtitle: format_date(time),
        }
    }
}

/// Derives the departure panel.
///
/// - Scheduled: the scheduled departure
/// - Delayed: the scheduled departure plus the delay, with the original time
///   as subtitle
/// - Departed or landed: the actual departure, falling back to scheduled
#[must_use]
pub fn derive_departure(flight: &Flight) -> TimeDisplay {
    match flight.status() {
        FlightStatus::Scheduled => {
            TimeDisplay::dated(SCHEDULED_DEPARTURE_LABEL, flight.scheduled_departure())
        }
        FlightStatus::Delayed => {
            let time: NaiveDateTime = flight.delayed_departure();
            TimeDisplay {
                label: DELAYED_DEPARTURE_LABEL.to_string(),
                time,
                time_text: format_time(time),
                subtitle: format!("Originally {}", format_time(flight.scheduled_departure())),
            }
        }
        FlightStatus::Departed | FlightStatus::Landed => {
            TimeDisplay::dated(DEPARTED_LABEL, flight.effective_departure())
        }
    }
}

/// Derives the arrival panel.
///
/// Landed flights show the actual arrival. Everything else shows an
/// estimate: the scheduled arrival, pushed back by the delay for delayed
/// flights.
#[must_use]
pub fn derive_arrival(flight: &Flight) -> TimeDisplay {
    match flight.status() {
        FlightStatus::Landed => TimeDisplay::dated(
            LANDED_LABEL,
            flight
                .actual_arrival()
                .unwrap_or_else(|| flight.scheduled_arrival()),
        ),
        FlightStatus::Delayed => TimeDisplay::dated(
            ESTIMATED_ARRIVAL_LABEL,
            flight.scheduled_arrival() + Duration::minutes(i64::from(flight.delay_minutes())),
        ),
        FlightStatus::Scheduled | FlightStatus::Departed => {
            TimeDisplay::dated(ESTIMATED_ARRIVAL_LABEL, flight.scheduled_arrival())
        }
    }
}

/// Time left until scheduled arrival, for flights in the air.
///
/// Returns `None` unless the flight has departed and not landed. Once `now`
/// is past the scheduled arrival the text is [`LANDING_SOON`].
#[must_use]
pub fn derive_remaining_time(flight: &Flight, now: NaiveDateTime) -> Option<String> {
    if flight.status() != FlightStatus::Departed {
        return None;
    }

    let arrival: NaiveDateTime = flight.scheduled_arrival();
    if now > arrival {
        return Some(LANDING_SOON.to_string());
    }

    Some(format_distance(arrival, now, true))
}

/// In-flight progress as a whole percentage.
///
/// Landed flights are at 100. Departed flights measure elapsed time since
/// the effective departure against the window up to scheduled arrival,
/// rounded down and clamped to `0..=100`. The window is never shorter than
/// one minute. Flights still on the ground return `None`.
#[must_use]
pub fn derive_progress(flight: &Flight, now: NaiveDateTime) -> Option<u8> {
    match flight.status() {
        FlightStatus::Landed => Some(100),
        FlightStatus::Departed => {
            let departure: NaiveDateTime = flight.effective_departure();
            let elapsed_ms: i64 = (now - departure).num_milliseconds();
            let window_ms: i64 = (flight.scheduled_arrival() - departure)
                .num_milliseconds()
                .max(MIN_PROGRESS_WINDOW_MS);

            let percent: i64 = elapsed_ms.saturating_mul(100).div_euclid(window_ms);
            Some(u8::try_from(percent.clamp(0, 100)).unwrap_or(100))
        }
        FlightStatus::Scheduled | FlightStatus::Delayed => None,
    }
}

/// Scheduled block time in words, e.g. "25 minutes".
#[must_use]
pub fn derive_duration_text(flight: &Flight) -> String {
    format_distance(flight.scheduled_arrival(), flight.scheduled_departure(), false)
}
