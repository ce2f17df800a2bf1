// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use flight_tracker_domain::{Airline, City, Flight, FlightStatus, FlightTimes};

pub fn create_test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

pub fn create_test_time(hour: u32, minute: u32) -> NaiveDateTime {
    create_test_date().and_hms_opt(hour, minute, 0).unwrap()
}

/// Builds a flight whose times agree with `status`, departing at
/// `departure` on a route of `duration_minutes`.
pub fn create_test_flight(
    status: FlightStatus,
    departure: NaiveDateTime,
    duration_minutes: i64,
    delay_minutes: u32,
) -> Flight {
    let scheduled_arrival: NaiveDateTime = departure + Duration::minutes(duration_minutes);
    let actual_departure: Option<NaiveDateTime> = status
        .has_departed()
        .then(|| departure + Duration::minutes(i64::from(delay_minutes)));
    let actual_arrival: Option<NaiveDateTime> = (status == FlightStatus::Landed)
        .then(|| actual_departure.unwrap() + Duration::minutes(duration_minutes));

    Flight::new(
        String::from("buddha-ktm-pkr-0"),
        String::from("BHA 482"),
        Some(Airline::new("buddha", "Buddha Air")),
        City::new("ktm", "Kathmandu"),
        City::new("pkr", "Pokhara"),
        status,
        FlightTimes {
            scheduled_departure: departure,
            scheduled_arrival,
            actual_departure,
            actual_arrival,
            delay_minutes,
        },
    )
}
