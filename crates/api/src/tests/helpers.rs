// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use flight_tracker::FlightGenerator;
use flight_tracker_domain::{Airline, City, Flight, FlightStatus, FlightTimes};
use rand::rngs::StdRng;

use crate::{FlightSession, SearchRequest};

pub fn create_test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

pub fn create_test_now() -> NaiveDateTime {
    create_test_date().and_hms_opt(12, 0, 0).unwrap()
}

pub fn create_test_request() -> SearchRequest {
    SearchRequest {
        from: String::from("ktm"),
        to: String::from("pkr"),
        date: create_test_date(),
        airline: String::from("buddha"),
    }
}

pub fn create_test_session(seed: u64) -> FlightSession<StdRng> {
    FlightSession::with_generator(FlightGenerator::seeded(seed))
}

pub fn create_departed_flight(departure: NaiveDateTime) -> Flight {
    Flight::new(
        String::from("yeti-ktm-bht-0"),
        String::from("YTA 311"),
        Some(Airline::new("yeti", "Yeti Airlines")),
        City::new("ktm", "Kathmandu"),
        City::new("bht", "Biratnagar"),
        FlightStatus::Departed,
        FlightTimes {
            scheduled_departure: departure,
            scheduled_arrival: departure + Duration::minutes(45),
            actual_departure: Some(departure),
            actual_arrival: None,
            delay_minutes: 0,
        },
    )
}
