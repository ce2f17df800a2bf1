// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Airline, City, DomainError, Flight, FlightStatus, FlightTimes};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::str::FromStr;

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn create_test_flight(status: FlightStatus, delay_minutes: u32) -> Flight {
    let scheduled_departure: NaiveDateTime = at(9, 15);
    let actual_departure: Option<NaiveDateTime> = status
        .has_departed()
        .then(|| scheduled_departure + Duration::minutes(i64::from(delay_minutes)));
    Flight::new(
        String::from("buddha-ktm-pkr-0"),
        String::from("BHA 482"),
        Some(Airline::new("buddha", "Buddha Air")),
        City::new("ktm", "Kathmandu"),
        City::new("pkr", "Pokhara"),
        status,
        FlightTimes {
            scheduled_departure,
            scheduled_arrival: at(9, 40),
            actual_departure,
            actual_arrival: None,
            delay_minutes,
        },
    )
}

#[test]
fn test_status_round_trips_through_str() {
    for status in FlightStatus::ALL {
        assert_eq!(FlightStatus::from_str(status.as_str()).unwrap(), status);
        assert_eq!(status.to_string(), status.as_str());
    }
}

#[test]
fn test_status_parse_is_case_insensitive() {
    assert_eq!(
        FlightStatus::from_str("Landed").unwrap(),
        FlightStatus::Landed
    );
}

#[test]
fn test_status_parse_rejects_unknown() {
    let result: Result<FlightStatus, DomainError> = FlightStatus::from_str("boarding");
    assert_eq!(
        result,
        Err(DomainError::InvalidStatus {
            status: String::from("boarding")
        })
    );
}

#[test]
fn test_has_departed() {
    assert!(!FlightStatus::Scheduled.has_departed());
    assert!(!FlightStatus::Delayed.has_departed());
    assert!(FlightStatus::Departed.has_departed());
    assert!(FlightStatus::Landed.has_departed());
}

#[test]
fn test_badge_labels() {
    assert_eq!(FlightStatus::Scheduled.badge_label(0), "On Time");
    assert_eq!(FlightStatus::Delayed.badge_label(25), "Delayed 25m");
    assert_eq!(FlightStatus::Departed.badge_label(0), "Departed");
    assert_eq!(FlightStatus::Landed.badge_label(0), "Landed");
}

#[test]
fn test_headlines() {
    assert_eq!(FlightStatus::Scheduled.headline(0), "Scheduled");
    assert_eq!(
        FlightStatus::Delayed.headline(40),
        "Delayed by 40 minutes"
    );
    assert_eq!(FlightStatus::Departed.headline(0), "In Flight");
    assert_eq!(FlightStatus::Landed.headline(0), "Landed");
}

#[test]
fn test_effective_departure_prefers_actual() {
    let departed: Flight = create_test_flight(FlightStatus::Departed, 0);
    assert_eq!(departed.effective_departure(), at(9, 15));

    let scheduled: Flight = create_test_flight(FlightStatus::Scheduled, 0);
    assert_eq!(scheduled.actual_departure(), None);
    assert_eq!(scheduled.effective_departure(), at(9, 15));
}

#[test]
fn test_delayed_departure() {
    let delayed: Flight = create_test_flight(FlightStatus::Delayed, 20);
    assert_eq!(delayed.delayed_departure(), at(9, 35));
    assert_eq!(delayed.effective_departure(), at(9, 15));
}

#[test]
fn test_scheduled_duration() {
    let flight: Flight = create_test_flight(FlightStatus::Scheduled, 0);
    assert_eq!(flight.scheduled_duration(), Duration::minutes(25));
}

#[test]
fn test_flight_serializes_with_camel_case_fields() {
    let flight: Flight = create_test_flight(FlightStatus::Departed, 0);
    let json: serde_json::Value = serde_json::to_value(&flight).unwrap();

    assert_eq!(json["flightNumber"], "BHA 482");
    assert_eq!(json["status"], "departed");
    assert_eq!(json["delayMinutes"], 0);
    assert_eq!(json["origin"]["name"], "Kathmandu");
    assert!(json["actualArrival"].is_null());
    assert!(json.get("scheduledDeparture").is_some());

    let back: Flight = serde_json::from_value(json).unwrap();
    assert_eq!(back, flight);
}
