// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use chrono::{NaiveDate, NaiveDateTime};
use flight_tracker::{
    TimeDisplay, derive_arrival, derive_departure, derive_duration_text, derive_progress,
    derive_remaining_time, format_date, format_short_date, format_time,
};
use flight_tracker_domain::{Airline, City, Flight, FlightStatus};

/// Text shown in place of an airline name the registry does not know.
const UNKNOWN_AIRLINE_NAME: &str = "Unknown airline";

/// API request to search for flights.
///
/// Ids are taken as entered; validation happens in `validate_search`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
    /// Origin city id.
    pub from: String,
    /// Destination city id.
    pub to: String,
    /// Day of travel.
    pub date: NaiveDate,
    /// Airline id.
    pub airline: String,
}

/// A search request whose ids have been resolved against the registries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSearch {
    pub origin: City,
    pub destination: City,
    pub airline: Airline,
    pub date: NaiveDate,
}

/// API response for a completed search.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
    /// The criteria the batch was generated for.
    pub criteria: SearchRequest,
    /// One summary per flight, in departure order.
    pub flights: Vec<FlightSummary>,
    /// A summary message.
    pub message: String,
}

/// One card in the flight list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FlightSummary {
    pub id: String,
    pub flight_number: String,
    pub airline_name: String,
    pub status: FlightStatus,
    /// Status badge text, e.g. "Delayed 25m".
    pub badge: String,
    /// Scheduled departure as clock text.
    pub departure_time: String,
    /// Scheduled departure day and month.
    pub departure_date: String,
    pub origin: City,
    pub destination: City,
}

impl FlightSummary {
    /// Builds the list card for a flight.
    #[must_use]
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            id: flight.id().to_string(),
            flight_number: flight.flight_number().to_string(),
            airline_name: airline_name(flight),
            status: flight.status(),
            badge: flight.status().badge_label(flight.delay_minutes()),
            departure_time: format_time(flight.scheduled_departure()),
            departure_date: format_short_date(flight.scheduled_departure()),
            origin: flight.origin().clone(),
            destination: flight.destination().clone(),
        }
    }
}

/// The detail view of one flight at a given instant.
///
/// Progress and remaining time depend on `now`; rebuild the view to refresh
/// them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FlightDetailView {
    pub id: String,
    pub flight_number: String,
    pub airline_name: String,
    pub status: FlightStatus,
    /// Status line, e.g. "In Flight".
    pub headline: String,
    pub origin: City,
    pub destination: City,
    pub departure: TimeDisplay,
    pub arrival: TimeDisplay,
    /// Percentage of the flight completed, once departed.
    pub progress: Option<u8>,
    /// Time to arrival, while in the air.
    pub remaining_time: Option<String>,
    /// Scheduled departure date.
    pub date: String,
    /// Scheduled block time in words.
    pub duration: String,
    /// When the live values were computed.
    pub computed_at: NaiveDateTime,
}

impl FlightDetailView {
    /// Builds the detail view for a flight as of `now`.
    #[must_use]
    pub fn build(flight: &Flight, now: NaiveDateTime) -> Self {
        Self {
            id: flight.id().to_string(),
            flight_number: flight.flight_number().to_string(),
            airline_name: airline_name(flight),
            status: flight.status(),
            headline: flight.status().headline(flight.delay_minutes()),
            origin: flight.origin().clone(),
            destination: flight.destination().clone(),
            departure: derive_departure(flight),
            arrival: derive_arrival(flight),
            progress: derive_progress(flight, now),
            remaining_time: derive_remaining_time(flight, now),
            date: format_date(flight.scheduled_departure()),
            duration: derive_duration_text(flight),
            computed_at: now,
        }
    }
}

fn airline_name(flight: &Flight) -> String {
    flight
        .airline()
        .map_or_else(|| String::from(UNKNOWN_AIRLINE_NAME), |airline| airline.name.clone())
}
