// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A city served by the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    /// Registry identifier (e.g. `ktm`).
    pub id: String,
    /// Display name (e.g. `Kathmandu`).
    pub name: String,
}

impl City {
    /// Creates a new city record.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// An airline operating on the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Airline {
    /// Registry identifier (e.g. `buddha`).
    pub id: String,
    /// Display name (e.g. `Buddha Air`).
    pub name: String,
}

impl Airline {
    /// Creates a new airline record.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Status of a generated flight.
///
/// A flight keeps the status it was generated with for the whole session;
/// nothing in the engine advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatus {
    /// Not yet departed, on time.
    Scheduled,
    /// Not yet departed, departure pushed back.
    Delayed,
    /// In the air.
    Departed,
    /// Arrived at the destination.
    Landed,
}

impl FlightStatus {
    /// Every status, in weight-table order.
    pub const ALL: [Self; 4] = [Self::Scheduled, Self::Delayed, Self::Departed, Self::Landed];

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Delayed => "delayed",
            Self::Departed => "departed",
            Self::Landed => "landed",
        }
    }

    /// Returns true once the flight has left the gate.
    #[must_use]
    pub const fn has_departed(&self) -> bool {
        matches!(self, Self::Departed | Self::Landed)
    }

    /// Short label shown on a flight list card.
    #[must_use]
    pub fn badge_label(&self, delay_minutes: u32) -> String {
        match self {
            Self::Scheduled => String::from("On Time"),
            Self::Delayed => format!("Delayed {delay_minutes}m"),
            Self::Departed => String::from("Departed"),
            Self::Landed => String::from("Landed"),
        }
    }

    /// Status line shown on the flight detail view.
    #[must_use]
    pub fn headline(&self, delay_minutes: u32) -> String {
        match self {
            Self::Scheduled => String::from("Scheduled"),
            Self::Delayed => format!("Delayed by {delay_minutes} minutes"),
            Self::Departed => String::from("In Flight"),
            Self::Landed => String::from("Landed"),
        }
    }
}

impl FromStr for FlightStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "delayed" => Ok(Self::Delayed),
            "departed" => Ok(Self::Departed),
            "landed" => Ok(Self::Landed),
            _ => Err(DomainError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scheduled and actual timings of one flight.
///
/// ## Invariants
///
/// - `scheduled_arrival - scheduled_departure` is the route duration
/// - `actual_departure`, when present, is `scheduled_departure + delay_minutes`
/// - `actual_arrival` is only present together with `actual_departure`, and
///   is `actual_departure` plus the route duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightTimes {
    /// Timetabled departure.
    pub scheduled_departure: NaiveDateTime,
    /// Timetabled arrival.
    pub scheduled_arrival: NaiveDateTime,
    /// Time the flight left, if it has.
    pub actual_departure: Option<NaiveDateTime>,
    /// Time the flight arrived, if it has.
    pub actual_arrival: Option<NaiveDateTime>,
    /// Departure delay in minutes.
    pub delay_minutes: u32,
}

/// A generated flight.
///
/// Flights are immutable once generated; a new search replaces the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    id: String,
    flight_number: String,
    airline: Option<Airline>,
    origin: City,
    destination: City,
    status: FlightStatus,
    #[serde(flatten)]
    times: FlightTimes,
}

impl Flight {
    /// Creates a new flight record.
    ///
    /// # Arguments
    ///
    /// * `id` - Batch-unique key
    /// * `flight_number` - Display flight number (e.g. `BHA 482`)
    /// * `airline` - Operating airline; `None` if the id was not registered
    /// * `origin` - Departure city
    /// * `destination` - Arrival city
    /// * `status` - Status fixed at generation time
    /// * `times` - Scheduled and actual timings consistent with `status`
    #[must_use]
    pub const fn new(
        id: String,
        flight_number: String,
        airline: Option<Airline>,
        origin: City,
        destination: City,
        status: FlightStatus,
        times: FlightTimes,
    ) -> Self {
        Self {
            id,
            flight_number,
            airline,
            origin,
            destination,
            status,
            times,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    #[must_use]
    pub const fn airline(&self) -> Option<&Airline> {
        self.airline.as_ref()
    }

    #[must_use]
    pub const fn origin(&self) -> &City {
        &self.origin
    }

    #[must_use]
    pub const fn destination(&self) -> &City {
        &self.destination
    }

    #[must_use]
    pub const fn status(&self) -> FlightStatus {
        self.status
    }

    #[must_use]
    pub const fn scheduled_departure(&self) -> NaiveDateTime {
        self.times.scheduled_departure
    }

    #[must_use]
    pub const fn scheduled_arrival(&self) -> NaiveDateTime {
        self.times.scheduled_arrival
    }

    #[must_use]
    pub const fn actual_departure(&self) -> Option<NaiveDateTime> {
        self.times.actual_departure
    }

    #[must_use]
    pub const fn actual_arrival(&self) -> Option<NaiveDateTime> {
        self.times.actual_arrival
    }

    #[must_use]
    pub const fn delay_minutes(&self) -> u32 {
        self.times.delay_minutes
    }

    /// Actual departure if the flight has left, otherwise scheduled departure.
    #[must_use]
    pub fn effective_departure(&self) -> NaiveDateTime {
        self.times
            .actual_departure
            .unwrap_or(self.times.scheduled_departure)
    }

    /// Scheduled departure pushed back by the delay.
    #[must_use]
    pub fn delayed_departure(&self) -> NaiveDateTime {
        self.times.scheduled_departure + Duration::minutes(i64::from(self.times.delay_minutes))
    }

    /// Scheduled block time.
    #[must_use]
    pub fn scheduled_duration(&self) -> Duration {
        self.times.scheduled_arrival - self.times.scheduled_departure
    }
}
