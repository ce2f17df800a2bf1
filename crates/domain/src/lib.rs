// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod registry;
mod route;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use registry::{
    UNKNOWN_AIRLINE_PREFIX, airlines, cities, find_airline, find_city, flight_number_prefix,
};
pub use route::{DEFAULT_DURATION_MINUTES, duration_minutes};
pub use types::{Airline, City, Flight, FlightStatus, FlightTimes};
pub use validation::{validate_airline, validate_route};
