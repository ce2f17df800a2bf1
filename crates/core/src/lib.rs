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

mod config;
mod derive;
mod error;
mod format;
mod generator;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use config::GeneratorConfig;
pub use derive::{
    DELAYED_DEPARTURE_LABEL, DEPARTED_LABEL, ESTIMATED_ARRIVAL_LABEL, LANDED_LABEL, LANDING_SOON,
    SCHEDULED_DEPARTURE_LABEL, TimeDisplay, derive_arrival, derive_departure,
    derive_duration_text, derive_progress, derive_remaining_time,
};
pub use error::CoreError;
pub use format::{
    DATE_FORMAT, SHORT_DATE_FORMAT, TIME_FORMAT, format_date, format_distance, format_short_date,
    format_time,
};
pub use generator::{FlightGenerator, StatusWeights, draw_status, search_flights, status_weights};
