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
    clippy::all
)]

mod error;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use request_response::{
    FlightDetailView, FlightSummary, SearchRequest, SearchResponse, ValidatedSearch,
};
pub use session::FlightSession;

use chrono::NaiveDate;
use flight_tracker_domain::{Airline, City, validate_airline, validate_route};

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Validates a search request the way the search form does.
///
/// # Arguments
///
/// * `request` - The search request to validate
/// * `today` - The current day; earlier travel dates are rejected
///
/// # Returns
///
/// * `Ok(ValidatedSearch)` with cities and airline resolved
/// * `Err(ApiError)` if the request cannot be searched
///
/// # Errors
///
/// Returns an error if:
/// - Origin, destination or airline is empty
/// - Origin and destination are the same
/// - A city or the airline is not in the registry
/// - The travel date is before `today`
pub fn validate_search(request: &SearchRequest, today: NaiveDate) -> ApiResult<ValidatedSearch> {
    let fields: Vec<&'static str> = [
        ("from", &request.from),
        ("to", &request.to),
        ("airline", &request.airline),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect();

    if !fields.is_empty() {
        return Err(ApiError::MissingInformation { fields });
    }

    if request.from == request.to {
        return Err(ApiError::InvalidRoute {
            message: String::from("Origin and destination cannot be the same"),
        });
    }

    let (origin, destination): (City, City) = validate_route(&request.from, &request.to)?;
    let airline: Airline = validate_airline(&request.airline)?;

    if request.date < today {
        return Err(ApiError::InvalidDate {
            date: request.date,
            today,
        });
    }

    Ok(ValidatedSearch {
        origin,
        destination,
        airline,
        date: request.date,
    })
}
