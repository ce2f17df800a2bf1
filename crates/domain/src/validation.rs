// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::registry::{find_airline, find_city};
use crate::types::{Airline, City};

/// Validates that a route connects two distinct, known cities.
///
/// # Arguments
///
/// * `origin_id` - The origin city id
/// * `destination_id` - The destination city id
///
/// # Returns
///
/// * `Ok((origin, destination))` with both cities resolved from the registry
/// * `Err(DomainError)` if the route is not valid
///
/// # Errors
///
/// Returns an error if:
/// - Either city id is not in the registry
/// - Origin and destination are the same city
pub fn validate_route(origin_id: &str, destination_id: &str) -> Result<(City, City), DomainError> {
    let origin: City =
        find_city(origin_id).ok_or_else(|| DomainError::UnknownCity(origin_id.to_string()))?;
    let destination: City = find_city(destination_id)
        .ok_or_else(|| DomainError::UnknownCity(destination_id.to_string()))?;

    if origin == destination {
        return Err(DomainError::SameOriginAndDestination(
            origin_id.to_string(),
        ));
    }

    Ok((origin, destination))
}

/// Validates that an airline id is in the registry.
///
/// # Errors
///
/// Returns `DomainError::UnknownAirline` if the id is not registered.
pub fn validate_airline(airline_id: &str) -> Result<Airline, DomainError> {
    find_airline(airline_id).ok_or_else(|| DomainError::UnknownAirline(airline_id.to_string()))
}
