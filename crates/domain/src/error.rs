// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// City identifier is not present in the city registry.
    UnknownCity(String),
    /// Airline identifier is not present in the airline registry.
    UnknownAirline(String),
    /// Origin and destination refer to the same city.
    SameOriginAndDestination(String),
    /// Flight status string could not be parsed.
    InvalidStatus {
        /// The rejected status value.
        status: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCity(id) => write!(f, "Unknown city: '{id}'"),
            Self::UnknownAirline(id) => write!(f, "Unknown airline: '{id}'"),
            Self::SameOriginAndDestination(id) => {
                write!(
                    f,
                    "Origin and destination cannot be the same (both '{id}')"
                )
            }
            Self::InvalidStatus { status } => write!(f, "Invalid flight status: '{status}'"),
        }
    }
}

impl std::error::Error for DomainError {}
