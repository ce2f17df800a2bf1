// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use chrono::NaiveDate;
use flight_tracker::CoreError;
use flight_tracker_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// One or more required search fields were left empty.
    #[error("Missing information: Please select origin, destination and airline")]
    MissingInformation {
        /// The empty fields, in form order.
        fields: Vec<&'static str>,
    },
    /// The route cannot be flown.
    #[error("Invalid route: {message}")]
    InvalidRoute {
        /// A human-readable description of the problem.
        message: String,
    },
    /// The travel date has already passed.
    #[error("Invalid date: {date} is before today ({today})")]
    InvalidDate {
        /// The requested travel date.
        date: NaiveDate,
        /// The day the search was made.
        today: NaiveDate,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Short heading suitable for a notification title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::MissingInformation { .. } => "Missing information",
            Self::InvalidRoute { .. } => "Invalid route",
            Self::InvalidDate { .. } => "Invalid date",
            Self::ResourceNotFound { .. } => "Not found",
            Self::Internal { .. } => "Something went wrong",
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownCity(id) => ApiError::ResourceNotFound {
            resource_type: String::from("City"),
            message: format!("City '{id}' is not served"),
        },
        DomainError::UnknownAirline(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Airline"),
            message: format!("Airline '{id}' is not registered"),
        },
        DomainError::SameOriginAndDestination(_) => ApiError::InvalidRoute {
            message: String::from("Origin and destination cannot be the same"),
        },
        DomainError::InvalidStatus { status } => ApiError::Internal {
            message: format!("Unexpected flight status '{status}'"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidConfig { reason } => ApiError::Internal { message: reason },
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}
