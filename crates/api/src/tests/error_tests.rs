// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, translate_core_error, translate_domain_error};
use flight_tracker::CoreError;
use flight_tracker_domain::DomainError;

#[test]
fn test_api_error_display() {
    let err: ApiError = ApiError::MissingInformation {
        fields: vec!["from"],
    };
    assert_eq!(
        format!("{err}"),
        "Missing information: Please select origin, destination and airline"
    );
    assert_eq!(err.title(), "Missing information");

    let err: ApiError = ApiError::InvalidRoute {
        message: String::from("Origin and destination cannot be the same"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid route: Origin and destination cannot be the same"
    );
    assert_eq!(err.title(), "Invalid route");
}

#[test]
fn test_translate_domain_errors() {
    assert_eq!(
        translate_domain_error(DomainError::UnknownCity(String::from("xyz"))),
        ApiError::ResourceNotFound {
            resource_type: String::from("City"),
            message: String::from("City 'xyz' is not served"),
        }
    );
    assert!(matches!(
        translate_domain_error(DomainError::SameOriginAndDestination(String::from("ktm"))),
        ApiError::InvalidRoute { .. }
    ));
    assert_eq!(
        format!(
            "{}",
            translate_domain_error(DomainError::UnknownAirline(String::from("acme")))
        ),
        "Airline not found: Airline 'acme' is not registered"
    );
}

#[test]
fn test_translate_core_errors() {
    let err: ApiError = translate_core_error(CoreError::InvalidConfig {
        reason: String::from("bad window"),
    });
    assert_eq!(
        err,
        ApiError::Internal {
            message: String::from("bad window")
        }
    );

    let err: ApiError = CoreError::DomainViolation(DomainError::UnknownCity(String::from("a")))
        .into();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}
