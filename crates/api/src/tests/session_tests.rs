// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_now, create_test_request, create_test_session};
use crate::{ApiError, FlightDetailView, SearchRequest, SearchResponse};
use flight_tracker_domain::Flight;

#[test]
fn test_new_session_is_empty() {
    let session = create_test_session(1);
    assert!(session.flights().is_empty());
    assert!(session.selected().is_none());
    assert!(session.criteria().is_none());
    assert!(session.detail(create_test_now()).is_none());
}

#[test]
fn test_search_fills_batch_and_response() {
    let mut session = create_test_session(1);
    let response: SearchResponse = session
        .search(&create_test_request(), create_test_now())
        .unwrap();

    assert!((2..=6).contains(&session.flights().len()));
    assert_eq!(response.flights.len(), session.flights().len());
    assert_eq!(response.criteria, create_test_request());
    assert_eq!(
        response.message,
        format!(
            "Found {} flights from Kathmandu to Pokhara",
            session.flights().len()
        )
    );
    assert_eq!(session.criteria(), Some(&create_test_request()));

    for (summary, flight) in response.flights.iter().zip(session.flights()) {
        assert_eq!(summary.id, flight.id());
    }
}

#[test]
fn test_search_replaces_batch_and_clears_selection() {
    let mut session = create_test_session(2);
    session
        .search(&create_test_request(), create_test_now())
        .unwrap();
    let first_id: String = session.flights()[0].id().to_string();
    session.select(&first_id).unwrap();
    assert!(session.selected().is_some());

    let request: SearchRequest = SearchRequest {
        to: String::from("luk"),
        airline: String::from("tara"),
        ..create_test_request()
    };
    session.search(&request, create_test_now()).unwrap();

    assert!(session.selected().is_none());
    assert!(
        session
            .flights()
            .iter()
            .all(|flight| flight.destination().id == "luk")
    );
    assert_eq!(session.criteria(), Some(&request));
}

#[test]
fn test_rejected_search_keeps_previous_batch() {
    let mut session = create_test_session(3);
    session
        .search(&create_test_request(), create_test_now())
        .unwrap();
    let before: Vec<Flight> = session.flights().to_vec();
    let first_id: String = before[0].id().to_string();
    session.select(&first_id).unwrap();

    let request: SearchRequest = SearchRequest {
        to: String::from("ktm"),
        ..create_test_request()
    };
    let result = session.search(&request, create_test_now());

    assert!(matches!(result, Err(ApiError::InvalidRoute { .. })));
    assert_eq!(session.flights(), before.as_slice());
    assert_eq!(session.selected().unwrap().id(), first_id);
    assert_eq!(session.criteria(), Some(&create_test_request()));
}

#[test]
fn test_search_for_past_day_keeps_previous_batch() {
    let mut session = create_test_session(6);
    session
        .search(&create_test_request(), create_test_now())
        .unwrap();
    let before: Vec<Flight> = session.flights().to_vec();

    let tomorrow = create_test_now() + chrono::Duration::days(1);
    let result = session.search(&create_test_request(), tomorrow);

    assert!(matches!(result, Err(ApiError::InvalidDate { .. })));
    assert_eq!(session.flights(), before.as_slice());
}

#[test]
fn test_select_unknown_flight() {
    let mut session = create_test_session(4);
    session
        .search(&create_test_request(), create_test_now())
        .unwrap();

    let err: ApiError = session.select("nope").unwrap_err();
    assert_eq!(
        format!("{err}"),
        "Flight not found: Flight 'nope' is not in the current results"
    );
    assert!(session.selected().is_none());
}

#[test]
fn test_select_and_back() {
    let mut session = create_test_session(5);
    session
        .search(&create_test_request(), create_test_now())
        .unwrap();
    let last_id: String = session.flights().last().unwrap().id().to_string();

    let selected: &Flight = session.select(&last_id).unwrap();
    assert_eq!(selected.id(), last_id);

    let detail: FlightDetailView = session.detail(create_test_now()).unwrap();
    assert_eq!(detail.id, last_id);

    session.back();
    assert!(session.selected().is_none());
    assert!(!session.flights().is_empty());
}

#[test]
fn test_same_seed_same_results() {
    let mut first = create_test_session(6);
    let mut second = create_test_session(6);
    let a: SearchResponse = first
        .search(&create_test_request(), create_test_now())
        .unwrap();
    let b: SearchResponse = second
        .search(&create_test_request(), create_test_now())
        .unwrap();
    assert_eq!(a, b);
}
