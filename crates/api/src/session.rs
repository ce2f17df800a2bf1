// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-session search state.
//!
//! A session holds at most one batch of flights. Each successful search
//! replaces the batch and clears the selection; a rejected search leaves
//! the previous batch untouched. Nothing outlives the session.

use crate::error::ApiError;
use crate::request_response::{
    FlightDetailView, FlightSummary, SearchRequest, SearchResponse, ValidatedSearch,
};
use crate::validate_search;
use chrono::{NaiveDateTime, Timelike};
use flight_tracker::FlightGenerator;
use flight_tracker_domain::Flight;
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, info};

/// Current search results and selection.
#[derive(Debug)]
pub struct FlightSession<R: Rng> {
    generator: FlightGenerator<R>,
    criteria: Option<SearchRequest>,
    flights: Vec<Flight>,
    selected: Option<usize>,
}

impl FlightSession<ThreadRng> {
    /// Creates an empty session backed by the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(FlightGenerator::new())
    }
}

impl Default for FlightSession<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> FlightSession<R> {
    /// Creates an empty session around an existing generator.
    #[must_use]
    pub const fn with_generator(generator: FlightGenerator<R>) -> Self {
        Self {
            generator,
            criteria: None,
            flights: Vec::new(),
            selected: None,
        }
    }

    /// Runs a search and replaces the current batch.
    ///
    /// `now` supplies the hour used for status weights and the day before
    /// which travel dates are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails validation. The previous batch
    /// and selection are kept in that case.
    pub fn search(
        &mut self,
        request: &SearchRequest,
        now: NaiveDateTime,
    ) -> Result<SearchResponse, ApiError> {
        let search: ValidatedSearch = validate_search(request, now.date())?;

        let flights: Vec<Flight> = self.generator.try_search(
            &search.origin.id,
            &search.destination.id,
            search.date,
            &search.airline.id,
            now.hour(),
        )?;

        info!(
            from = %search.origin.id,
            to = %search.destination.id,
            airline = %search.airline.id,
            date = %search.date,
            count = flights.len(),
            "Search completed"
        );

        self.flights = flights;
        self.selected = None;
        self.criteria = Some(request.clone());

        let message: String = if self.flights.is_empty() {
            String::from("No flights found")
        } else {
            format!(
                "Found {} flights from {} to {}",
                self.flights.len(),
                search.origin.name,
                search.destination.name
            )
        };

        Ok(SearchResponse {
            criteria: request.clone(),
            flights: self.summaries(),
            message,
        })
    }

    /// Selects a flight from the current batch by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if no flight in the batch has
    /// that id. The previous selection is kept.
    pub fn select(&mut self, flight_id: &str) -> Result<&Flight, ApiError> {
        let index: usize = self
            .flights
            .iter()
            .position(|flight| flight.id() == flight_id)
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Flight"),
                message: format!("Flight '{flight_id}' is not in the current results"),
            })?;

        debug!(flight_id, "Flight selected");
        self.selected = Some(index);
        Ok(&self.flights[index])
    }

    /// Returns to the list, clearing the selection.
    pub fn back(&mut self) {
        self.selected = None;
    }

    /// The current batch, in departure order.
    #[must_use]
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// The selected flight, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Flight> {
        self.selected.and_then(|index| self.flights.get(index))
    }

    /// The criteria of the last successful search.
    #[must_use]
    pub const fn criteria(&self) -> Option<&SearchRequest> {
        self.criteria.as_ref()
    }

    /// List cards for the current batch.
    #[must_use]
    pub fn summaries(&self) -> Vec<FlightSummary> {
        self.flights.iter().map(FlightSummary::from_flight).collect()
    }

    /// Detail view of the selected flight as of `now`.
    #[must_use]
    pub fn detail(&self, now: NaiveDateTime) -> Option<FlightDetailView> {
        self.selected()
            .map(|flight| FlightDetailView::build(flight, now))
    }
}
