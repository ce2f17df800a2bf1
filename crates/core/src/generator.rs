// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Synthetic flight generation.
//!
//! Given a route, a date and an airline, the generator fabricates a small
//! batch of flights whose status and timings agree with each other.
//!
//! ## Invariants
//!
//! - A batch for a known route holds between `min_batch_size` and
//!   `max_batch_size` flights, sorted by scheduled departure
//! - Scheduled arrival is scheduled departure plus the route duration
//! - Only delayed flights carry a non-zero delay
//! - Departed and landed flights have an actual departure; only landed
//!   flights have an actual arrival
//! - Unknown cities produce an empty batch, never an error
//!
//! ## Randomness
//!
//! All draws go through the injected RNG, and the hour used for the status
//! weights is passed in by the caller, so a seeded generator is fully
//! deterministic.

use crate::config::GeneratorConfig;
use crate::error::CoreError;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use flight_tracker_domain::{
    Airline, City, Flight, FlightStatus, FlightTimes, duration_minutes, find_airline, find_city,
    flight_number_prefix, validate_airline, validate_route,
};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

/// Ordered status weights for one hour of the day.
///
/// Order matters: the cumulative draw walks the table front to back.
pub type StatusWeights = [(FlightStatus, f64); 4];

/// Returns the status weights for the given hour (0-23).
///
/// Early morning favors scheduled flights, evening favors landed ones, and
/// daytime is dominated by flights in the air.
#[must_use]
pub const fn status_weights(hour: u32) -> StatusWeights {
    if hour < 8 {
        [
            (FlightStatus::Scheduled, 0.7),
            (FlightStatus::Delayed, 0.1),
            (FlightStatus::Departed, 0.2),
            (FlightStatus::Landed, 0.0),
        ]
    } else if hour > 18 {
        [
            (FlightStatus::Scheduled, 0.4),
            (FlightStatus::Delayed, 0.1),
            (FlightStatus::Departed, 0.3),
            (FlightStatus::Landed, 0.2),
        ]
    } else {
        [
            (FlightStatus::Scheduled, 0.2),
            (FlightStatus::Delayed, 0.1),
            (FlightStatus::Departed, 0.6),
            (FlightStatus::Landed, 0.1),
        ]
    }
}

/// Picks a status from a weight table using one sample in `[0, 1)`.
///
/// The first status whose cumulative weight reaches the sample wins. If the
/// weights sum to less than the sample, the flight is scheduled. Weights are
/// used as given, without normalization.
#[must_use]
pub fn draw_status(weights: &StatusWeights, sample: f64) -> FlightStatus {
    let mut cumulative: f64 = 0.0;
    for (status, weight) in weights {
        cumulative += weight;
        if sample <= cumulative {
            return *status;
        }
    }
    FlightStatus::Scheduled
}

/// Generates flight batches from an injected random source.
#[derive(Debug)]
pub struct FlightGenerator<R: Rng> {
    rng: R,
    config: GeneratorConfig,
}

impl FlightGenerator<ThreadRng> {
    /// Creates a generator backed by the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for FlightGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightGenerator<StdRng> {
    /// Creates a deterministic generator from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FlightGenerator<R> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            config: GeneratorConfig::default(),
        }
    }

    /// Creates a generator with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` if the configuration fails
    /// validation.
    pub fn with_config(rng: R, config: GeneratorConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a batch of flights for a route.
    ///
    /// # Arguments
    ///
    /// * `origin_id` - Origin city id
    /// * `destination_id` - Destination city id
    /// * `date` - Day the flights operate on
    /// * `airline_id` - Operating airline id
    /// * `hour` - Current hour of the day, selects the status weights
    ///
    /// # Returns
    ///
    /// Flights sorted by scheduled departure, or an empty vector if either
    /// city is unknown. An unknown airline still yields flights, numbered
    /// with the placeholder prefix and with no airline attached.
    pub fn search(
        &mut self,
        origin_id: &str,
        destination_id: &str,
        date: NaiveDate,
        airline_id: &str,
        hour: u32,
    ) -> Vec<Flight> {
        let (Some(origin), Some(destination)) = (find_city(origin_id), find_city(destination_id))
        else {
            debug!(
                origin = origin_id,
                destination = destination_id,
                "Unknown route, returning no flights"
            );
            return Vec::new();
        };

        let airline: Option<Airline> = find_airline(airline_id);
        if airline.is_none() {
            warn!(
                airline = airline_id,
                "Unknown airline, using placeholder flight numbers"
            );
        }

        self.generate_batch(&origin, &destination, airline_id, airline.as_ref(), date, hour)
    }

    /// Generates a batch of flights, rejecting invalid input instead of
    /// returning an empty batch.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if:
    /// - Either city is unknown
    /// - Origin and destination are the same city
    /// - The airline is unknown
    pub fn try_search(
        &mut self,
        origin_id: &str,
        destination_id: &str,
        date: NaiveDate,
        airline_id: &str,
        hour: u32,
    ) -> Result<Vec<Flight>, CoreError> {
        let (origin, destination): (City, City) = validate_route(origin_id, destination_id)?;
        let airline: Airline = validate_airline(airline_id)?;

        Ok(self.generate_batch(
            &origin,
            &destination,
            airline_id,
            Some(&airline),
            date,
            hour,
        ))
    }

    fn generate_batch(
        &mut self,
        origin: &City,
        destination: &City,
        airline_id: &str,
        airline: Option<&Airline>,
        date: NaiveDate,
        hour: u32,
    ) -> Vec<Flight> {
        let duration: u32 = duration_minutes(&origin.id, &destination.id);
        let weights: StatusWeights = status_weights(hour);
        let count: usize = self
            .rng
            .gen_range(self.config.min_batch_size..=self.config.max_batch_size);

        let mut flights: Vec<Flight> = Vec::with_capacity(count);
        for index in 0..count {
            let status: FlightStatus = draw_status(&weights, self.rng.gen_range(0.0..1.0));
            let times: FlightTimes = self.generate_times(date, duration, status);
            let flight_number: String = self.generate_flight_number(airline_id);

            flights.push(Flight::new(
                format!("{airline_id}-{}-{}-{index}", origin.id, destination.id),
                flight_number,
                airline.cloned(),
                origin.clone(),
                destination.clone(),
                status,
                times,
            ));
        }

        flights.sort_by_key(Flight::scheduled_departure);

        debug!(
            origin = %origin.id,
            destination = %destination.id,
            airline = airline_id,
            %date,
            count = flights.len(),
            duration_minutes = duration,
            "Generated flight batch"
        );

        flights
    }

    fn generate_times(
        &mut self,
        date: NaiveDate,
        duration: u32,
        status: FlightStatus,
    ) -> FlightTimes {
        let departure_hour: u32 = self.rng.gen_range(
            self.config.departure_window_start_hour..self.config.departure_window_end_hour,
        );
        let departure_minute: u32 = self.rng.gen_range(0..60);

        let midnight: NaiveDateTime = date.and_time(NaiveTime::MIN);
        let scheduled_departure: NaiveDateTime =
            midnight + Duration::minutes(i64::from(departure_hour * 60 + departure_minute));
        let flight_time: Duration = Duration::minutes(i64::from(duration));
        let scheduled_arrival: NaiveDateTime = scheduled_departure + flight_time;

        let delay_minutes: u32 = if status == FlightStatus::Delayed {
            self.rng
                .gen_range(self.config.min_delay_minutes..=self.config.max_delay_minutes)
        } else {
            0
        };

        let actual_departure: Option<NaiveDateTime> = status
            .has_departed()
            .then(|| scheduled_departure + Duration::minutes(i64::from(delay_minutes)));
        let actual_arrival: Option<NaiveDateTime> = if status == FlightStatus::Landed {
            actual_departure.map(|departed| departed + flight_time)
        } else {
            None
        };

        FlightTimes {
            scheduled_departure,
            scheduled_arrival,
            actual_departure,
            actual_arrival,
            delay_minutes,
        }
    }

    fn generate_flight_number(&mut self, airline_id: &str) -> String {
        let number: u16 = self
            .rng
            .gen_range(self.config.min_flight_number..=self.config.max_flight_number);
        format!("{} {number}", flight_number_prefix(airline_id))
    }
}

/// Generates flights for a route using the thread-local RNG and the local
/// wall clock's current hour.
///
/// Returns an empty vector if either city is unknown.
#[must_use]
pub fn search_flights(
    origin_id: &str,
    destination_id: &str,
    date: NaiveDate,
    airline_id: &str,
) -> Vec<Flight> {
    FlightGenerator::new().search(
        origin_id,
        destination_id,
        date,
        airline_id,
        Local::now().hour(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_tables_sum_to_one() {
        for hour in 0..24 {
            let total: f64 = status_weights(hour).iter().map(|(_, weight)| weight).sum();
            assert!((total - 1.0).abs() < 1e-9, "hour {hour} sums to {total}");
        }
    }

    #[test]
    fn test_weight_table_order_is_fixed() {
        for hour in [0, 12, 23] {
            let order: Vec<FlightStatus> = status_weights(hour)
                .iter()
                .map(|(status, _)| *status)
                .collect();
            assert_eq!(order, FlightStatus::ALL.to_vec());
        }
    }

    #[test]
    fn test_hour_buckets() {
        assert!((status_weights(7)[0].1 - 0.7).abs() < f64::EPSILON);
        assert!((status_weights(8)[2].1 - 0.6).abs() < f64::EPSILON);
        assert!((status_weights(18)[2].1 - 0.6).abs() < f64::EPSILON);
        assert!((status_weights(19)[3].1 - 0.2).abs() < f64::EPSILON);
    }
}
