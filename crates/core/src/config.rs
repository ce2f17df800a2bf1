// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tunable ranges for the flight generator.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Ranges the generator draws from.
///
/// All ranges are inclusive except the departure window, whose end hour is
/// exclusive (a departure window of 6..18 yields departures from 06:00 up to
/// 17:59).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// First hour of the day a departure may be scheduled.
    pub departure_window_start_hour: u32,
    /// Hour of the day before which every departure is scheduled.
    pub departure_window_end_hour: u32,
    /// Smallest batch returned for a valid search.
    pub min_batch_size: usize,
    /// Largest batch returned for a valid search.
    pub max_batch_size: usize,
    /// Shortest delay assigned to a delayed flight.
    pub min_delay_minutes: u32,
    /// Longest delay assigned to a delayed flight.
    pub max_delay_minutes: u32,
    /// Lowest numeric part of a flight number.
    pub min_flight_number: u16,
    /// Highest numeric part of a flight number.
    pub max_flight_number: u16,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            departure_window_start_hour: 6,
            departure_window_end_hour: 18,
            min_batch_size: 2,
            max_batch_size: 6,
            min_delay_minutes: 10,
            max_delay_minutes: 60,
            min_flight_number: 100,
            max_flight_number: 999,
        }
    }
}

impl GeneratorConfig {
    /// Checks that every range is non-empty and within its domain.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` if:
    /// - The departure window is empty or extends past midnight
    /// - The batch size range is empty or allows zero flights
    /// - The delay range is empty or allows a zero-minute delay
    /// - The flight number range is empty or not three digits
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.departure_window_start_hour >= self.departure_window_end_hour
            || self.departure_window_end_hour > 24
        {
            return Err(CoreError::InvalidConfig {
                reason: format!(
                    "departure window {}..{} must be a non-empty range within one day",
                    self.departure_window_start_hour, self.departure_window_end_hour
                ),
            });
        }

        if self.min_batch_size == 0 || self.min_batch_size > self.max_batch_size {
            return Err(CoreError::InvalidConfig {
                reason: format!(
                    "batch size range {}..={} must be non-empty and start at 1 or more",
                    self.min_batch_size, self.max_batch_size
                ),
            });
        }

        if self.min_delay_minutes == 0 || self.min_delay_minutes > self.max_delay_minutes {
            return Err(CoreError::InvalidConfig {
                reason: format!(
                    "delay range {}..={} must be non-empty and start at 1 or more",
                    self.min_delay_minutes, self.max_delay_minutes
                ),
            });
        }

        if self.min_flight_number < 100
            || self.max_flight_number > 999
            || self.min_flight_number > self.max_flight_number
        {
            return Err(CoreError::InvalidConfig {
                reason: format!(
                    "flight number range {}..={} must be a non-empty range of three-digit numbers",
                    self.min_flight_number, self.max_flight_number
                ),
            });
        }

        Ok(())
    }
}
