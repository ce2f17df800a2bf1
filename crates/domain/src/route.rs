// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Route duration lookup.
//!
//! ## Invariants
//!
//! - Lookups never fail; unknown pairs get [`DEFAULT_DURATION_MINUTES`]
//! - A missing forward entry falls back to the reverse entry
//! - Every duration is positive

/// Duration used for any city pair absent from the table.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Origin id to (destination id, minutes).
const ROUTE_DURATIONS: &[(&str, &[(&str, u32)])] = &[
    (
        "ktm",
        &[
            ("pkr", 25),
            ("bhr", 20),
            ("bht", 45),
            ("jkp", 35),
            ("nepj", 55),
            ("bwa", 30),
            ("luk", 30),
            ("sim", 15),
            ("tum", 35),
        ],
    ),
    ("pkr", &[("ktm", 25), ("jkp", 45), ("bht", 60)]),
    ("bhr", &[("ktm", 20)]),
    ("bht", &[("ktm", 45), ("pkr", 60)]),
    ("jkp", &[("ktm", 35), ("pkr", 45)]),
    ("nepj", &[("ktm", 55)]),
    ("bwa", &[("ktm", 30)]),
    ("luk", &[("ktm", 30)]),
    ("sim", &[("ktm", 15)]),
    ("tum", &[("ktm", 35)]),
];

fn lookup(origin_id: &str, destination_id: &str) -> Option<u32> {
    ROUTE_DURATIONS
        .iter()
        .find(|(origin, _)| *origin == origin_id)
        .and_then(|(_, destinations)| {
            destinations
                .iter()
                .find(|(destination, _)| *destination == destination_id)
        })
        .map(|(_, minutes)| *minutes)
}

/// Returns the flight duration in minutes between two cities.
///
/// Looks up the forward pair first, then the reverse pair, then falls back
/// to [`DEFAULT_DURATION_MINUTES`].
#[must_use]
pub fn duration_minutes(origin_id: &str, destination_id: &str) -> u32 {
    lookup(origin_id, destination_id)
        .or_else(|| lookup(destination_id, origin_id))
        .unwrap_or(DEFAULT_DURATION_MINUTES)
}
