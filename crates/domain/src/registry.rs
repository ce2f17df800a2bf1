// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static reference data for the domestic network.
//!
//! Both registries are compiled-in tables. Declaration order is the order
//! presented to users when listing them.

use crate::types::{Airline, City};

/// Flight number prefix used when an airline id is not in the registry.
pub const UNKNOWN_AIRLINE_PREFIX: &str = "NEP";

/// City id, display name.
const CITIES: &[(&str, &str)] = &[
    ("ktm", "Kathmandu"),
    ("pkr", "Pokhara"),
    ("bhr", "Bharatpur"),
    ("bht", "Biratnagar"),
    ("jkp", "Janakpur"),
    ("nepj", "Nepalgunj"),
    ("bwa", "Bhairahawa"),
    ("luk", "Lukla"),
    ("sim", "Simara"),
    ("tum", "Tumlingtar"),
];

/// Airline id, display name, flight number prefix.
const AIRLINES: &[(&str, &str, &str)] = &[
    ("buddha", "Buddha Air", "BHA"),
    ("yeti", "Yeti Airlines", "YTA"),
    ("shree", "Shree Airlines", "SHA"),
    ("simrik", "Simrik Air", "SMK"),
    ("saurya", "Saurya Airlines", "SAU"),
    ("summit", "Summit Air", "SUM"),
    ("tara", "Tara Air", "TAR"),
];

/// Looks up a city by id.
#[must_use]
pub fn find_city(id: &str) -> Option<City> {
    CITIES
        .iter()
        .find(|(city_id, _)| *city_id == id)
        .map(|(city_id, name)| City::new(city_id, name))
}

/// Looks up an airline by id.
#[must_use]
pub fn find_airline(id: &str) -> Option<Airline> {
    AIRLINES
        .iter()
        .find(|(airline_id, _, _)| *airline_id == id)
        .map(|(airline_id, name, _)| Airline::new(airline_id, name))
}

/// Returns the three-letter flight number prefix for an airline.
///
/// Unknown airlines get [`UNKNOWN_AIRLINE_PREFIX`].
#[must_use]
pub fn flight_number_prefix(airline_id: &str) -> &'static str {
    AIRLINES
        .iter()
        .find(|(id, _, _)| *id == airline_id)
        .map_or(UNKNOWN_AIRLINE_PREFIX, |(_, _, prefix)| prefix)
}

/// All cities, in registry order.
#[must_use]
pub fn cities() -> Vec<City> {
    CITIES.iter().map(|(id, name)| City::new(id, name)).collect()
}

/// All airlines, in registry order.
#[must_use]
pub fn airlines() -> Vec<Airline> {
    AIRLINES
        .iter()
        .map(|(id, name, _)| Airline::new(id, name))
        .collect()
}
