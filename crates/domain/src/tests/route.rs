// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DEFAULT_DURATION_MINUTES, duration_minutes};

#[test]
fn test_forward_lookup() {
    assert_eq!(duration_minutes("ktm", "pkr"), 25);
    assert_eq!(duration_minutes("ktm", "nepj"), 55);
    assert_eq!(duration_minutes("pkr", "bht"), 60);
}

#[test]
fn test_reverse_fallback() {
    assert_eq!(duration_minutes("pkr", "ktm"), 25);
    assert_eq!(duration_minutes("tum", "ktm"), 35);
    assert_eq!(duration_minutes("bht", "pkr"), 60);
}

#[test]
fn test_default_duration() {
    assert_eq!(duration_minutes("foo", "bar"), 30);
    assert_eq!(duration_minutes("luk", "tum"), DEFAULT_DURATION_MINUTES);
}

#[test]
fn test_known_routes_are_symmetric() {
    let ids = ["ktm", "pkr", "bhr", "bht", "jkp", "nepj", "bwa", "luk", "sim", "tum"];
    for origin in ids {
        for destination in ids {
            assert_eq!(
                duration_minutes(origin, destination),
                duration_minutes(destination, origin),
                "{origin}<->{destination}"
            );
        }
    }
}
