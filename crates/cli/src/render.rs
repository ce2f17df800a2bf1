// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering for terminal output.

use flight_tracker_api::{FlightDetailView, SearchResponse};
use flight_tracker_domain::{Airline, City, flight_number_prefix};

const PROGRESS_BAR_WIDTH: usize = 20;

pub fn render_cities(cities: &[City]) -> String {
    cities
        .iter()
        .map(|city| format!("{:<6} {}\n", city.id, city.name))
        .collect()
}

pub fn render_airlines(airlines: &[Airline]) -> String {
    airlines
        .iter()
        .map(|airline| {
            format!(
                "{:<8} {:<4} {}\n",
                airline.id,
                flight_number_prefix(&airline.id),
                airline.name
            )
        })
        .collect()
}

/// One line per flight card, headed by the search message.
pub fn render_flight_list(response: &SearchResponse) -> String {
    let mut out: String = format!("{}\n", response.message);

    for flight in &response.flights {
        out.push_str(&format!(
            "  {:<10} {:<20} {} {}  {} -> {}  [{}]  ({})\n",
            flight.flight_number,
            flight.airline_name,
            flight.departure_date,
            flight.departure_time,
            flight.origin.name,
            flight.destination.name,
            flight.badge,
            flight.id
        ));
    }
    out
}

pub fn render_detail(view: &FlightDetailView) -> String {
    let mut lines: Vec<String> = vec![
        format!("{} ({})", view.flight_number, view.airline_name),
        view.headline.clone(),
        format!(
            "{} -> {} on {}, {}",
            view.origin.name, view.destination.name, view.date, view.duration
        ),
    ];

    for display in [&view.departure, &view.arrival] {
        lines.push(format!(
            "  {:<18} {}  {}",
            display.label, display.time_text, display.subtitle
        ));
    }

    if let Some(percent) = view.progress {
        lines.push(format!("  {}", progress_bar(percent)));
    }
    if let Some(remaining) = &view.remaining_time {
        lines.push(format!("  Remaining: {remaining}"));
    }

    let mut out: String = lines.join("\n");
    out.push('\n');
    out
}

fn progress_bar(percent: u8) -> String {
    let filled: usize = usize::from(percent.min(100)) * PROGRESS_BAR_WIDTH / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}
