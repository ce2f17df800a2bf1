// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod render;

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::Context;
use flight_tracker::FlightGenerator;
use flight_tracker_api::{FlightDetailView, FlightSession, SearchRequest, SearchResponse};
use flight_tracker_domain::{FlightStatus, airlines, cities};
use rand::Rng;
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over -v/-q when set
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    if let Err(err) = args.run() {
        error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}

/// Flight Tracker - synthetic flight status for the domestic network
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search for flights on a route
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// List the cities served
    #[command(visible_alias = "c")]
    Cities {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the airlines
    #[command(visible_alias = "a")]
    Airlines {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::Search(args) => search(&args),
            Self::Cities { json } => {
                let cities = cities();
                if json {
                    println!("{}", serde_json::to_string_pretty(&cities)?);
                } else {
                    print!("{}", render::render_cities(&cities));
                }
                Ok(())
            }
            Self::Airlines { json } => {
                let airlines = airlines();
                if json {
                    println!("{}", serde_json::to_string_pretty(&airlines)?);
                } else {
                    print!("{}", render::render_airlines(&airlines));
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, clap::Args)]
struct SearchArgs {
    /// Origin city id (see `cities`)
    #[arg(short, long)]
    from: String,

    /// Destination city id
    #[arg(short, long)]
    to: String,

    /// Airline id (see `airlines`)
    #[arg(short, long)]
    airline: String,

    /// Day of travel as YYYY-MM-DD; defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Seed the generator for reproducible results
    #[arg(long)]
    seed: Option<u64>,

    /// Only list flights with this status (scheduled, delayed, departed, landed)
    #[arg(short, long)]
    status: Option<FlightStatus>,

    /// Show the detail view of this flight id
    #[arg(long)]
    select: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Everything one search invocation prints.
#[derive(Debug, Serialize)]
struct SearchOutput {
    #[serde(flatten)]
    response: SearchResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<FlightDetailView>,
}

fn search(args: &SearchArgs) -> Result<()> {
    let now: NaiveDateTime = Local::now().naive_local();
    let request: SearchRequest = SearchRequest {
        from: args.from.clone(),
        to: args.to.clone(),
        date: args.date.unwrap_or_else(|| now.date()),
        airline: args.airline.clone(),
    };

    match args.seed {
        Some(seed) => {
            debug!(seed, "Using seeded generator");
            let session = FlightSession::with_generator(FlightGenerator::seeded(seed));
            run_search(session, &request, &args, now)
        }
        None => run_search(FlightSession::new(), &request, &args, now),
    }
}

fn run_search<R: Rng>(
    mut session: FlightSession<R>,
    request: &SearchRequest,
    args: &SearchArgs,
    now: NaiveDateTime,
) -> Result<()> {
    let mut response: SearchResponse = session
        .search(request, now)
        .map_err(|err| color_eyre::eyre::eyre!("{}: {err}", err.title()))?;
    info!("{}", response.message);

    if let Some(status) = args.status {
        response.flights.retain(|flight| flight.status == status);
        debug!(%status, shown = response.flights.len(), "Filtered flights by status");
    }

    let detail: Option<FlightDetailView> = match args.select.as_deref() {
        Some(flight_id) => {
            session
                .select(flight_id)
                .wrap_err_with(|| format!("Cannot show flight '{flight_id}'"))?;
            session.detail(now)
        }
        None => None,
    };

    if args.json {
        let output: SearchOutput = SearchOutput { response, detail };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match detail {
        Some(view) => print!("{}", render::render_detail(&view)),
        None => print!("{}", render::render_flight_list(&response)),
    }
    Ok(())
}
