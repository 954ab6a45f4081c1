//! `departures` — prints the sample JFK departures board, passenger alerts
//! and airfare quotes.

use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use departures_models::{print_departures, print_departures_extended, DepartureBoard, Fare};

mod config;
mod sample;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "departures")]
#[command(about = "Airport departures board demonstrator")]
#[command(author, version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the board, the alerts and a sample fare (default)
    Demo,
    /// Print the departures board
    Board {
        /// Show destination, time and terminal for each flight
        #[arg(long, conflicts_with = "json")]
        extended: bool,
        /// Dump the board as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one alert per passenger flight
    Alert,
    /// Quote an airfare
    Fare {
        /// Checked bags for the whole party
        #[arg(long, default_value_t = 0)]
        bags: u32,
        /// Distance in miles
        #[arg(long)]
        distance: u32,
        /// Number of travelers
        #[arg(long, default_value_t = 1)]
        travelers: u32,
    },
}

fn main() -> anyhow::Result<()> {
    // Structured logging on stderr (controlled via RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    tracing::debug!(?config, "configuration loaded");

    let board = sample::jfk_board(chrono::Local::now().naive_local());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            print_departures(&board, &mut out).context("failed to print departures")?;
            writeln!(out)?;
            print_departures_extended(&board, &mut out).context("failed to print departures")?;
            writeln!(out)?;
            board.alert_passengers(&mut out).context("failed to print alerts")?;
            writeln!(out)?;
            let (bags, distance, travelers) = sample::DEMO_TRIP;
            let fare = config.fares.quote(bags, distance, travelers)?;
            print_fare(&mut out, bags, distance, travelers, fare)?;
        }
        Commands::Board { extended, json } => {
            if json {
                print_json(&board, &mut out)?;
            } else if extended {
                print_departures_extended(&board, &mut out).context("failed to print departures")?;
            } else {
                print_departures(&board, &mut out).context("failed to print departures")?;
            }
        }
        Commands::Alert => {
            tracing::info!(flights = board.len(), "alerting passengers");
            board.alert_passengers(&mut out).context("failed to print alerts")?;
        }
        Commands::Fare {
            bags,
            distance,
            travelers,
        } => {
            let fare = config
                .fares
                .quote(bags, distance, travelers)
                .context("cannot price this trip")?;
            print_fare(&mut out, bags, distance, travelers, fare)?;
        }
    }

    Ok(())
}

fn print_json<W: Write>(board: &DepartureBoard, out: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, board).context("failed to serialize board")?;
    writeln!(out)?;
    Ok(())
}

fn print_fare<W: Write>(
    out: &mut W,
    bags: u32,
    distance: u32,
    travelers: u32,
    fare: Fare,
) -> anyhow::Result<()> {
    writeln!(
        out,
        "Airfare for {bags} bag(s), {distance} miles, {travelers} traveler(s): {fare}"
    )
    .context("failed to print fare")?;
    Ok(())
}
