//! # Albergo Front Desk Entry Point
//!
//! Starts the desk, restores the ledger and prints a status summary as JSON.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from `ALBERGO_*` variables
//! 3. Build the hotel and restore the ledger
//! 4. Report tonight's availability

use std::process::ExitCode;

use albergo_frontdesk::commands::availability::check_availability;
use albergo_frontdesk::commands::revenue::gross_income;
use albergo_frontdesk::error::{ApiError, ApiResult};
use albergo_frontdesk::state::ConfigState;
use albergo_frontdesk::{bootstrap, init_tracing};
use chrono::{Days, Local};
use serde_json::json;
use tracing::{error, info};

fn main() -> ExitCode {
    init_tracing();
    info!("Starting Albergo front desk");

    let config = ConfigState::from_env();

    match status(&config) {
        Ok(summary) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(code = ?e.code, message = %e.message, "Front desk failed to start");
            ExitCode::FAILURE
        }
    }
}

fn status(config: &ConfigState) -> ApiResult<String> {
    let hotel = bootstrap(config)?;

    let today = Local::now().date_naive();
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
    let tonight = check_availability(&hotel, &today.to_string(), &tomorrow.to_string(), None)?;
    let gross = gross_income(&hotel, None, None)?;

    let summary = json!({
        "hotel": config.hotel_name,
        "dataPath": config.data_path,
        "stays": hotel.with_hotel(|h| h.ledger().len()),
        "grossIncome": config.format_currency(gross.cents()),
        "tonight": tonight,
    });

    serde_json::to_string_pretty(&summary).map_err(|e| {
        error!(error = %e, "Status serialization failed");
        ApiError::internal("Could not render status")
    })
}
