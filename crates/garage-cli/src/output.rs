//! Output formatting module

use garage_domain::model::Vehicle;
use garage_types::{Error, OutputFormat, Result};

const RULE_HEAVY: &str = "═══════════════════════════════════════════════════════════════";
const RULE_LIGHT: &str = "───────────────────────────────────────────────────────────────";

pub fn output_vehicle(output_format: OutputFormat, vehicle: &Vehicle) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicle)?);
    } else {
        println!("{}", vehicle);
        println!("Tax ({:.0}%): ${:.2}", vehicle.category().tax_rate() * 100.0, vehicle.tax());
    }
    Ok(())
}

pub fn output_vehicles(output_format: OutputFormat, title: &str, vehicles: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
        return Ok(());
    }

    if vehicles.is_empty() {
        println!("No vehicles found.");
        return Ok(());
    }

    println!("{}: {}", title, vehicles.len());
    println!("{}", RULE_HEAVY);
    for vehicle in vehicles {
        println!("{}", vehicle);
        println!("{}", RULE_LIGHT);
    }
    Ok(())
}

/// Report a failed command. Validation failures list every violation.
pub fn print_error(error: &Error) {
    match error {
        Error::Validation(messages) => {
            eprintln!("Validation errors:");
            for message in messages {
                eprintln!("  • {}", message);
            }
        }
        other => eprintln!("Error: {}", other),
    }
}

/// Report a failure to bring the application up
pub fn print_startup_failure(error: &Error) {
    eprintln!("╔════════════════════════════════════════╗");
    eprintln!("║   FAILED TO START GARAGE               ║");
    eprintln!("╚════════════════════════════════════════╝");
    eprintln!("Details: {}", error);
}
