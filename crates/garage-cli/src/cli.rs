//! CLI definition using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use garage_types::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "garage")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vehicle inventory backed by flat files")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding autos.csv, motos.csv and camiones.csv
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new vehicle
    Create {
        #[command(subcommand)]
        vehicle: NewVehicle,
    },

    /// Show one vehicle
    Get {
        /// Category (auto, moto, camion)
        category: String,

        /// Vehicle ID
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },

    /// Change fields of an existing vehicle; omitted fields keep their value
    Update {
        #[command(subcommand)]
        vehicle: VehiclePatch,
    },

    /// Remove a vehicle
    Delete {
        /// Category (auto, moto, camion)
        category: String,

        /// Vehicle ID
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },

    /// List every vehicle of a category
    List {
        /// Category (auto, moto, camion)
        category: String,
    },

    /// Find vehicles whose brand contains the given text (case-insensitive)
    Search {
        /// Category (auto, moto, camion)
        category: String,

        /// Brand or part of it
        brand: String,
    },

    /// Print the next free ID of a category
    NextId {
        /// Category (auto, moto, camion)
        category: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },

    /// Interactive prompt accepting the same commands, one per line
    Shell,
}

/// Attributes shared by every category
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Vehicle ID (next free ID if omitted)
    #[arg(long)]
    pub id: Option<i32>,

    #[arg(long)]
    pub brand: String,

    #[arg(long)]
    pub model: String,

    #[arg(long)]
    pub year: i32,

    #[arg(long)]
    pub price: f64,

    #[arg(long)]
    pub color: String,
}

#[derive(Subcommand, Debug)]
pub enum NewVehicle {
    /// Car
    Auto {
        #[command(flatten)]
        common: CommonArgs,

        /// Number of doors (2-5)
        #[arg(long)]
        doors: i32,

        /// Manual or Automática
        #[arg(long)]
        transmission: String,

        /// The car is a sedan
        #[arg(long)]
        sedan: bool,
    },

    /// Motorcycle
    Moto {
        #[command(flatten)]
        common: CommonArgs,

        /// Displacement in cc (50-2000)
        #[arg(long)]
        displacement: i32,

        /// The motorcycle has a fairing
        #[arg(long)]
        fairing: bool,
    },

    /// Truck
    #[command(alias = "camión")]
    Camion {
        #[command(flatten)]
        common: CommonArgs,

        /// Load capacity in tons (0-50]
        #[arg(long)]
        capacity: f64,

        /// Number of axles (2-9)
        #[arg(long)]
        axles: i32,
    },
}

/// Shared attributes to overwrite; absent ones stay as stored
#[derive(Args, Debug, Default)]
pub struct CommonPatch {
    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum VehiclePatch {
    /// Car
    Auto {
        /// Vehicle ID
        id: i32,

        #[command(flatten)]
        common: CommonPatch,

        #[arg(long)]
        doors: Option<i32>,

        #[arg(long)]
        transmission: Option<String>,

        #[arg(long)]
        sedan: Option<bool>,
    },

    /// Motorcycle
    Moto {
        /// Vehicle ID
        id: i32,

        #[command(flatten)]
        common: CommonPatch,

        #[arg(long)]
        displacement: Option<i32>,

        #[arg(long)]
        fairing: Option<bool>,
    },

    /// Truck
    #[command(alias = "camión")]
    Camion {
        /// Vehicle ID
        id: i32,

        #[command(flatten)]
        common: CommonPatch,

        #[arg(long)]
        capacity: Option<f64>,

        #[arg(long)]
        axles: Option<i32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_car() {
        let cli = Cli::try_parse_from([
            "garage", "create", "auto", "--brand", "Toyota", "--model", "Corolla", "--year",
            "2020", "--price", "25000", "--color", "Rojo", "--doors", "4", "--transmission",
            "Automática", "--sedan",
        ])
        .unwrap();
        match cli.command {
            Commands::Create {
                vehicle:
                    NewVehicle::Auto {
                        common,
                        doors,
                        sedan,
                        ..
                    },
            } => {
                assert_eq!(common.id, None);
                assert_eq!(common.brand, "Toyota");
                assert_eq!(doors, 4);
                assert!(sedan);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_truck_alias_and_global_flags() {
        let cli = Cli::try_parse_from(["garage", "update", "camión", "3", "--axles", "4", "-f", "json"])
            .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::Update {
                vehicle: VehiclePatch::Camion {
                    id: 3,
                    axles: Some(4),
                    capacity: None,
                    ..
                }
            }
        ));
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let result = Cli::try_parse_from(["garage", "create", "moto", "--brand", "Honda"]);
        assert!(result.is_err());
    }
}
