//! Garage - vehicle inventory kept in flat files
//!
//! Cars, motorcycles and trucks live in one CSV-like file per category.

mod cli;
mod commands;
mod output;
mod shell;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        // Config never needs the data directory
        Commands::Config {
            show,
            set_data_dir,
            set_output,
            reset,
        } => commands::configure(show, set_data_dir, set_output, reset),
        command => {
            let ctx = match commands::bootstrap(cli.data_dir.as_deref(), cli.format) {
                Ok(ctx) => ctx,
                Err(e) => {
                    output::print_startup_failure(&e);
                    std::process::exit(2);
                }
            };
            let format = ctx.config.output_format;
            commands::execute(&ctx, command, format)
        }
    };

    if let Err(e) = result {
        output::print_error(&e);
        std::process::exit(1);
    }
}
