//! Interactive prompt over the same command set

use std::io::{self, BufRead, Write};

use clap::Parser;
use garage_types::Result;

use crate::cli::{Cli, Commands};
use crate::commands::{self, Context};
use crate::output::print_error;

const PROMPT: &str = "garage> ";

/// Read commands from stdin until `exit`, `quit` or end of input
pub fn run(ctx: &Context) -> Result<()> {
    println!("Garage shell. Type `help` for commands, `exit` to leave.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        let line = line.trim();

        match line {
            "" => continue,
            "exit" | "quit" => break,
            _ => {}
        }

        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        let cli = match Cli::try_parse_from(std::iter::once("garage".to_string()).chain(words)) {
            Ok(cli) => cli,
            Err(e) => {
                // Help and version requests also land here
                let _ = e.print();
                continue;
            }
        };

        if matches!(cli.command, Commands::Shell) {
            println!("Already in the shell");
            continue;
        }

        let format = cli.format.unwrap_or(ctx.config.output_format);
        if let Err(e) = commands::execute(ctx, cli.command, format) {
            print_error(&e);
        }
    }

    Ok(())
}
