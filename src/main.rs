use anyhow::Result;
use clap::Parser;
use quadlint::cli::{Cli, Commands};
use quadlint::commands;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(false) => 0,
        Ok(true) => 1,
        Err(err) => {
            eprintln!("Error: {err:#}");
            2
        }
    };
    std::process::exit(code);
}

/// Returns whether diagnostics were produced (check) so the caller can set
/// the exit code.
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Check {
            path,
            format,
            output,
            config,
            rules,
            no_parallel,
        } => commands::check::run(commands::check::CheckOptions {
            path,
            format,
            output,
            config,
            rules,
            no_parallel,
        }),
        Commands::Init { force } => {
            commands::init::run(force)?;
            Ok(false)
        }
        Commands::Rules => {
            commands::rules::run()?;
            Ok(false)
        }
    }
}
