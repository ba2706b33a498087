//! Census censored-value treatment CLI.

use clap::Parser;
use censo_cli::cli::{Cli, Command};
use censo_cli::commands::{run_diagnose, run_flag, run_treat};
use censo_cli::logging::{init_logging, log_config_from_cli};
use censo_cli::summary::{print_diagnosis, print_outcome};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Diagnose(args) => {
            run_diagnose(args).and_then(|summary| print_diagnosis(&summary, args.format))
        }
        Command::Flag(args) => run_flag(args).map(|outcome| print_outcome(&outcome)),
        Command::Treat(args) => run_treat(args).map(|outcome| print_outcome(&outcome)),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
