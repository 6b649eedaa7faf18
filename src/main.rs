use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use subnet_calculator::cli::{self, Cli};
use subnet_calculator::{logging, output, Config};

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "config:".red());
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(&config.log_config) {
        eprintln!("{} {e}", "logging:".red());
        return ExitCode::FAILURE;
    }
    log::info!("#Start main() {:?}", cli.command);

    let banner = output::banner(Utc::now().with_timezone(&config.timezone));
    match cli::run(&cli, &config, Some(banner.as_str())) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}
