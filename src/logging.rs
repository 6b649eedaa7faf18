//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Initialise logging from the YAML file at `path`.
///
/// Without that file, warnings and errors go to stderr so stdout only ever
/// carries the rendered report.
pub fn init(path: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(path).exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {path}: {e}"))?;
        log::info!("logging configured from {path}");
    } else {
        log4rs::init_config(fallback_config()?)
            .map_err(|e| format!("Error initializing log4rs: {e}"))?;
    }
    Ok(())
}

fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l:<5} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .map_err(|e| format!("Error building log config: {e}"))?;
    Ok(config)
}
