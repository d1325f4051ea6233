//! log4rs setup.
//!
//! Diagnostics go to stderr so they never mix with the report or the
//! status line on stdout.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const DEFAULT_PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} - {m}{n}";

/// Initialise logging from `config_path`, or a stderr default when absent.
pub fn init(config_path: &Path) {
    if config_path.exists() {
        match log4rs::init_file(config_path, Default::default()) {
            Ok(()) => return,
            Err(e) => eprintln!(
                "Error loading log config {}: {e}, using defaults",
                config_path.display()
            ),
        }
    }
    if let Err(e) = init_default() {
        eprintln!("Error initializing log4rs: {e}");
    }
}

fn init_default() -> Result<(), Box<dyn Error>> {
    log4rs::init_config(default_config()?)?;
    Ok(())
}

fn default_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(DEFAULT_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    Ok(config)
}
