//! Logger setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

const FALLBACK_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialise log4rs from `config_file`, or log `info` to stderr if it can't be loaded.
pub fn init(config_file: &str) {
    match log4rs::init_file(config_file, Default::default()) {
        Ok(()) => log::debug!("logging configured from {config_file}"),
        Err(e) => {
            let config = match fallback_config() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error building fallback log config: {e}");
                    return;
                }
            };
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Error initializing log4rs: {e}");
                return;
            }
            log::debug!("{config_file} not loaded ({e}), logging to stderr");
        }
    }
}

fn fallback_config() -> Result<Config, log4rs::config::runtime::ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
}
