// crates/cli/src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;
pub use freq_tally_engine::config::{Config, ConfigBuilder};
use log::LevelFilter;

/// Everything the binary needs: the engine config plus presentation settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: Config,
    pub format: OutputFormat,
    pub log_level: LevelFilter,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        let engine = ConfigBuilder::default()
            .input(args.input)
            .backup(args.backup)
            .marker(args.marker)
            .build()
            .expect("Failed to build config");

        Self {
            engine,
            format: args.format,
            log_level: level_from_verbosity(args.verbose),
        }
    }
}

fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}
