// crates/engine/src/lib.rs
pub mod backup;
pub mod config;
pub mod counter;
pub mod error;
pub mod processor;
pub mod table;

use crate::config::Config;
use crate::counter::FrequencyCounter;
use crate::error::Result;

/// Run the frequency engine: load the input file and write the backup.
///
/// Returns a read-only `FrequencyCounter` ready to answer queries.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the backup cannot be
/// written. The caller decides whether that ends the process.
pub fn run(config: &Config) -> Result<FrequencyCounter> {
    FrequencyCounter::load(config)
}
