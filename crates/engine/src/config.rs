use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "grocery_items_input.txt";
pub const DEFAULT_BACKUP: &str = "frequency.dat";
pub const DEFAULT_MARKER: char = '*';

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Whitespace-separated item tokens, read once at startup.
    #[builder(default = "PathBuf::from(DEFAULT_INPUT)")]
    pub input: PathBuf,
    /// Snapshot destination, overwritten every time the table is loaded.
    #[builder(default = "PathBuf::from(DEFAULT_BACKUP)")]
    pub backup: PathBuf,
    #[builder(default = "DEFAULT_MARKER")]
    pub marker: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            backup: PathBuf::from(DEFAULT_BACKUP),
            marker: DEFAULT_MARKER,
        }
    }
}
