// crates/engine/src/counter.rs
use crate::backup;
use crate::config::Config;
use crate::error::Result;
use crate::processor;
use crate::table::FrequencyTable;
use log::{debug, info};
use std::path::Path;

/// One line of the histogram: the item name and its bar of markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramRow<'a> {
    pub name: &'a str,
    pub marks: String,
}

/// A loaded, read-only frequency table plus the marker used to draw it.
#[derive(Debug, Clone)]
pub struct FrequencyCounter {
    table: FrequencyTable,
    marker: char,
}

impl FrequencyCounter {
    /// Load `config.input` and write the resulting table to `config.backup`.
    ///
    /// # Errors
    ///
    /// Propagates input failures from the loader and output failures from
    /// the backup writer. Nothing is returned unless both succeed.
    pub fn load(config: &Config) -> Result<Self> {
        debug!("loading items from {}", config.input.display());
        let table = processor::load_table(&config.input)?;
        info!(
            "loaded {} tokens ({} distinct items) from {}",
            table.total(),
            table.len(),
            config.input.display()
        );

        let counter = Self::from_table(table, config.marker);
        counter.save(&config.backup)?;
        Ok(counter)
    }

    pub fn from_table(table: FrequencyTable, marker: char) -> Self {
        Self { table, marker }
    }

    #[must_use]
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    #[must_use]
    pub fn query(&self, name: &str) -> u64 {
        self.table.get(name)
    }

    #[must_use]
    pub fn list_all(&self) -> Vec<(&str, u64)> {
        self.table.entries().collect()
    }

    #[must_use]
    pub fn histogram(&self) -> Vec<HistogramRow<'_>> {
        self.table
            .entries()
            .map(|(name, count)| HistogramRow {
                name,
                marks: std::iter::repeat_n(self.marker, usize::try_from(count).unwrap_or(usize::MAX))
                    .collect(),
            })
            .collect()
    }

    /// # Errors
    ///
    /// See [`backup::save`].
    pub fn save(&self, destination: &Path) -> Result<()> {
        backup::save(&self.table, destination)?;
        info!(
            "wrote {} items to backup {}",
            self.table.len(),
            destination.display()
        );
        Ok(())
    }
}
