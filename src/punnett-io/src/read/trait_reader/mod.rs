use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use genetics::AlleleConfig;
use itertools::Itertools;
use located_error::prelude::*;
use log::{debug, warn};

mod error;
pub use error::TraitReaderError;

/// Expected file extensions of a trait definition file.
pub const TRAIT_EXT: [&str; 2] = ["yaml", "yml"];

/// Trait definition file reader (`.yaml` extension).
/// ### File characteristics:
/// - A yaml list, holding one entry per locus, in locus order.
/// - Entry keys: `dominant_symbol`, `trait_name`, `dominant_trait_label`, `recessive_trait_label`,
///   and optionally `recessive_symbol` and `dominance`.
/// ### Fields:
/// - `source_file`: path to the source `.yaml` file
/// - `configs`    : parsed locus configurations.
#[derive(Debug, Clone)]
pub struct TraitReader {
    pub source_file: PathBuf,
    configs        : Vec<AlleleConfig>,
}

impl TraitReader {
    /// Parse a trait definition file.
    ///
    /// # Errors
    /// - if `path` cannot be opened.
    /// - if its contents are not a valid list of locus configurations.
    /// - if the file does not define any locus.
    pub fn new(path: &Path) -> Result<Self> {
        use TraitReaderError::{OpenFile, Deserialize, Empty};
        let loc_msg = || format!("While parsing trait definitions from {}", path.display());

        let has_yaml_ext = path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| TRAIT_EXT.contains(&ext));
        if ! has_yaml_ext {
            warn!("{} does not carry a yaml extension. Attempting to parse it anyway.", path.display());
        }

        let file = File::open(path).map_err(OpenFile).with_loc(loc_msg)?;
        let configs: Vec<AlleleConfig> = serde_yaml::from_reader(BufReader::new(file))
            .map_err(Deserialize)
            .with_loc(loc_msg)?;

        if configs.is_empty() {
            return Err(Empty(path.to_path_buf())).with_loc(loc_msg)
        }

        let duplicates: Vec<char> = configs.iter().map(AlleleConfig::dominant_symbol).duplicates().collect();
        if ! duplicates.is_empty() {
            warn!("Allele symbol(s) {duplicates:?} are used by more than one locus in {}", path.display());
        }

        debug!("Parsed {} locus configuration(s) from {}", configs.len(), path.display());
        Ok(Self{source_file: path.to_path_buf(), configs})
    }

    pub fn configs(&self) -> &[AlleleConfig] {
        &self.configs
    }

    pub fn into_configs(self) -> Vec<AlleleConfig> {
        self.configs
    }
}
