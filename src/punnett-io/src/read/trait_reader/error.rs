use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraitReaderError {
    #[error("Failed to open trait definition file")]
    OpenFile(#[source] std::io::Error),

    #[error("Failed to parse trait definitions. Expected a yaml list of entries carrying 'dominant_symbol', 'trait_name', 'dominant_trait_label' and 'recessive_trait_label'")]
    Deserialize(#[source] serde_yaml::Error),

    #[error("Trait definition file {0} does not define any locus")]
    Empty(PathBuf),
}
