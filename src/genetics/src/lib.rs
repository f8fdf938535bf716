pub mod error;
pub use error::GeneticsError;

pub mod allele;
pub use allele::{AlleleConfig, DominanceType};

pub mod genotype;
pub use genotype::{Genotype, normalize, validate, validate_against_configs};

pub mod gamete;
pub use gamete::{Gamete, combine, generate_gametes};

pub mod phenotype;
pub use phenotype::{DisplayMode, phenotype_of};

pub mod cross;
pub use cross::{CrossResult, CrossType, GenotypeFrequency, ParentGametes, PhenotypeFrequency, calculate_cross};

pub mod ratio;
pub use ratio::simplify_ratio;

pub mod export;

pub mod preset;

mod history;
pub use history::{CrossHistory, HistoryEntry, DEFAULT_HISTORY_CAPACITY};

mod session;
pub use session::Session;
