use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneticsError {
    #[error("Invalid genotype for {parent}: '{genotype}'. Expected {expected} letters, grouped as allele pairs (e.g. 'Aa')")]
    InvalidGenotype{parent: String, genotype: String, expected: usize},

    #[error("Genotype '{genotype}' of {parent} uses allele symbols which do not match the configured loci")]
    UnexpectedAlleleSymbol{parent: String, genotype: String},

    #[error("Invalid allele symbol '{0}'. Allele symbols must be ASCII letters")]
    InvalidAlleleSymbol(char),

    #[error("Recessive symbol '{recessive}' is not the lowercase counterpart of dominant symbol '{dominant}'")]
    MismatchedRecessiveSymbol{dominant: char, recessive: char},

    #[error("Unknown cross type '{0}'. Valid values are: mono, di, tri, tetra, penta")]
    UnknownCrossType(String),

    #[error("Unsupported number of loci: {0}. Crosses may track between 1 and 5 loci")]
    UnsupportedLocusCount(usize),

    #[error("Unknown display mode '{0}'. Valid values are: full, simple")]
    UnknownDisplayMode(String),

    #[error("Unknown organism preset '{0}'")]
    UnknownPreset(String),
}
