use std::{fmt::{self, Display, Formatter}, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{genotype::allele_pairs, AlleleConfig, GeneticsError};

/// Placeholder labels, used for loci which lack a configuration.
const DOMINANT_PLACEHOLDER : &str = "Dominant";
const RECESSIVE_PLACEHOLDER: &str = "Recessive";

/// Phenotype rendering mode.
/// - `Full`  : trait labels, joined with `" + "` (e.g. "Round + Green")
/// - `Simple`: one `D` (dominant) or `r` (recessive) code per locus (e.g. "Dr")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Full,
    Simple,
}

impl Default for DisplayMode {
    fn default() -> Self {Self::Full}
}

impl DisplayMode {
    fn separator(self) -> &'static str {
        match self {
            Self::Full   => " + ",
            Self::Simple => "",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = GeneticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full"   => Ok(Self::Full),
            "simple" => Ok(Self::Simple),
            _        => Err(GeneticsError::UnknownDisplayMode(s.to_string())),
        }
    }
}

impl Display for DisplayMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Full   => "full",
            Self::Simple => "simple",
        })
    }
}

/// Derive the phenotype expressed by a genotype, using complete dominance: a locus expresses
/// its dominant trait as soon as one of its alleles is uppercase.
///
/// `configs[i]` provides the labels of locus `i`. Loci beyond the end of `configs` are labeled
/// with a generic "Dominant" / "Recessive" placeholder.
pub fn phenotype_of(genotype: &str, configs: &[AlleleConfig], mode: DisplayMode) -> String {
    allele_pairs(genotype).iter()
        .enumerate()
        .map(|(locus, pair)| {
            let dominant = pair.iter().any(|allele| allele.is_uppercase());
            match (mode, configs.get(locus)) {
                (DisplayMode::Simple, _)      => if dominant {"D"} else {"r"},
                (DisplayMode::Full, Some(cfg)) => cfg.label(dominant),
                (DisplayMode::Full, None)      => if dominant {DOMINANT_PLACEHOLDER} else {RECESSIVE_PLACEHOLDER},
            }
        })
        .join(mode.separator())
}
