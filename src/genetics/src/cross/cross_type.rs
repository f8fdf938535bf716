use std::{fmt::{self, Display, Formatter}, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::GeneticsError;

/// Number of loci tracked simultaneously during a cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossType {
    Mono,
    Di,
    Tri,
    Tetra,
    Penta,
}

impl Default for CrossType {
    fn default() -> Self {Self::Mono}
}

impl CrossType {
    pub const ALL: [CrossType; 5] = [Self::Mono, Self::Di, Self::Tri, Self::Tetra, Self::Penta];

    pub fn loci(self) -> usize {
        match self {
            Self::Mono  => 1,
            Self::Di    => 2,
            Self::Tri   => 3,
            Self::Tetra => 4,
            Self::Penta => 5,
        }
    }

    /// Number of letters expected within a parent genotype: two alleles per locus.
    pub fn expected_allele_count(self) -> usize {
        2 * self.loci()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mono  => "Monohybrid",
            Self::Di    => "Dihybrid",
            Self::Tri   => "Trihybrid",
            Self::Tetra => "Tetrahybrid",
            Self::Penta => "Pentahybrid",
        }
    }

    /// # Errors
    /// - `UnsupportedLocusCount` if `loci` does not lie within `[1, 5]`
    pub fn from_loci(loci: usize) -> Result<Self, GeneticsError> {
        Self::ALL.into_iter()
            .find(|cross_type| cross_type.loci() == loci)
            .ok_or(GeneticsError::UnsupportedLocusCount(loci))
    }

    /// Infer the cross type from the length of a genotype string.
    ///
    /// # Errors
    /// - `UnsupportedLocusCount` if the genotype is of odd length, or carries an unsupported number of loci.
    pub fn from_genotype(genotype: &str) -> Result<Self, GeneticsError> {
        let alleles = genotype.chars().count();
        match alleles % 2 {
            0 => Self::from_loci(alleles / 2),
            _ => Err(GeneticsError::UnsupportedLocusCount(alleles / 2)),
        }
    }
}

impl FromStr for CrossType {
    type Err = GeneticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mono"  | "monohybrid"  => Ok(Self::Mono),
            "di"    | "dihybrid"    => Ok(Self::Di),
            "tri"   | "trihybrid"   => Ok(Self::Tri),
            "tetra" | "tetrahybrid" => Ok(Self::Tetra),
            "penta" | "pentahybrid" => Ok(Self::Penta),
            _                       => Err(GeneticsError::UnknownCrossType(s.to_string())),
        }
    }
}

impl Display for CrossType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Mono  => "mono",
            Self::Di    => "di",
            Self::Tri   => "tri",
            Self::Tetra => "tetra",
            Self::Penta => "penta",
        })
    }
}
