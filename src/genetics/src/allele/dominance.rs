use std::{fmt::{self, Display, Formatter}, str::FromStr};

use serde::{Deserialize, Serialize};

/// Dominance relationship between the two alleles of a locus.
///
/// This is descriptive metadata only: phenotypes are derived using complete dominance,
/// whatever the value stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DominanceType {
    Complete,
    Incomplete,
    Codominant,
    SexLinked,
}

impl Default for DominanceType {
    fn default() -> Self {Self::Complete}
}

impl FromStr for DominanceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "complete"   => Ok(Self::Complete),
            "incomplete" => Ok(Self::Incomplete),
            "codominant" => Ok(Self::Codominant),
            "sex-linked" => Ok(Self::SexLinked),
            other        => Err(format!("Invalid dominance type: {other}")),
        }
    }
}

impl Display for DominanceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Complete   => "complete",
            Self::Incomplete => "incomplete",
            Self::Codominant => "codominant",
            Self::SexLinked  => "sex-linked",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", DominanceType::Complete), "complete");
        assert_eq!(format!("{}", DominanceType::SexLinked), "sex-linked");
    }

    #[test]
    fn from_str() {
        assert_eq!(DominanceType::from_str("COMPLETE"), Ok(DominanceType::Complete));
        assert_eq!(DominanceType::from_str("sex_linked"), Ok(DominanceType::SexLinked));
        assert_eq!(DominanceType::from_str("Codominant"), Ok(DominanceType::Codominant));
        assert!(DominanceType::from_str("epistatic").is_err());
    }
}
