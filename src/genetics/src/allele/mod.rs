use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::GeneticsError;

mod dominance;
pub use dominance::DominanceType;

/// Configuration of a single locus.
///
/// # Fields:
/// - `dominant_symbol`      : Uppercase ASCII letter standing for the dominant allele (e.g. 'A')
/// - `recessive_symbol`     : Lowercase counterpart of `dominant_symbol` (e.g. 'a')
/// - `trait_name`           : Human readable name of the trait (e.g. "Seed shape")
/// - `dominant_trait_label` : Phenotype expressed when at least one dominant allele is present.
/// - `recessive_trait_label`: Phenotype expressed by homozygous recessive individuals.
/// - `dominance`            : Dominance metadata. Carried along, but phenotypes are always
///                            computed using complete dominance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AlleleConfigRecord", into = "AlleleConfigRecord")]
pub struct AlleleConfig {
    dominant_symbol      : char,
    recessive_symbol     : char,
    trait_name           : String,
    dominant_trait_label : String,
    recessive_trait_label: String,
    dominance            : DominanceType,
}

impl AlleleConfig {
    /// Instantiate a new locus configuration. `symbol` may be provided in either case:
    /// the dominant and recessive symbols are derived from it.
    ///
    /// # Errors
    /// - `InvalidAlleleSymbol` if `symbol` is not an ASCII letter.
    pub fn new(symbol: char, trait_name: &str, dominant_trait_label: &str, recessive_trait_label: &str) -> Result<Self, GeneticsError> {
        if ! symbol.is_ascii_alphabetic() {
            return Err(GeneticsError::InvalidAlleleSymbol(symbol))
        }
        Ok(Self::from_parts(symbol, trait_name, dominant_trait_label, recessive_trait_label))
    }

    /// Unchecked constructor, reserved for compile-time known symbols.
    pub(crate) fn from_parts(symbol: char, trait_name: &str, dominant_trait_label: &str, recessive_trait_label: &str) -> Self {
        Self {
            dominant_symbol      : symbol.to_ascii_uppercase(),
            recessive_symbol     : symbol.to_ascii_lowercase(),
            trait_name           : trait_name.to_string(),
            dominant_trait_label : dominant_trait_label.to_string(),
            recessive_trait_label: recessive_trait_label.to_string(),
            dominance            : DominanceType::default(),
        }
    }

    /// Generic configuration of the i-th locus: 'A' for locus 0, 'B' for locus 1, etc.
    ///
    /// # Panics
    /// if `index` lies beyond the 26 letters of the latin alphabet.
    #[must_use]
    pub fn generic(index: usize) -> Self {
        let symbol = char::from(b'A' + u8::try_from(index).ok().filter(|i| *i < 26).expect("Locus index out of the latin alphabet"));
        let recessive = symbol.to_ascii_lowercase();
        Self::from_parts(symbol, &format!("Trait {symbol}"), &format!("Dominant {symbol}"), &format!("Recessive {recessive}"))
    }

    #[must_use]
    pub fn with_dominance(mut self, dominance: DominanceType) -> Self {
        self.dominance = dominance;
        self
    }

    pub fn dominant_symbol(&self) -> char {self.dominant_symbol}

    pub fn recessive_symbol(&self) -> char {self.recessive_symbol}

    pub fn trait_name(&self) -> &str {&self.trait_name}

    pub fn dominant_trait_label(&self) -> &str {&self.dominant_trait_label}

    pub fn recessive_trait_label(&self) -> &str {&self.recessive_trait_label}

    pub fn dominance(&self) -> DominanceType {self.dominance}

    /// Return the phenotype label matching the expressed allele.
    pub fn label(&self, dominant: bool) -> &str {
        match dominant {
            true  => &self.dominant_trait_label,
            false => &self.recessive_trait_label,
        }
    }

    /// Check whether `allele` belongs to this locus.
    pub fn matches(&self, allele: char) -> bool {
        allele == self.dominant_symbol || allele == self.recessive_symbol
    }
}

impl Display for AlleleConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} - {: <14} - {} / {} ({})",
            self.dominant_symbol,
            self.recessive_symbol,
            self.trait_name,
            self.dominant_trait_label,
            self.recessive_trait_label,
            self.dominance
        )
    }
}

/// Serialized form of an `AlleleConfig`. The recessive symbol is optional, but must
/// match the dominant one when provided.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AlleleConfigRecord {
    dominant_symbol      : char,
    #[serde(default)]
    recessive_symbol     : Option<char>,
    trait_name           : String,
    dominant_trait_label : String,
    recessive_trait_label: String,
    #[serde(default)]
    dominance            : DominanceType,
}

impl TryFrom<AlleleConfigRecord> for AlleleConfig {
    type Error = GeneticsError;

    fn try_from(record: AlleleConfigRecord) -> Result<Self, Self::Error> {
        if ! record.dominant_symbol.is_ascii_uppercase() {
            return Err(GeneticsError::InvalidAlleleSymbol(record.dominant_symbol))
        }
        let config = Self::new(record.dominant_symbol, &record.trait_name, &record.dominant_trait_label, &record.recessive_trait_label)?;
        match record.recessive_symbol {
            Some(recessive) if recessive != config.recessive_symbol => {
                Err(GeneticsError::MismatchedRecessiveSymbol{dominant: config.dominant_symbol, recessive})
            },
            _ => Ok(config.with_dominance(record.dominance)),
        }
    }
}

impl From<AlleleConfig> for AlleleConfigRecord {
    fn from(config: AlleleConfig) -> Self {
        Self {
            dominant_symbol      : config.dominant_symbol,
            recessive_symbol     : Some(config.recessive_symbol),
            trait_name           : config.trait_name,
            dominant_trait_label : config.dominant_trait_label,
            recessive_trait_label: config.recessive_trait_label,
            dominance            : config.dominance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_follow_case_invariant() {
        for symbol in ['R', 'r'] {
            let config = AlleleConfig::new(symbol, "Seed shape", "Round", "Wrinkled").unwrap();
            assert_eq!(config.dominant_symbol(), 'R');
            assert_eq!(config.recessive_symbol(), 'r');
        }
    }

    #[test]
    fn non_letter_symbol_is_rejected() {
        assert_eq!(
            AlleleConfig::new('3', "Seed shape", "Round", "Wrinkled"),
            Err(GeneticsError::InvalidAlleleSymbol('3'))
        );
    }

    #[test]
    fn generic_loci() {
        let config = AlleleConfig::generic(1);
        assert_eq!(config.dominant_symbol(), 'B');
        assert_eq!(config.trait_name(), "Trait B");
        assert_eq!(config.label(true), "Dominant B");
        assert_eq!(config.label(false), "Recessive b");
        assert!(config.matches('b'));
        assert!(! config.matches('a'));
    }

    #[test]
    #[should_panic]
    fn generic_out_of_alphabet() {
        let _ = AlleleConfig::generic(26);
    }

    #[test]
    fn deserialize_minimal_record() {
        let yaml = "dominant_symbol: Y\ntrait_name: Seed color\ndominant_trait_label: Yellow\nrecessive_trait_label: Green\n";
        let config: AlleleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.recessive_symbol(), 'y');
        assert_eq!(config.dominance(), DominanceType::Complete);
    }

    #[test]
    fn deserialize_rejects_mismatched_recessive() {
        let yaml = "dominant_symbol: Y\nrecessive_symbol: g\ntrait_name: Seed color\ndominant_trait_label: Yellow\nrecessive_trait_label: Green\n";
        assert!(serde_yaml::from_str::<AlleleConfig>(yaml).is_err());
    }

    #[test]
    fn deserialize_rejects_lowercase_dominant() {
        let yaml = "dominant_symbol: y\ntrait_name: Seed color\ndominant_trait_label: Yellow\nrecessive_trait_label: Green\n";
        assert!(serde_yaml::from_str::<AlleleConfig>(yaml).is_err());
    }

    #[test]
    fn serialize_keeps_dominance() {
        let config = AlleleConfig::generic(0).with_dominance(DominanceType::Codominant);
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("dominance: codominant"));
        assert!(yaml.contains("recessive_symbol: a"));
        let back: AlleleConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }
}
