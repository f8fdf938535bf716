use std::{fmt::{self, Display, Formatter}, ops::Deref};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::AlleleConfig;

/// Diploid genotype, written as a concatenation of allele pairs, one pair per locus (e.g. "AaBb").
///
/// This is a plain value type: validation is performed by [`validate`], never by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genotype(String);

impl Genotype {
    /// Number of loci (allele pairs) carried by this genotype.
    pub fn loci(&self) -> usize {
        (self.0.chars().count() + 1) / 2
    }

    /// Iterate over the allele pairs of this genotype, in locus order.
    pub fn pairs(&self) -> impl Iterator<Item = [char; 2]> {
        allele_pairs(&self.0).into_iter()
    }

    #[must_use]
    pub fn normalized(&self) -> Self {
        Self(normalize(&self.0))
    }
}

impl Deref for Genotype {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Genotype {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Genotype {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Genotype {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Genotype {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Split a genotype string into its allele pairs. A dangling trailing allele is
/// treated as a homozygous pair.
pub(crate) fn allele_pairs(genotype: &str) -> Vec<[char; 2]> {
    let alleles: Vec<char> = genotype.chars().collect();
    alleles.chunks(2)
        .map(|pair| match *pair {
            [first, second] => [first, second],
            [lone]          => [lone, lone],
            _               => unreachable!("chunks(2) yields one or two alleles"),
        })
        .collect()
}

/// Check the shape of a genotype string.
///
/// Returns `true` when `genotype` holds exactly `expected_allele_count` characters, and every
/// consecutive pair of characters is made of two ASCII letters.
///
/// Note that letters are not checked against any locus configuration: `"Zz"` is a valid
/// monohybrid genotype. See [`validate_against_configs`] for a stricter check.
pub fn validate(genotype: &str, expected_allele_count: usize) -> bool {
    lazy_static! {
        static ref ALLELE_PAIR: Regex = Regex::new(r"^[A-Za-z]{2}$").expect("Failed to parse regex.");
    }

    let alleles: Vec<char> = genotype.chars().collect();
    if alleles.len() != expected_allele_count {
        return false
    }

    alleles.chunks(2).all(|pair| ALLELE_PAIR.is_match(&pair.iter().collect::<String>()))
}

/// Check that every allele of `genotype` matches the symbols of its configured locus.
/// Loci which lack a configuration are accepted as-is.
pub fn validate_against_configs(genotype: &str, configs: &[AlleleConfig]) -> bool {
    allele_pairs(genotype).iter()
        .zip(configs.iter())
        .all(|(pair, config)| pair.iter().all(|allele| config.matches(*allele)))
}

/// Put the uppercase allele first within homozygous-letter pairs: `"aA"` becomes `"Aa"`.
///
/// Pairs made of two distinct letters are left untouched.
pub fn normalize(genotype: &str) -> String {
    let alleles: Vec<char> = genotype.chars().collect();
    let mut normalized = String::with_capacity(genotype.len());
    for pair in alleles.chunks(2) {
        match *pair {
            [first, second] if first.eq_ignore_ascii_case(&second) && first.is_lowercase() && second.is_uppercase() => {
                normalized.push(second);
                normalized.push(first);
            },
            _ => normalized.extend(pair),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_boundaries() {
        assert!(validate("Aa", 2));
        assert!(validate("AaBbCc", 6));
        assert!(validate("Zz", 2));
        assert!(! validate("Aa1", 2));
        assert!(! validate("A1", 2));
        assert!(! validate("AaBb", 2));
        assert!(! validate("A", 2));
        assert!(! validate("", 2));
        assert!(! validate("Aab", 3));
        assert!(! validate("Aé", 2));
    }

    #[test]
    fn validate_against_configured_symbols() {
        let configs = [AlleleConfig::generic(0), AlleleConfig::generic(1)];
        assert!(validate_against_configs("AaBb", &configs));
        assert!(validate_against_configs("aabB", &configs));
        assert!(! validate_against_configs("Zz", &configs));
        assert!(! validate_against_configs("AaCc", &configs));
        // Loci without any configuration are not checked.
        assert!(validate_against_configs("AaBbZz", &configs));
    }

    #[test]
    fn normalize_pairs() {
        assert_eq!(normalize("aA"), "Aa");
        assert_eq!(normalize("aAbB"), "AaBb");
        assert_eq!(normalize("AaBB"), "AaBB");
        assert_eq!(normalize("aabb"), "aabb");
        assert_eq!(normalize("bA"), "bA");
        assert_eq!(normalize("aAb"), "Aab");
    }

    #[test]
    fn normalize_is_idempotent() {
        for genotype in ["aA", "AaBb", "aAbBcC", "aabBCc", "AA", "bA", "zZyY"] {
            let once = normalize(genotype);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn genotype_pairs() {
        let genotype = Genotype::from("aABb");
        assert_eq!(genotype.loci(), 2);
        assert_eq!(genotype.pairs().collect::<Vec<_>>(), vec![['a', 'A'], ['B', 'b']]);
        assert_eq!(genotype.normalized().to_string(), "AaBb");
        assert_eq!(allele_pairs("Aab"), vec![['A', 'a'], ['b', 'b']]);
    }

    #[test]
    fn display_padding() {
        assert_eq!(format!("'{: <6}'", Genotype::from("Aa")), "'Aa    '");
    }
}
