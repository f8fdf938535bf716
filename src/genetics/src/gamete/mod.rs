use std::{fmt::{self, Display, Formatter}, ops::Deref};

use indexmap::IndexSet;
use log::trace;
use serde::Serialize;

use crate::{genotype::allele_pairs, normalize, Genotype};

/// Haploid allele combination: one allele per locus (e.g. "Ab").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Gamete(String);

impl Deref for Gamete {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Gamete {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Gamete {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Enumerate the distinct gametes a genotype may produce.
///
/// Only heterozygous loci offer a choice: every combination of their alleles is visited, using
/// the bits of a counter as the allele choices, while homozygous loci always contribute their
/// single allele. The first heterozygous locus is driven by the most significant bit, so that
/// gametes come out in the same order as a depth-first "first allele, then second allele" walk
/// over every locus, keeping the first occurrence of each gamete.
///
/// A genotype with H heterozygous loci thus yields exactly 2^H gametes.
///
/// # Panics
/// if the genotype carries `usize::BITS` heterozygous loci or more.
pub fn generate_gametes(genotype: &str) -> Vec<Gamete> {
    let pairs = allele_pairs(&normalize(genotype));
    let heterozygous: Vec<usize> = pairs.iter()
        .enumerate()
        .filter(|(_, pair)| pair[0] != pair[1])
        .map(|(locus, _)| locus)
        .collect();

    let choices = u32::try_from(heterozygous.len()).ok()
        .and_then(|het| 1usize.checked_shl(het))
        .expect("Too many heterozygous loci to enumerate gametes");

    let mut gametes: IndexSet<String> = IndexSet::with_capacity(choices);
    for mask in 0..choices {
        let mut alleles: Vec<char> = pairs.iter().map(|pair| pair[0]).collect();
        for (rank, locus) in heterozygous.iter().enumerate() {
            let bit = (mask >> (heterozygous.len() - 1 - rank)) & 1;
            alleles[*locus] = pairs[*locus][bit];
        }
        gametes.insert(alleles.into_iter().collect());
    }

    trace!("{genotype}: {} distinct gametes over {} heterozygous loci", gametes.len(), heterozygous.len());
    gametes.into_iter().map(Gamete).collect()
}

/// Order the two alleles of a locus: dominant (uppercase) before recessive (lowercase).
/// Alleles sharing the same case keep their encounter order.
fn order_alleles(first: char, second: char) -> [char; 2] {
    match (first.is_uppercase(), second.is_uppercase()) {
        (false, true) => [second, first],
        (true, false) => [first, second],
        _             => [first, second],
    }
}

/// Fertilize `gamete_a` with `gamete_b`, producing the offspring's genotype.
///
/// # Panics
/// if both gametes do not carry the same number of alleles. Parents of a cross must always
/// be validated against the same number of loci.
pub fn combine(gamete_a: &str, gamete_b: &str) -> Genotype {
    assert_eq!(gamete_a.chars().count(), gamete_b.chars().count(), "Attempting to combine gametes of unequal lengths");

    gamete_a.chars()
        .zip(gamete_b.chars())
        .flat_map(|(a, b)| order_alleles(a, b))
        .collect::<String>()
        .into()
}
