use indexmap::IndexMap;
use log::{debug, trace};
use serde::Serialize;

use crate::{combine, generate_gametes, phenotype_of, simplify_ratio, AlleleConfig, DisplayMode, Gamete, Genotype};

mod cross_type;
pub use cross_type::CrossType;

/// Occurrences of a single genotype within a Punnett grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenotypeFrequency {
    pub genotype  : Genotype,
    pub count     : usize,
    pub percentage: f64,
    pub phenotype : String,
}

/// Occurrences of a single phenotype within a Punnett grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhenotypeFrequency {
    pub phenotype : String,
    pub count     : usize,
    pub percentage: f64,
}

/// Distinct gametes of each parent, in enumeration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParentGametes {
    pub parent1: Vec<Gamete>,
    pub parent2: Vec<Gamete>,
}

/// Outcome of a single cross.
///
/// # Fields:
/// - `grid`                 : Punnett grid. `grid[i][j]` is the offspring of the i-th gamete of
///                            parent 1 and the j-th gamete of parent 2.
/// - `genotype_frequencies` : One entry per distinct genotype, sorted by decreasing count.
/// - `phenotype_frequencies`: One entry per distinct phenotype, sorted by decreasing count.
/// - `gametes`              : Gametes of both parents (rows and columns of `grid`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossResult {
    grid                 : Vec<Vec<Genotype>>,
    genotype_frequencies : Vec<GenotypeFrequency>,
    phenotype_frequencies: Vec<PhenotypeFrequency>,
    gametes              : ParentGametes,
}

impl CrossResult {
    pub fn grid(&self) -> &[Vec<Genotype>] {&self.grid}

    pub fn genotype_frequencies(&self) -> &[GenotypeFrequency] {&self.genotype_frequencies}

    pub fn phenotype_frequencies(&self) -> &[PhenotypeFrequency] {&self.phenotype_frequencies}

    pub fn gametes(&self) -> &ParentGametes {&self.gametes}

    pub fn rows(&self) -> usize {self.gametes.parent1.len()}

    pub fn cols(&self) -> usize {self.gametes.parent2.len()}

    /// Total number of cells within the grid.
    pub fn total(&self) -> usize {self.rows() * self.cols()}

    /// Simplified genotype ratio, following the order of `genotype_frequencies`.
    pub fn genotype_ratio(&self) -> String {
        let counts: Vec<usize> = self.genotype_frequencies.iter().map(|freq| freq.count).collect();
        simplify_ratio(&counts)
    }

    /// Simplified phenotype ratio, following the order of `phenotype_frequencies` (e.g. "9:3:3:1").
    pub fn phenotype_ratio(&self) -> String {
        let counts: Vec<usize> = self.phenotype_frequencies.iter().map(|freq| freq.count).collect();
        simplify_ratio(&counts)
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    count as f64 / total as f64 * 100.0
}

/// Cross two genotypes and tally the resulting offspring.
///
/// Both genotypes are expected to have been validated against the same number of loci
/// beforehand. Frequencies are sorted by decreasing count; ties keep the order in which
/// they first appear when reading the grid row by row.
///
/// # Panics
/// if the two genotypes do not carry the same number of loci.
pub fn calculate_cross(genotype1: &str, genotype2: &str, configs: &[AlleleConfig], mode: DisplayMode) -> CrossResult {
    let gametes = ParentGametes {
        parent1: generate_gametes(genotype1),
        parent2: generate_gametes(genotype2),
    };

    let grid: Vec<Vec<Genotype>> = gametes.parent1.iter()
        .map(|row| gametes.parent2.iter().map(|col| combine(row, col)).collect())
        .collect();

    let total = gametes.parent1.len() * gametes.parent2.len();
    debug!("{genotype1} x {genotype2}: {} x {} grid ({total} cells)", gametes.parent1.len(), gametes.parent2.len());

    // ---- Tally genotypes in grid order.
    let mut genotype_counts: IndexMap<&Genotype, usize> = IndexMap::new();
    for genotype in grid.iter().flatten() {
        *genotype_counts.entry(genotype).or_insert(0) += 1;
    }

    // ---- Derive phenotypes once per distinct genotype.
    let mut genotype_frequencies = Vec::with_capacity(genotype_counts.len());
    let mut phenotype_counts: IndexMap<String, usize> = IndexMap::new();
    for (genotype, count) in genotype_counts {
        let phenotype = phenotype_of(genotype, configs, mode);
        trace!("{genotype: <10} x{count: <4} -> {phenotype}");
        *phenotype_counts.entry(phenotype.clone()).or_insert(0) += count;
        genotype_frequencies.push(GenotypeFrequency {
            genotype: genotype.clone(),
            count,
            percentage: percentage(count, total),
            phenotype,
        });
    }

    let mut phenotype_frequencies: Vec<PhenotypeFrequency> = phenotype_counts.into_iter()
        .map(|(phenotype, count)| PhenotypeFrequency{phenotype, count, percentage: percentage(count, total)})
        .collect();

    // sort_by is stable: ties retain their first-seen order.
    genotype_frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    phenotype_frequencies.sort_by(|a, b| b.count.cmp(&a.count));

    CrossResult{grid, genotype_frequencies, phenotype_frequencies, gametes}
}
