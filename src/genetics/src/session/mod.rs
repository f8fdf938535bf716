use located_error::prelude::*;
use log::{debug, info, warn};

use crate::{
    calculate_cross, validate, validate_against_configs,
    AlleleConfig, CrossHistory, CrossResult, CrossType, DisplayMode, GeneticsError, HistoryEntry,
};

/// Caller-owned cross settings and history.
///
/// The genetics functions of this crate are stateless: a `Session` gathers whatever a front-end
/// would otherwise keep around (selected cross type, locus configuration, display mode, recent
/// crosses), and guarantees that parents are validated before any cross gets computed.
///
/// # Fields:
/// - `cross_type`: Number of loci tracked by every cross of this session.
/// - `configs`   : Locus configurations, truncated to `cross_type.loci()`.
/// - `mode`      : Phenotype rendering mode.
/// - `strict`    : Also require parent alleles to match the configured locus symbols.
/// - `history`   : Most recent crosses.
#[derive(Debug, Clone)]
pub struct Session {
    cross_type: CrossType,
    configs   : Vec<AlleleConfig>,
    mode      : DisplayMode,
    strict    : bool,
    history   : CrossHistory,
}

impl Session {
    pub fn new(cross_type: CrossType, mut configs: Vec<AlleleConfig>, mode: DisplayMode) -> Self {
        let loci = cross_type.loci();
        if configs.len() < loci {
            warn!("Only {} locus configuration(s) provided for a {} cross. Missing loci will use generic labels.", configs.len(), cross_type.label());
        }
        configs.truncate(loci);
        Self{cross_type, configs, mode, strict: false, history: CrossHistory::default()}
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history = CrossHistory::new(capacity);
        self
    }

    pub fn cross_type(&self) -> CrossType {self.cross_type}

    pub fn configs(&self) -> &[AlleleConfig] {&self.configs}

    pub fn mode(&self) -> DisplayMode {self.mode}

    pub fn history(&self) -> &CrossHistory {&self.history}

    /// Ensure a parent genotype may take part in a cross of this session.
    ///
    /// # Errors
    /// - `InvalidGenotype` if `genotype` does not hold `cross_type.expected_allele_count()` letters.
    /// - `UnexpectedAlleleSymbol` if the session is strict, and an allele does not belong to its locus.
    pub fn check_parent(&self, parent: &str, genotype: &str) -> Result<(), GeneticsError> {
        let expected = self.cross_type.expected_allele_count();
        if ! validate(genotype, expected) {
            return Err(GeneticsError::InvalidGenotype{parent: parent.to_string(), genotype: genotype.to_string(), expected})
        }
        if self.strict && ! validate_against_configs(genotype, &self.configs) {
            return Err(GeneticsError::UnexpectedAlleleSymbol{parent: parent.to_string(), genotype: genotype.to_string()})
        }
        Ok(())
    }

    /// Validate both parents, cross them, and record the result within the session history.
    ///
    /// # Errors
    /// if any of the two parents fails validation. No cross is computed in that case.
    pub fn cross(&mut self, parent1: &str, parent2: &str) -> Result<CrossResult> {
        self.check_parent("parent 1", parent1).loc("While validating the first parent")?;
        self.check_parent("parent 2", parent2).loc("While validating the second parent")?;

        info!("Computing {} cross: {parent1} x {parent2}", self.cross_type.label());
        let result = calculate_cross(parent1, parent2, &self.configs, self.mode);
        debug!("Phenotype ratio: {} - Genotype ratio: {}", result.phenotype_ratio(), result.genotype_ratio());

        self.history.push(HistoryEntry {
            parent1   : parent1.into(),
            parent2   : parent2.into(),
            cross_type: self.cross_type,
            result    : result.clone(),
            timestamp : chrono::Local::now().naive_local(),
        });
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset;

    fn session(cross_type: CrossType) -> Session {
        Session::new(cross_type, preset::default_configs(5), DisplayMode::Full)
    }

    #[test]
    fn configs_are_truncated_to_loci() {
        assert_eq!(session(CrossType::Di).configs().len(), 2);
        let short = Session::new(CrossType::Tri, preset::default_configs(1), DisplayMode::Simple);
        assert_eq!(short.configs().len(), 1);
    }

    #[test]
    fn cross_is_recorded() -> Result<()> {
        let mut session = session(CrossType::Di);
        let result = session.cross("AaBb", "AaBb")?;
        assert_eq!(result.phenotype_ratio(), "9:3:3:1");
        assert_eq!(session.history().len(), 1);
        let latest = session.history().latest().unwrap();
        assert_eq!(&*latest.parent1, "AaBb");
        assert_eq!(latest.cross_type, CrossType::Di);
        assert_eq!(latest.result, result);
        Ok(())
    }

    #[test]
    fn invalid_parent_is_rejected() {
        let mut session = session(CrossType::Mono);
        for (parent1, parent2, culprit) in [("AaBb", "Aa", "parent 1"), ("Aa", "A1", "parent 2"), ("Aa", "A", "parent 2")] {
            let err = session.cross(parent1, parent2).unwrap_err();
            match err.downcast_ref::<GeneticsError>() {
                Some(GeneticsError::InvalidGenotype{parent, expected, ..}) => {
                    assert_eq!(parent, culprit);
                    assert_eq!(*expected, 2);
                },
                other => panic!("Unexpected error: {other:?}"),
            }
        }
        assert!(session.history().is_empty());
    }

    #[test]
    fn lenient_by_default() -> Result<()> {
        let mut session = session(CrossType::Mono);
        let result = session.cross("Zz", "zz")?;
        assert_eq!(result.phenotype_ratio(), "1:1");
        Ok(())
    }

    #[test]
    fn strict_mode_checks_symbols() {
        let mut session = session(CrossType::Mono).strict(true);
        assert!(session.cross("Aa", "aa").is_ok());
        let err = session.cross("Zz", "aa").unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeneticsError>(),
            Some(&GeneticsError::UnexpectedAlleleSymbol{parent: "parent 1".to_string(), genotype: "Zz".to_string()})
        );
    }

    #[test]
    fn history_capacity_is_honored() -> Result<()> {
        let mut session = session(CrossType::Mono).history_capacity(2);
        for parent2 in ["AA", "Aa", "aa"] {
            session.cross("Aa", parent2)?;
        }
        let parents: Vec<&str> = session.history().iter().map(|entry| &*entry.parent2).collect();
        assert_eq!(parents, vec!["aa", "Aa"]);
        Ok(())
    }
}
