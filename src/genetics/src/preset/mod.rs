//! Built-in organism presets: ready-made locus configurations for classic crosses.

use crate::{AlleleConfig, DominanceType, GeneticsError};

/// Names of every built-in preset.
pub const PRESET_NAMES: [&str; 3] = ["default", "pea", "drosophila"];

/// Maximum number of loci described by a preset.
pub const PRESET_LOCI: usize = 5;

/// Retrieve the locus configurations of a named preset (case-insensitive).
///
/// # Errors
/// - `UnknownPreset` if `name` does not match any built-in preset.
pub fn preset(name: &str) -> Result<Vec<AlleleConfig>, GeneticsError> {
    match name.to_lowercase().as_str() {
        "default"    => Ok(default_configs(PRESET_LOCI)),
        "pea"        => Ok(pea()),
        "drosophila" => Ok(drosophila()),
        _            => Err(GeneticsError::UnknownPreset(name.to_string())),
    }
}

/// Generic configurations: loci 'A', 'B', 'C', ... labeled "Dominant A" / "Recessive a", etc.
pub fn default_configs(loci: usize) -> Vec<AlleleConfig> {
    (0..loci).map(AlleleConfig::generic).collect()
}

/// Mendel's garden pea (Pisum sativum) traits.
fn pea() -> Vec<AlleleConfig> {
    vec![
        AlleleConfig::from_parts('R', "Seed shape",   "Round",  "Wrinkled"),
        AlleleConfig::from_parts('Y', "Seed color",   "Yellow", "Green"),
        AlleleConfig::from_parts('P', "Flower color", "Purple", "White"),
        AlleleConfig::from_parts('I', "Pod shape",    "Inflated", "Constricted"),
        AlleleConfig::from_parts('T', "Plant height", "Tall",   "Short"),
    ]
}

/// Fruit fly (Drosophila melanogaster) traits.
fn drosophila() -> Vec<AlleleConfig> {
    vec![
        AlleleConfig::from_parts('B', "Body color", "Gray body",       "Black body"),
        AlleleConfig::from_parts('V', "Wing shape", "Normal wings",    "Vestigial wings"),
        AlleleConfig::from_parts('R', "Eye color",  "Red eyes",        "White eyes").with_dominance(DominanceType::SexLinked),
        AlleleConfig::from_parts('S', "Bristles",   "Normal bristles", "Forked bristles").with_dominance(DominanceType::SexLinked),
        AlleleConfig::from_parts('A', "Antennae",   "Normal antennae", "Aristapedia"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_resolves() {
        for name in PRESET_NAMES {
            let configs = preset(name).unwrap();
            assert_eq!(configs.len(), PRESET_LOCI);
            assert_eq!(preset(&name.to_uppercase()).unwrap(), configs);
        }
    }

    #[test]
    fn preset_symbols_are_distinct() {
        for name in PRESET_NAMES {
            let mut symbols: Vec<char> = preset(name).unwrap().iter().map(AlleleConfig::dominant_symbol).collect();
            symbols.sort_unstable();
            symbols.dedup();
            assert_eq!(symbols.len(), PRESET_LOCI, "duplicate symbol within preset '{name}'");
        }
    }

    #[test]
    fn unknown_preset() {
        assert_eq!(preset("axolotl"), Err(GeneticsError::UnknownPreset("axolotl".to_string())));
    }

    #[test]
    fn default_labels() {
        let configs = default_configs(2);
        assert_eq!(configs[1].dominant_trait_label(), "Dominant B");
        assert_eq!(configs[1].recessive_trait_label(), "Recessive b");
    }
}
