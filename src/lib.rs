extern crate parser;

use std::path::Path;

use parser::{Cli, Commands::{Cross, Presets, FromYaml}, CrossArgs, ExportFormat, PresetsArgs};
use genetics::{export, preset, AlleleConfig, Session};
use punnett_io::{read::TraitReader, write::GenericWriter};
use located_error::prelude::*;

#[macro_use]
extern crate log;

/// Resolve the locus configurations of a cross: an organism preset, a user-provided trait file,
/// or generic placeholders when neither was requested.
fn load_configs(args: &CrossArgs, loci: usize) -> Result<Vec<AlleleConfig>> {
    match (&args.preset, &args.traits) {
        (Some(name), _) => preset::preset(name).with_loc(|| format!("While loading organism preset '{name}'")),
        (None, Some(path)) => Ok(TraitReader::new(path)?.into_configs()),
        (None, None) => Ok(preset::default_configs(loci)),
    }
}

/// Compute a single cross and write its report into a file, or stdout.
pub fn cross(args: &CrossArgs) -> Result<()> {
    let cross_type = args.cross_type().loc("While determining the cross type")?;
    let configs    = load_configs(args, cross_type.loci())?;

    let mut session = Session::new(cross_type, configs, args.display).strict(args.strict);
    let result = session.cross(&args.parent1, &args.parent2)?;
    info!("Genotype ratio : {}", result.genotype_ratio());
    info!("Phenotype ratio: {}", result.phenotype_ratio());

    let report = match args.format {
        ExportFormat::Text => export::export_results_to_text(&result, &args.parent1, &args.parent2, &args.label(cross_type)),
        ExportFormat::Yaml => export::export_results_to_yaml(&result)?,
    };

    GenericWriter::new(args.output.as_deref(), args.overwrite)?
        .write_str(&report)
        .loc("While writing cross results")
}

/// Print the locus configurations of every (or a single) organism preset into stdout.
pub fn presets(args: &PresetsArgs) -> Result<()> {
    let names: Vec<&str> = match &args.name {
        Some(name) => vec![name.as_str()],
        None       => preset::PRESET_NAMES.to_vec(),
    };

    let mut writer = GenericWriter::new(None::<&Path>, false)?;
    for name in names {
        let configs = preset::preset(name).loc("While listing organism presets")?;
        let lines = std::iter::once(format!("{name}:"))
            .chain(configs.iter().map(|config| format!("  {config}")));
        writer.write_iter(lines)?;
    }
    Ok(())
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.commands {
        Cross{cross: args} => self::cross(&args)?,

        Presets{presets: args} => self::presets(&args)?,

        FromYaml{yaml} => {
            let cli = Cli::deserialize(&yaml).loc("While replaying serialized arguments")?;
            self::run(cli)?;
        },
    };
    Ok(())
}
