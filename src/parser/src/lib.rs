use std::{
    fs::File,
    path::{Path, PathBuf},
    fmt::{self, Display, Formatter},
    ffi::OsStr,
};

use located_error::*;

use clap::{Parser, Subcommand, ArgEnum};
use serde::{Serialize, Deserialize};
use log::debug;
use anyhow::Result;

use genetics::{CrossType, DisplayMode, GeneticsError};

mod error;
pub use error::ParserError;

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="punnett-rs", author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// punnett-rs: Mendelian genetics cross simulator
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them
    #[clap(short='v', long, parse(from_occurrences), global=true)]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emitted and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long, global=true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub commands: Commands,
}

impl Cli {
    /// Serialize command line arguments in yaml format.
    ///
    /// # Behavior
    /// - Serialized arguments are always printed at the debug level.
    /// - When running the `cross` module with `--save-config`, they are furthermore written within
    ///   the provided file, so that the exact same cross can be replayed using `from-yaml`.
    ///
    /// # Errors
    /// - if `serde_yaml` fails to parse `Self` to a string.
    /// - if the requested `--save-config` file cannot be written.
    pub fn serialize(&self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self)
            .map_err(ParserError::SerializeArgs)
            .loc("While serializing command line arguments")?;

        debug!("\n---- Command line args ----\n{}\n---", serialized);

        if let Commands::Cross{cross: CrossArgs{save_config: Some(path), ..}} = &self.commands {
            std::fs::write(path, &serialized)
                .map_err(|err| ParserError::WriteArgs(path.display().to_string(), err))
                .loc("While saving command line arguments")?;
        }
        Ok(())
    }

    /// Deserialize a `.yaml` file into Command line arguments.
    ///
    /// # Errors
    /// - if the provided `.yaml` is missing, or does not carry read permissions.
    /// - if `serde_yaml` fails to parse the provided file to `Self`.
    pub fn deserialize(yaml: &Path) -> Result<Self> {
        let display = yaml.display().to_string();
        let file = File::open(yaml)
            .map_err(|err| ParserError::OpenArgs(display.clone(), err))
            .loc("While deserializing command line arguments")?;
        serde_yaml::from_reader(file)
            .map_err(|err| ParserError::DeserializeArgs(display, err))
            .loc("While deserializing command line arguments")
    }

    /// Verbosity of the logger: warnings are displayed by default, unless `--quiet` was requested.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {0} else {self.verbose.saturating_add(1)}
    }
}

#[derive(Subcommand, Debug, Serialize, Deserialize)]
pub enum Commands {
    /// Cross two parent genotypes and compute the resulting Punnett square.
    ///
    /// Outputs the gametes of both parents, the genotype and phenotype distributions
    /// of the offspring, their simplified ratios, and the full Punnett grid.
    Cross {
        #[clap(flatten)]
        cross: CrossArgs,
    },

    /// List the built-in organism presets, and their loci.
    Presets {
        #[clap(flatten)]
        presets: PresetsArgs,
    },

    /// Run punnett-rs using a previously generated .yaml configuration file.
    ///
    /// This allows users to easily re-apply a punnett-rs command using the exact same parameters
    /// and arguments. See the --save-config argument of the 'cross' module.
    FromYaml {
        yaml: PathBuf,
    },
}

/// Output format of the cross results.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ArgEnum, Serialize, Deserialize)]
pub enum ExportFormat {
    Text,
    Yaml,
}

impl Default for ExportFormat {
    fn default() -> Self {Self::Text}
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "plain-text report"),
            Self::Yaml => write!(f, "yaml document"),
        }
    }
}

#[derive(Parser, Debug, Default, Serialize, Deserialize)]
pub struct CrossArgs {
    /// Genotype of the first parent.
    ///
    /// Genotypes are written as a sequence of allele pairs, one pair per locus, using uppercase letters for dominant
    /// alleles and lowercase letters for recessive ones. e.g. 'Aa' (monohybrid), 'AaBb' (dihybrid), 'AABbcc' (trihybrid)
    #[clap(long)]
    pub parent1: String,

    /// Genotype of the second parent.
    ///
    /// Must carry the same number of loci as --parent1.
    #[clap(long)]
    pub parent2: String,

    /// Number of simultaneously tracked loci.
    ///
    /// Accepted values: mono (1 locus), di (2), tri (3), tetra (4), penta (5). When unspecified, the cross type
    /// is inferred from the length of --parent1. Both parents are then validated against this number of loci.
    #[clap(short='c', long)]
    pub cross_type: Option<CrossType>,

    /// Use the locus configuration of a built-in organism preset.
    ///
    /// Use the 'presets' module to list available presets. When neither --preset nor --traits are
    /// provided, generic loci ('Dominant A', 'Recessive a', ...) are used.
    #[clap(short='p', long, conflicts_with("traits"))]
    pub preset: Option<String>,

    /// Path to a yaml trait definition file.
    ///
    /// The file must hold a list of loci, in genotype order. Example:{n}
    ///   - dominant_symbol: R{n}
    ///     trait_name: Seed shape{n}
    ///     dominant_trait_label: Round{n}
    ///     recessive_trait_label: Wrinkled{n}
    #[clap(short='t', long, parse(try_from_os_str=valid_input_file))]
    pub traits: Option<PathBuf>,

    /// Phenotype display mode.
    ///
    /// 'full' prints trait labels (e.g. 'Round + Green'), while 'simple' prints one code per locus:
    /// 'D' for dominant, 'r' for recessive (e.g. 'Dr').
    #[clap(short='d', long, default_value("full"))]
    pub display: DisplayMode,

    /// Output format.
    #[clap(short='f', long, arg_enum, default_value("text"))]
    pub format: ExportFormat,

    /// Output file. Results are printed to the standard output when unspecified.
    #[clap(short='o', long)]
    pub output: Option<PathBuf>,

    /// Overwrite existing output files.
    ///
    /// By default, punnett-rs does not allow itself from overwriting an existing --output file. Use this flag
    /// to force this behaviour.
    #[clap(short='w', long)]
    pub overwrite: bool,

    /// Require parent alleles to match the configured locus symbols.
    ///
    /// By default, genotypes are only checked for their shape: 'Zz' is accepted even though the first locus
    /// uses the symbols 'A/a'. Use this flag to reject such genotypes.
    #[clap(short='s', long)]
    pub strict: bool,

    /// Custom label of the cross, printed within the report header.
    ///
    /// Defaults to the name of the cross type (e.g. 'Dihybrid').
    #[clap(short='l', long)]
    pub label: Option<String>,

    /// Save the command line arguments of this run within a yaml file.
    ///
    /// The file can later be replayed using the 'from-yaml' module.
    #[clap(long)]
    pub save_config: Option<PathBuf>,
}

impl CrossArgs {
    /// Return the requested cross type, or infer it from the first parent.
    ///
    /// # Errors
    /// if `--cross-type` is unspecified, and `--parent1` does not carry between 1 and 5 allele pairs.
    pub fn cross_type(&self) -> Result<CrossType, GeneticsError> {
        match self.cross_type {
            Some(cross_type) => Ok(cross_type),
            None             => CrossType::from_genotype(&self.parent1),
        }
    }

    /// Label of the cross, as printed within the report.
    pub fn label(&self, cross_type: CrossType) -> String {
        self.label.clone().unwrap_or_else(|| cross_type.label().to_string())
    }
}

#[derive(Parser, Debug, Default, Serialize, Deserialize)]
pub struct PresetsArgs {
    /// Only list the loci of this preset.
    #[clap(short='n', long)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub enum FileEntity {File, Directory}

impl Display for FileEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::File      => write!(f, "File"),
            Self::Directory => write!(f, "Directory"),
        }
    }
}

impl FileEntity {
    fn validate(self, path: &Path) -> Result<(), ParserError> {
        use ParserError::InvalidFileEntity;
        let valid = match self {
            Self::File      => path.is_file(),
            Self::Directory => path.is_dir()
        };

        if valid {
            Ok(())
        } else {
            Err(InvalidFileEntity(self, path.display().to_string()))
        }
    }
}

fn assert_filesystem_entity_is_valid(s: &OsStr, entity: FileEntity) -> Result<()> {
    use ParserError::MissingFileEntity;
    let path = Path::new(s);
    if ! path.exists() {
        return Err(MissingFileEntity(entity, path.display().to_string()))
            .loc("While parsing arguments.")
    }

    entity.validate(path).loc("While parsing arguments.")
}

fn valid_input_file(s: &OsStr) -> Result<PathBuf> {
    assert_filesystem_entity_is_valid(s, FileEntity::File)
        .loc("While checking for file validity")?;
    Ok(PathBuf::from(s))
}
