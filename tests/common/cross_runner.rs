use clap::Parser;

use super::Fixture;

/// Assemble the command line of a `punnett-rs cross` run, writing its results into a temporary file.
#[derive(Default)]
pub struct CrossRunnerBuilder {
    parent1   : Option<String>,
    parent2   : Option<String>,
    cross_type: Option<String>,
    preset    : Option<String>,
    traits    : Option<String>,
    display   : Option<String>,
    format    : Option<String>,
    label     : Option<String>,
    strict    : bool,
}

impl CrossRunnerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parents(mut self, parent1: &str, parent2: &str) -> Self {
        self.parent1 = Some(parent1.to_string());
        self.parent2 = Some(parent2.to_string());
        self
    }

    pub fn cross_type(mut self, cross_type: &str) -> Self {
        self.cross_type = Some(cross_type.to_string());
        self
    }

    pub fn preset(mut self, preset: &str) -> Self {
        self.preset = Some(preset.to_string());
        self
    }

    pub fn traits(mut self, traits: &Fixture) -> Self {
        self.traits = Some(traits.to_string());
        self
    }

    pub fn display(mut self, display: &str) -> Self {
        self.display = Some(display.to_string());
        self
    }

    pub fn format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn build(self) -> CrossRunner {
        let output = Fixture::blank("cross-results.txt");
        let mut args: Vec<String> = vec!["punnett-rs".into(), "cross".into()];

        let options = [
            ("--parent1",    self.parent1),
            ("--parent2",    self.parent2),
            ("--cross-type", self.cross_type),
            ("--preset",     self.preset),
            ("--traits",     self.traits),
            ("--display",    self.display),
            ("--format",     self.format),
            ("--label",      self.label),
            ("--output",     Some(output.to_string())),
        ];
        for (flag, value) in options {
            if let Some(value) = value {
                args.push(flag.into());
                args.push(value);
            }
        }
        if self.strict {
            args.push("--strict".into());
        }
        CrossRunner { args, output }
    }
}

pub struct CrossRunner {
    args  : Vec<String>,
    output: Fixture,
}

impl CrossRunner {
    pub fn run(&self) -> anyhow::Result<()> {
        let cli = parser::Cli::try_parse_from(&self.args)?;
        punnett_rs::run(cli)
    }

    pub fn output(&self) -> String {
        self.output.read_to_string()
    }

    /// Lines of a given report section, without its title and underline.
    pub fn section(&self, title: &str) -> Vec<String> {
        self.output()
            .lines()
            .skip_while(|line| *line != title)
            .skip(2)
            .take_while(|line| !line.is_empty() && !line.starts_with('='))
            .map(ToString::to_string)
            .collect()
    }
}
