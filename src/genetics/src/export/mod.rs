use chrono::NaiveDateTime;
use itertools::Itertools;
use located_error::prelude::*;

use crate::CrossResult;

const BORDER   : &str = "================================================================";
const SEPARATOR: &str = "----------------------------------------------------------------";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Field separator of every table within the text report.
pub const FIELD_SEPARATOR: &str = "\t";

/// Render a cross into a plain-text report, stamped with the current local time.
///
/// See [`export_results_to_text_at`] for the layout.
pub fn export_results_to_text(result: &CrossResult, parent1: &str, parent2: &str, cross_label: &str) -> String {
    export_results_to_text_at(result, parent1, parent2, cross_label, chrono::Local::now().naive_local())
}

/// Render a cross into a plain-text report, using `timestamp` as the generation time.
///
/// The report is made of bordered sections: cross metadata, gametes of both parents,
/// genotype and phenotype distributions (tab separated, with their simplified ratio),
/// and finally the full Punnett grid, where the first row and column hold the gametes.
pub fn export_results_to_text_at(result: &CrossResult, parent1: &str, parent2: &str, cross_label: &str, timestamp: NaiveDateTime) -> String {
    let mut lines: Vec<String> = Vec::new();

    // ---- Header
    lines.push(BORDER.to_string());
    lines.push("PUNNETT SQUARE CROSS RESULTS".to_string());
    lines.push(BORDER.to_string());
    lines.push(format!("Cross     : {cross_label}"));
    lines.push(format!("Parent 1  : {parent1}"));
    lines.push(format!("Parent 2  : {parent2}"));
    lines.push(format!("Grid size : {} x {} ({} combinations)", result.rows(), result.cols(), result.total()));
    lines.push(format!("Generated : {}", timestamp.format(TIMESTAMP_FORMAT)));

    // ---- Gametes
    section(&mut lines, "GAMETES");
    let gametes = result.gametes();
    lines.push(format!("Parent 1 ({}): {}", gametes.parent1.len(), gametes.parent1.iter().join(", ")));
    lines.push(format!("Parent 2 ({}): {}", gametes.parent2.len(), gametes.parent2.iter().join(", ")));

    // ---- Genotypes
    section(&mut lines, "GENOTYPE DISTRIBUTION");
    lines.push(["Genotype", "Count", "Percentage", "Phenotype"].join(FIELD_SEPARATOR));
    for freq in result.genotype_frequencies() {
        lines.push(format!("{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{:.2}%{FIELD_SEPARATOR}{}", freq.genotype, freq.count, freq.percentage, freq.phenotype));
    }
    lines.push(format!("Genotype ratio: {}", result.genotype_ratio()));

    // ---- Phenotypes
    section(&mut lines, "PHENOTYPE DISTRIBUTION");
    lines.push(["Phenotype", "Count", "Percentage"].join(FIELD_SEPARATOR));
    for freq in result.phenotype_frequencies() {
        lines.push(format!("{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{:.2}%", freq.phenotype, freq.count, freq.percentage));
    }
    lines.push(format!("Phenotype ratio: {}", result.phenotype_ratio()));

    // ---- Grid
    section(&mut lines, "PUNNETT GRID");
    lines.push(std::iter::once(String::new())
        .chain(gametes.parent2.iter().map(ToString::to_string))
        .join(FIELD_SEPARATOR)
    );
    for (gamete, row) in gametes.parent1.iter().zip(result.grid()) {
        lines.push(std::iter::once(gamete.to_string())
            .chain(row.iter().map(ToString::to_string))
            .join(FIELD_SEPARATOR)
        );
    }
    lines.push(BORDER.to_string());

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(title.to_string());
    lines.push(SEPARATOR.to_string());
}

/// Serialize a cross into YAML.
///
/// # Errors
/// if `serde_yaml` fails to serialize the result.
pub fn export_results_to_yaml(result: &CrossResult) -> Result<String> {
    serde_yaml::to_string(result).loc("While serializing cross results into yaml")
}
