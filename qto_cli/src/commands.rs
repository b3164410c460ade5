//! Command handlers

use std::path::Path;

use anyhow::{Context, Result};
use qto_core::{load_project, project_cost, EstimationConstants, Estimator, PriceTable, Project};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let constants = match &cli.constants {
        Some(path) => EstimationConstants::load(path)
            .with_context(|| format!("Failed to load constants from {}", path.display()))?,
        None => EstimationConstants::default(),
    };
    let estimator = Estimator::new(constants);

    match &cli.command {
        Commands::Estimate { file } => cmd_estimate(&estimator, file, cli.format),
        Commands::Parts { file } => cmd_parts(&estimator, file, cli.format),
        Commands::ByType { file, category } => cmd_by_type(&estimator, file, *category, cli.format),
        Commands::Cost { file, prices } => cmd_cost(&estimator, file, prices, cli.format),
        Commands::Constants => cmd_constants(estimator.constants(), cli.format),
    }
}

fn open_project(file: &Path) -> Result<Project> {
    let project = load_project(file).with_context(|| format!("Failed to load project {}", file.display()))?;
    log::debug!("Project '{}' has {} parts", project.meta.name, project.part_count());
    Ok(project)
}

fn cmd_estimate(estimator: &Estimator, file: &Path, format: OutputFormat) -> Result<()> {
    let project = open_project(file)?;
    let totals = estimator.aggregate(&project.parts);
    output::print_totals(format, &project, &totals)
}

fn cmd_parts(estimator: &Estimator, file: &Path, format: OutputFormat) -> Result<()> {
    let project = open_project(file)?;
    let reports: Vec<output::PartReport> = project
        .parts
        .iter()
        .map(|part| output::PartReport {
            id: &part.id,
            name: &part.name,
            part_type: part.part_type,
            materials: estimator.part_materials(part),
        })
        .collect();
    output::print_parts(format, &reports)
}

fn cmd_by_type(estimator: &Estimator, file: &Path, category: bool, format: OutputFormat) -> Result<()> {
    let project = open_project(file)?;
    if category {
        let categories = estimator.aggregate_by_category(&project.parts);
        let total = estimator.aggregate(&project.parts);
        output::print_by_category(format, &categories, &total)
    } else {
        output::print_by_type(format, &estimator.aggregate_by_type(&project.parts))
    }
}

fn cmd_cost(estimator: &Estimator, file: &Path, prices: &Path, format: OutputFormat) -> Result<()> {
    let project = open_project(file)?;
    let table = PriceTable::load(prices).with_context(|| format!("Failed to load prices from {}", prices.display()))?;
    let totals = estimator.aggregate(&project.parts);
    let estimate = project_cost(&totals, &table);
    output::print_cost(format, &estimate)
}

fn cmd_constants(constants: &EstimationConstants, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(constants)?),
        OutputFormat::Table => print!("{}", constants.to_toml_string()?),
    }
    Ok(())
}
