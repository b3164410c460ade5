//! Output formatting module

use std::collections::BTreeMap;

use anyhow::Result;
use qto_core::costing::CostEstimate;
use qto_core::materials::Rounding;
use qto_core::{MaterialKey, MaterialQuantities, MaterialsByType, PartCategory, PartType, Project, Quantity};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Materials of one part, as printed by `qto parts`
#[derive(Serialize)]
pub struct PartReport<'a> {
    pub id: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub part_type: PartType,
    pub materials: MaterialQuantities,
}

pub fn print_totals(format: OutputFormat, project: &Project, totals: &MaterialQuantities) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(totals)?);
        return Ok(());
    }

    let title = if project.meta.name.is_empty() {
        "Project Totals".to_string()
    } else {
        format!("{} - Totals", project.meta.name)
    };
    print_heading(&title);
    println!("Parts: {}", project.part_count());
    println!();
    print_quantities(totals);
    Ok(())
}

pub fn print_parts(format: OutputFormat, reports: &[PartReport]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    for report in reports {
        print_heading(&format!("{} ({})", report.name, report.part_type.display_name()));
        if report.materials.is_empty() {
            println!("(no materials)");
        } else {
            print_quantities(&report.materials);
        }
        println!();
    }
    Ok(())
}

pub fn print_by_type(format: OutputFormat, grouped: &MaterialsByType) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(grouped)?);
        return Ok(());
    }

    for (part_type, quantities) in &grouped.by_type {
        print_heading(part_type.display_name());
        print_quantities(quantities);
        println!();
    }
    print_heading("Total");
    print_quantities(&grouped.total);
    Ok(())
}

pub fn print_by_category(
    format: OutputFormat,
    categories: &BTreeMap<PartCategory, MaterialQuantities>,
    total: &MaterialQuantities,
) -> Result<()> {
    if format == OutputFormat::Json {
        let by_label: BTreeMap<&str, &MaterialQuantities> = categories.iter().map(|(c, q)| (c.label(), q)).collect();
        let report = serde_json::json!({ "by_category": by_label, "total": total });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (category, quantities) in categories {
        print_heading(category.label());
        print_quantities(quantities);
        println!();
    }
    print_heading("Total");
    print_quantities(total);
    Ok(())
}

pub fn print_cost(format: OutputFormat, estimate: &CostEstimate) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(estimate)?);
        return Ok(());
    }

    print_heading("Cost Estimate");
    if estimate.lines.is_empty() {
        println!("No priced materials.");
        return Ok(());
    }
    println!("{:<24} {:>12} {:>12} {:>14}", "Material", "Quantity", "Unit price", "Amount");
    for line in &estimate.lines {
        println!(
            "{:<24} {:>12.2} {:>12.2} {:>14.2}",
            line.bucket.label(),
            line.quantity,
            line.unit_price,
            line.amount
        );
    }
    println!("{}", "-".repeat(65));
    println!("{:<24} {:>40.2}", "Total", estimate.total);
    Ok(())
}

fn print_heading(title: &str) {
    println!("{}", title);
    println!("{}", "=".repeat(title.chars().count()));
}

fn print_quantities(quantities: &MaterialQuantities) {
    let width = quantities.iter().map(|(k, _)| k.to_string().len()).max().unwrap_or(0);
    for (key, quantity) in quantities.iter() {
        println!("{:<width$}  {:>12}", key.to_string(), format_quantity(key, quantity), width = width);
    }
}

fn format_quantity(key: &MaterialKey, quantity: &Quantity) -> String {
    match quantity {
        Quantity::Amount(value) => match key.rounding() {
            Rounding::Ceiling => format!("{:.0}", value),
            Rounding::Hundredths => format!("{:.2}", value),
        },
        Quantity::Note(Value::String(text)) => text.clone(),
        Quantity::Note(other) => other.to_string(),
    }
}
