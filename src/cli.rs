//! CLI interface for Classpectanator
//!
//! Provides command-line access to the analysis engine:
//! - Analyzing a classpect (inversions, siblings, shadows, transforms)
//! - Printing the full 24-row cross table
//! - Listing the equivalence class for a total value

use crate::analysis::Analysis;
use crate::data;
use crate::inverse::InverseKind;
use crate::table::{AspectRule, TableEntry};
use clap::{Parser, Subcommand};
use std::io::Write;

#[derive(Parser)]
#[command(name = "classpectanator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Classpect symmetry analysis over the extended zodiac lattice")]
#[command(
    long_about = "Classpectanator - symmetry analysis for the extended zodiac lattice\n\n\
    Every classpect (class + aspect) is a point on a small 2D integer lattice.\n\
    The engine computes its inversions, derived siblings and shadows, 30-degree\n\
    rotations, diagonal reflection, and total-value equivalence classes.\n\n\
    Entity names are matched case-sensitively against the canonical registry.\n\n\
    Examples:\n\
      classpectanator analyze Knight Time -v\n\
      classpectanator table Maid Rage\n\
      classpectanator total 0 --json"
)]
#[command(author = "Classpectanator Contributors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a classpect
    Analyze {
        /// Class name (case-sensitive, e.g. Knight)
        class: String,

        /// Aspect name (case-sensitive, e.g. Time)
        aspect: String,

        /// Emit the full analysis as JSON
        #[arg(long)]
        json: bool,

        /// Verbose output including the 24-row cross table
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the full cross table for a classpect
    Table {
        /// Class name (case-sensitive)
        class: String,

        /// Aspect name (case-sensitive)
        aspect: String,
    },

    /// List every classpect with the given total value
    Total {
        /// Target total value
        value: i32,

        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Dispatch a parsed command against the canonical dataset
///
/// Output goes to the supplied writer. An unknown entity name writes the
/// invalid-classpect report (`{"valid":false}` in JSON mode) and returns the
/// underlying `RegistryError`, so callers exit nonzero without repeating the
/// report.
pub fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let engine = data::canon_engine();
    #[cfg(feature = "logging")]
    tracing::debug!(
        classes = engine.registry().len(crate::registry::EntityKind::Class),
        aspects = engine.registry().len(crate::registry::EntityKind::Aspect),
        "canonical engine ready"
    );

    match cli.command {
        Commands::Analyze {
            class,
            aspect,
            json,
            verbose,
        } => match engine.analyze(&class, &aspect) {
            Ok(analysis) => {
                if json {
                    print_json(&analysis, out)?;
                } else {
                    print_analysis(&analysis, verbose, out)?;
                }
                Ok(())
            }
            Err(err) => {
                print_invalid(&class, &aspect, json, out)?;
                Err(err.into())
            }
        },

        Commands::Table { class, aspect } => match engine.analyze(&class, &aspect) {
            Ok(analysis) => {
                writeln!(out, "Cross table for {}", analysis.classpect)?;
                print_table(&analysis, out)?;
                Ok(())
            }
            Err(err) => {
                print_invalid(&class, &aspect, false, out)?;
                Err(err.into())
            }
        },

        Commands::Total { value, json } => {
            let classpects = engine.classpects_by_total(value);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&classpects)?)?;
            } else {
                writeln!(out, "Classpects with total {value}: {}", classpects.len())?;
                for classpect in &classpects {
                    writeln!(out, "  {classpect}")?;
                }
            }
            Ok(())
        }
    }
}

/// The sole fatal signal: a bare `{"valid":false}` object in JSON mode
fn print_invalid(
    class: &str,
    aspect: &str,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::json!({ "valid": false }))?;
    } else {
        writeln!(out, "Invalid classpect: {class} of {aspect}")?;
    }
    Ok(())
}

fn print_json(analysis: &Analysis, out: &mut impl Write) -> anyhow::Result<()> {
    let mut value = serde_json::to_value(analysis)?;
    if let serde_json::Value::Object(map) = &mut value {
        map.insert("valid".to_string(), true.into());
    }
    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(())
}

fn render(entry: &TableEntry) -> String {
    match entry.classpect() {
        Some(classpect) => classpect.to_string(),
        None => "N/A".to_string(),
    }
}

fn render_list(entries: &[TableEntry]) -> String {
    if entries.is_empty() {
        return "none".to_string();
    }
    entries.iter().map(render).collect::<Vec<_>>().join(", ")
}

fn print_analysis(analysis: &Analysis, verbose: bool, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Classpectanator - Classpect Analysis")?;
    writeln!(out, "====================================")?;
    writeln!(out, "{} (total {})", analysis.classpect, analysis.original_total)?;
    writeln!(out)?;

    let numeric = analysis
        .numeric_inverse
        .as_ref()
        .map(render)
        .unwrap_or_else(|| "none".to_string());
    writeln!(out, "Numeric inverse:   {numeric}")?;
    writeln!(
        out,
        "Pairwise inverses: {}",
        render_list(&analysis.pairwise_inverses)
    )?;
    writeln!(out, "Siblings:          {}", render_list(&analysis.siblings))?;
    writeln!(out, "Shadows:           {}", render_list(&analysis.shadows))?;

    let rotations = if analysis.rotations.is_empty() {
        "none".to_string()
    } else {
        analysis
            .rotations
            .iter()
            .map(|r| format!("{}° {}", r.degrees, r.classpect))
            .collect::<Vec<_>>()
            .join(", ")
    };
    writeln!(out, "Rotations:         {rotations}")?;

    let reflection = analysis
        .reflection
        .as_ref()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "none".to_string());
    writeln!(out, "Reflection:        {reflection}")?;

    writeln!(
        out,
        "Same value:        {} classpect(s)",
        analysis.same_value.len()
    )?;
    writeln!(
        out,
        "Opposite value:    {} classpect(s)",
        analysis.opposite_value.len()
    )?;
    writeln!(
        out,
        "Tags:              balanced: {}, symmetric: {}",
        analysis.balanced, analysis.symmetric
    )?;

    if !analysis.canon_characters.is_empty() {
        let names: Vec<&str> = analysis
            .canon_characters
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        writeln!(out, "Canon characters:  {}", names.join(", "))?;
    }
    if !analysis.non_canon_characters.is_empty() {
        let names: Vec<&str> = analysis
            .non_canon_characters
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        writeln!(out, "Other characters:  {}", names.join(", "))?;
    }

    if verbose {
        writeln!(out)?;
        print_table(analysis, out)?;
    }
    Ok(())
}

fn print_table(analysis: &Analysis, out: &mut impl Write) -> anyhow::Result<()> {
    for class_kind in InverseKind::ALL {
        writeln!(out, "{class_kind}:")?;
        for aspect_rule in AspectRule::ALL {
            let entry = analysis.table.row(class_kind, aspect_rule);
            writeln!(out, "  {:<9}  {}", aspect_rule.to_string(), render(entry))?;
        }
    }
    Ok(())
}
