//! Output formatting for parsed tables.

use crate::table::{NetUseTable, StandardColumn};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Markdown,
    Table,
}

/// Formats a table in the requested output format.
pub fn format_table(table: &NetUseTable, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(table)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(table).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markdown => Ok(table_to_markdown(table)),
        OutputFormat::Table => Ok(table_to_text(table)),
    }
}

fn table_to_markdown(table: &NetUseTable) -> String {
    let mut out = String::new();

    out.push_str("| Local | Remote | Status |\n");
    out.push_str("|-------|--------|--------|\n");
    for row in table {
        out.push_str(&format!(
            "| {} | `{}` | {} |\n",
            row.local(),
            row.remote(),
            row.status()
        ));
    }

    out
}

fn table_to_text(table: &NetUseTable) -> String {
    let columns = StandardColumn::ALL;
    let widths: Vec<usize> = columns
        .iter()
        .map(|&column| {
            table
                .iter()
                .map(|row| row.get(column).chars().count())
                .chain(std::iter::once(column.as_str().len()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| format!("{:<width$}", column.as_str()))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');

    for row in table {
        let cells: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(&column, &width)| format!("{:<width$}", row.get(column)))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    if table.is_empty() {
        out.push_str("(no connections)\n");
    }

    out
}
