// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result formatting for CLI output

use crate::cli::commands::OutputFormat;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use graphwire::{Record, Result, ResultSet, Value};

/// Result formatter for different output formats
pub struct ResultFormatter;

impl ResultFormatter {
    /// Decode every record and format the result set
    pub fn format(result: &ResultSet, format: OutputFormat) -> Result<String> {
        let records = result.to_records()?;
        Ok(match format {
            OutputFormat::Table => Self::format_table(result, &records),
            OutputFormat::Json => Self::format_json(result, &records),
            OutputFormat::Csv => Self::format_csv(result, &records),
        })
    }

    fn columns(result: &ResultSet) -> &[String] {
        result.header().map(|h| h.column_names()).unwrap_or(&[])
    }

    /// Format results as a table using comfy-table
    fn format_table(result: &ResultSet, records: &[Record]) -> String {
        let mut output = String::new();

        if records.is_empty() {
            output.push_str(&format!("{}\n", "No results found".yellow()));
        } else {
            output.push_str(&format!("{}\n", "Query Results".bold().green()));
            output.push_str(&format!(
                "Execution time: {} ms\n",
                result.statistics().query_internal_execution_time()
            ));
            output.push_str(&format!("Rows returned: {}\n\n", records.len()));

            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            let header_cells: Vec<Cell> = Self::columns(result)
                .iter()
                .map(|col| Cell::new(col).fg(Color::Green))
                .collect();
            table.set_header(header_cells);

            for record in records {
                let row_values: Vec<String> =
                    record.values().iter().map(Self::value_to_string).collect();
                table.add_row(row_values);
            }

            output.push_str(&table.to_string());
            output.push('\n');
        }

        if !result.statistics().is_empty() {
            output.push_str(&format!("\n{}\n", "Statistics:".bold()));
            for (label, value) in result.statistics().iter() {
                output.push_str(&format!("  {}: {}\n", label, value));
            }
        }

        output
    }

    /// Format results as JSON
    fn format_json(result: &ResultSet, records: &[Record]) -> String {
        let statistics: serde_json::Map<String, serde_json::Value> = result
            .statistics()
            .iter()
            .map(|(label, value)| (label.to_string(), serde_json::json!(value)))
            .collect();

        let json_result = serde_json::json!({
            "status": "success",
            "columns": Self::columns(result),
            "rows": records.iter().map(Record::to_json).collect::<Vec<_>>(),
            "rows_returned": records.len(),
            "statistics": statistics,
        });

        serde_json::to_string_pretty(&json_result).unwrap_or_else(|_| {
            "{\"status\": \"error\", \"error\": \"Could not serialize results to JSON\"}".to_string()
        }) + "\n"
    }

    /// Format results as CSV
    fn format_csv(result: &ResultSet, records: &[Record]) -> String {
        let mut output = String::new();

        output.push_str(&Self::columns(result).join(","));
        output.push('\n');

        for record in records {
            let row_values: Vec<String> = record
                .values()
                .iter()
                .map(Self::value_to_csv_string)
                .collect();
            output.push_str(&row_values.join(","));
            output.push('\n');
        }

        output
    }

    /// Strings print bare; everything else uses its display form
    fn value_to_string(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Null => "NULL".to_string(),
            other => other.to_string(),
        }
    }

    /// Convert a Value to a CSV-safe string
    fn value_to_csv_string(value: &Value) -> String {
        let s = match value {
            Value::Null => String::new(),
            other => Self::value_to_string(other),
        };
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s
        }
    }
}
