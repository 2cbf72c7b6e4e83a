use serde::Serialize;

use crate::aggregate::gene::{AggregateStats, Aggregation};

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: ToolSummary,
    pub input: InputSummary,
    pub counts: CountSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub column: String,
    pub column_index: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountSummary {
    pub data_rows: usize,
    pub missing_rows: usize,
    pub blank_lines: usize,
    pub contributions: usize,
    pub genes: usize,
}

impl RunSummary {
    pub fn new(input: &std::path::Path, aggregation: &Aggregation) -> Self {
        let AggregateStats {
            data_rows,
            missing_rows,
            blank_lines,
            contributions,
            ..
        } = aggregation.stats;
        Self {
            tool: ToolSummary {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            input: InputSummary {
                path: input.to_string_lossy().to_string(),
                column: aggregation.column.name.clone(),
                column_index: aggregation.column.index,
            },
            counts: CountSummary {
                data_rows,
                missing_rows,
                blank_lines,
                contributions,
                genes: aggregation.accumulator.len(),
            },
        }
    }
}

pub fn write_summary(path: &std::path::Path, summary: &RunSummary) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
