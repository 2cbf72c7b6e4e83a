use std::collections::BTreeMap;
use std::io::BufRead;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ParseOptions;
use crate::input::InputError;
use crate::input::results::{
    ColumnSelection, Measurement, clean_line, gene_symbols, parse_row, read_header, read_line,
    resolve_column,
};

/// Per-gene measurements collected over one pass of a results table.
#[derive(Debug, Default, Clone)]
pub struct GeneAccumulator {
    values: BTreeMap<String, Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneMean {
    pub gene: String,
    pub mean: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub data_rows: usize,
    pub missing_rows: usize,
    pub blank_lines: usize,
    pub contributions: usize,
    pub empty_symbols: usize,
}

#[derive(Debug, Clone)]
pub struct Aggregation {
    pub column: ColumnSelection,
    pub accumulator: GeneAccumulator,
    pub stats: AggregateStats,
}

impl GeneAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, gene: &str, value: f64) {
        match self.values.get_mut(gene) {
            Some(values) => values.push(value),
            None => {
                self.values.insert(gene.to_string(), vec![value]);
            }
        }
    }

    pub fn get(&self, gene: &str) -> Option<&[f64]> {
        self.values.get(gene).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Means in ascending gene order.
    pub fn means(&self) -> Vec<GeneMean> {
        self.values
            .iter()
            .map(|(gene, values)| GeneMean {
                gene: gene.clone(),
                mean: mean(values),
            })
            .collect()
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Reads a header plus data rows and accumulates the selected column per gene.
///
/// Fails before touching any data row when `column_name` is not in the header.
pub fn aggregate_reader(
    reader: &mut dyn BufRead,
    column_name: &str,
    options: &ParseOptions,
) -> Result<Aggregation, InputError> {
    let header = read_header(reader, options)?;
    let column = resolve_column(&header, column_name)?;
    debug!(
        column = column.name.as_str(),
        index = column.index,
        "resolved column"
    );

    let mut accumulator = GeneAccumulator::new();
    let mut stats = AggregateStats::default();
    let mut buf = Vec::new();
    let mut line_no = 1usize;
    loop {
        line_no += 1;
        let Some(line) = read_line(reader, &mut buf, line_no)? else {
            break;
        };
        let cleaned = clean_line(line, options);
        if cleaned.is_empty() {
            stats.blank_lines += 1;
            continue;
        }
        stats.data_rows += 1;
        let row = parse_row(&cleaned, line_no, &column, options)?;
        match row.measurement {
            Measurement::Missing => stats.missing_rows += 1,
            Measurement::Value(value) => {
                for gene in gene_symbols(row.group, options) {
                    if gene.is_empty() {
                        stats.empty_symbols += 1;
                    }
                    accumulator.push(gene, value);
                    stats.contributions += 1;
                }
            }
        }
    }

    if stats.empty_symbols > 0 {
        warn!(
            count = stats.empty_symbols,
            "exon identifiers with an empty gene symbol"
        );
    }

    Ok(Aggregation {
        column,
        accumulator,
        stats,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/gene.rs"]
mod tests;
