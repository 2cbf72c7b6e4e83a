use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::aggregate::gene::GeneMean;

/// Shortest round-trip rendering that keeps a decimal point (`2.0`, `0.1`, `1e-7`).
pub fn format_mean(value: f64) -> String {
    format!("{value:?}")
}

pub fn write_gene_means<W: Write>(
    out: &mut W,
    column: &str,
    means: &[GeneMean],
) -> std::io::Result<()> {
    writeln!(out, "gene\tmean_{column}")?;
    for row in means {
        writeln!(out, "{}\t{}", row.gene, format_mean(row.mean))?;
    }
    Ok(())
}

pub fn write_gene_table(path: &Path, column: &str, means: &[GeneMean]) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_gene_means(&mut out, column, means)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tsv.rs"]
mod tests;
