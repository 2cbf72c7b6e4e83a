use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::aggregate::gene::aggregate_reader;
use crate::config::{ParseOptions, load_options};
use crate::input::open_reader;
use crate::report::json::{RunSummary, write_summary};
use crate::report::tsv::write_gene_table;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Name of the DEXSeq results table
    #[arg(short, long)]
    pub(crate) input: PathBuf,

    /// Name of the DEXSeq results column to average
    #[arg(short, long)]
    pub(crate) colname: String,

    /// Name of the output file
    #[arg(short, long)]
    pub(crate) output: PathBuf,

    /// Optional TOML file with parse options
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    /// Optional JSON run summary
    #[arg(long)]
    pub(crate) summary: Option<PathBuf>,
}

pub fn handle(args: RunArgs) -> anyhow::Result<()> {
    let options = match args.config.as_deref() {
        Some(path) => load_options(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ParseOptions::default(),
    };

    let start = Instant::now();
    info!(stage = "aggregate", "starting stage");
    let aggregation = {
        let mut reader = open_reader(&args.input)
            .with_context(|| format!("opening {}", args.input.display()))?;
        aggregate_reader(&mut *reader, &args.colname, &options)
            .with_context(|| format!("reading {}", args.input.display()))?
    };
    info!(
        stage = "aggregate",
        elapsed_ms = start.elapsed().as_millis(),
        data_rows = aggregation.stats.data_rows,
        missing_rows = aggregation.stats.missing_rows,
        genes = aggregation.accumulator.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "write", "starting stage");
    let means = aggregation.accumulator.means();
    write_gene_table(&args.output, &aggregation.column.name, &means)
        .with_context(|| format!("writing {}", args.output.display()))?;
    if let Some(path) = args.summary.as_deref() {
        let summary = RunSummary::new(&args.input, &aggregation);
        write_summary(path, &summary)
            .with_context(|| format!("writing summary {}", path.display()))?;
    }
    info!(
        stage = "write",
        elapsed_ms = start.elapsed().as_millis(),
        output = %args.output.display(),
        "finished stage"
    );
    Ok(())
}
