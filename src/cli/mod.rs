use clap::Parser;

mod run;

#[derive(Parser, Debug)]
#[command(
    name = "dexseq-genes",
    version,
    about = "Average exon-level DEXSeq results per gene"
)]
pub struct Cli {
    #[command(flatten)]
    args: run::RunArgs,
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        run::handle(self.args)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
