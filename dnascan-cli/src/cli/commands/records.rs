use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use dnascan_core::stats::record_count;

use crate::cli::commands::load_store;
use crate::cli::output::info;
use crate::cli::LoadOptions;

#[derive(Args)]
pub struct RecordsArgs {
    /// Input FASTA file
    #[arg(value_name = "FASTA")]
    pub input: PathBuf,
}

pub fn run(args: RecordsArgs, load: &LoadOptions) -> Result<()> {
    let store = load_store(&args.input, load)?;
    info(&format!("Records: {}", record_count(&store)));
    Ok(())
}
