use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use dnascan_core::stats::{longest_sequences, sequence_lengths, shortest_sequences};

use crate::cli::commands::load_store;
use crate::cli::output::{empty, info, join_ids, section_header, tree_item};
use crate::cli::LoadOptions;

#[derive(Args)]
pub struct LengthsArgs {
    /// Input FASTA file
    #[arg(value_name = "FASTA")]
    pub input: PathBuf,

    /// Only print the shortest and longest sequences
    #[arg(long)]
    pub summary: bool,
}

pub fn run(args: LengthsArgs, load: &LoadOptions) -> Result<()> {
    let store = load_store(&args.input, load)?;

    let (Some(shortest), Some(longest)) = (shortest_sequences(&store), longest_sequences(&store))
    else {
        empty("No sequences");
        return Ok(());
    };

    if !args.summary {
        section_header("Sequence lengths");
        let lengths = sequence_lengths(&store);
        let last = lengths.len() - 1;
        for (i, (id, len)) in lengths.iter().enumerate() {
            tree_item(i == last, id, len);
        }
    }

    info(&format!(
        "Shortest: {} ({} bp)",
        join_ids(&shortest.ids),
        shortest.len
    ));
    info(&format!(
        "Longest: {} ({} bp)",
        join_ids(&longest.ids),
        longest.len
    ));
    Ok(())
}
