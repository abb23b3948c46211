use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use dnascan_core::repeats::count_repeats;

use crate::cli::commands::load_store;
use crate::cli::output::{empty, join_ids, section_header, success, tree_item};
use crate::cli::LoadOptions;

#[derive(Args)]
pub struct RepeatsArgs {
    /// Input FASTA file
    #[arg(value_name = "FASTA")]
    pub input: PathBuf,

    /// Repeat length in bases
    #[arg(short = 'n', long, value_name = "N", allow_negative_numbers = true)]
    pub length: i64,

    /// List every repeat, most frequent first
    #[arg(long)]
    pub all: bool,
}

pub fn run(args: RepeatsArgs, load: &LoadOptions) -> Result<()> {
    let store = load_store(&args.input, load)?;
    let counts = count_repeats(&store, args.length)?;

    let Some(top) = counts.most_frequent() else {
        empty(&format!("No repeats of length {}", args.length));
        return Ok(());
    };

    success(&format!(
        "Most frequent repeat of length {}: {} ({} occurrences)",
        args.length,
        join_ids(&top.repeats),
        top.count
    ));

    if args.all {
        section_header(&format!("Repeats of length {}", args.length));
        let mut rows: Vec<(&str, usize)> = counts.iter().collect();
        // stable: equal counts stay in first-seen order
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        let last = rows.len() - 1;
        for (i, (repeat, count)) in rows.iter().enumerate() {
            tree_item(i == last, repeat, count);
        }
    }
    Ok(())
}
