use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use dnascan_core::orf::{
    longest_orf_at_frame, longest_orf_for_identifier, longest_orf_in_file, Orf, OrfHit,
};

use crate::cli::commands::load_store;
use crate::cli::output::{empty, section_header, success, tree_item};
use crate::cli::LoadOptions;

#[derive(Args)]
pub struct OrfArgs {
    /// Input FASTA file
    #[arg(value_name = "FASTA")]
    pub input: PathBuf,

    /// Restrict the search to one record
    #[arg(long, conflicts_with = "frame")]
    pub id: Option<String>,

    /// Restrict the search to one forward frame (1, 2 or 3)
    #[arg(short, long, value_name = "P", allow_negative_numbers = true)]
    pub frame: Option<i64>,
}

pub fn run(args: OrfArgs, load: &LoadOptions) -> Result<()> {
    let store = load_store(&args.input, load)?;

    if let Some(id) = args.id {
        match longest_orf_for_identifier(&store, &id)? {
            Some(orf) => {
                success(&format!("Longest ORF in {}: {} bp", id, orf.len()));
                print_orf(&orf);
            }
            None => empty(&format!("No ORF found in {}", id)),
        }
        return Ok(());
    }

    let (hits, scope) = match args.frame {
        Some(position) => (
            longest_orf_at_frame(&store, position)?,
            format!("frame {}", position),
        ),
        None => (longest_orf_in_file(&store), "file".to_string()),
    };
    print_hits(&hits, &scope);
    Ok(())
}

fn print_hits(hits: &[OrfHit], scope: &str) {
    let Some(first) = hits.first() else {
        empty(&format!("No ORF found in {}", scope));
        return;
    };

    success(&format!(
        "Longest ORF in {}: {} bp ({} hit{})",
        scope,
        first.orf.len(),
        hits.len(),
        if hits.len() == 1 { "" } else { "s" }
    ));
    for hit in hits {
        section_header(&hit.id);
        print_orf(&hit.orf);
    }
}

fn print_orf(orf: &Orf) {
    tree_item(false, "Frame", orf.frame());
    tree_item(
        false,
        "Position",
        format!("{}-{}", orf.start() + 1, orf.end()),
    );
    tree_item(true, "Sequence", orf);
}
