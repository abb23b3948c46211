pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dnascan",
    version,
    about = "Find open reading frames and repeats in FASTA files",
    long_about = "dnascan loads a FASTA file and answers one question per run: the longest \
                  open reading frame in the file, in one sequence or in one forward frame, \
                  or the most frequent fixed-length repeat across all sequences. \
                  Sequences may only contain IUPAC nucleotide codes (ACGTRYSWKMBDHVNZ, \
                  either case); RNA (U), gaps (-, .) and stops (*) reject the file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Number of threads to use (0 = all available)
    #[arg(short = 'j', long, default_value = "0", env = "DNASCAN_THREADS", global = true)]
    pub threads: usize,

    /// Ignore sequences shorter than this many bases
    #[arg(long, default_value = "0", env = "DNASCAN_MIN_LEN", global = true)]
    pub min_len: usize,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the records in a FASTA file
    Records(commands::records::RecordsArgs),

    /// Show sequence lengths and the shortest and longest sequences
    Lengths(commands::lengths::LengthsArgs),

    /// Report the longest open reading frame(s)
    Orf(commands::orf::OrfArgs),

    /// Report the most frequent repeat(s) of a given length
    Repeats(commands::repeats::RepeatsArgs),
}

/// Options applied while loading the input file.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub min_len: usize,
}
