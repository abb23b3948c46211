#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two records sharing a 12 bp ORF in frame 1 and a 9 bp ORF in frame 2.
pub const TWO_RECORDS: &str = ">seq1 first record
ATGAAACCCTAA
>seq2
CATGCCCTGAGG
";

pub fn dnascan() -> Command {
    let mut cmd = Command::cargo_bin("dnascan").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("DNASCAN_LOG")
        .env_remove("DNASCAN_THREADS")
        .env_remove("DNASCAN_MIN_LEN");
    cmd
}

pub fn create_test_fasta(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

pub struct TestEnvironment {
    pub dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn fasta(&self, name: &str, content: &str) -> PathBuf {
        create_test_fasta(self.dir.path(), name, content)
    }
}
