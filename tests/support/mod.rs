#![allow(dead_code)]

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const HEADER: &str = "Platform,Category,Service,Solution,Description";

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn bundled_dataset() -> PathBuf {
    repo_root().join(cloudmatch::DEFAULT_DATASET_PATH)
}

// Throwaway dataset root; the CSV sits at the default relative path so the
// binary can also discover it through CLOUDMATCH_ROOT.
pub struct FixtureDataset {
    dir: TempDir,
}

impl FixtureDataset {
    pub fn with_rows(rows: &[&str]) -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate fixture dir")?;
        let data_dir = dir.path().join("data");
        fs::create_dir_all(&data_dir)?;
        let mut contents = String::from(HEADER);
        for row in rows {
            contents.push('\n');
            contents.push_str(row);
        }
        contents.push('\n');
        let path = data_dir.join("clouds.csv");
        fs::write(&path, contents)
            .with_context(|| format!("failed to write fixture at {}", path.display()))?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join(cloudmatch::DEFAULT_DATASET_PATH)
    }
}

pub fn storage_fixture() -> Result<FixtureDataset> {
    FixtureDataset::with_rows(&[
        "AWS,Storage,Object Storage,Amazon S3,url1",
        "Azure,Storage,Object Storage,Azure Blob Storage,url2",
        "AWS,Storage,File Storage,Amazon EFS,url3",
    ])
}

pub fn cloudmatch() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cloudmatch"));
    cmd.env_remove("CLOUDMATCH_DATASET")
        .env_remove("CLOUDMATCH_ROOT")
        .env_remove("CLOUDMATCH_LOG");
    cmd
}

pub fn run_with_dataset(dataset: &Path, args: &[&str]) -> Result<Output> {
    cloudmatch()
        .arg("--dataset")
        .arg(dataset)
        .args(args)
        .output()
        .context("failed to execute cloudmatch")
}

pub fn json_lines(output: &Output) -> Result<Vec<Value>> {
    let stdout = String::from_utf8(output.stdout.clone()).context("stdout utf-8")?;
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).with_context(|| format!("parsing {line}")))
        .collect()
}
