use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch directory that `td` runs in.
pub struct TdWorkspace {
    _dir: TempDir,
    pub root: PathBuf,
}

impl TdWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp workspace");
        let root = dir.path().to_path_buf();
        Self { _dir: dir, root }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(".tickets").join("tickets.jsonl")
    }
}

pub struct TdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl TdOutput {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Build a `td` command rooted in the workspace with a clean environment.
pub fn td(workspace: &TdWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("td").expect("td binary");
    cmd.current_dir(&workspace.root)
        .env_remove("TD_DATA_FILE")
        .env_remove("TD_DEFAULT_TYPE")
        .env_remove("TD_JSON")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_td<I, S>(workspace: &TdWorkspace, args: I, label: &str) -> TdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = td(workspace)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run td: {e}"));
    TdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
