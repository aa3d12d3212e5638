use std::path::{Path, PathBuf};

use crate::domain::models::ToolVersions;
use crate::services::process::{run_tool, ToolInvocation};

/// A project-local Python virtual environment.
///
/// The layout is the POSIX venv layout: tools live under `<root>/bin`.
#[derive(Debug, Clone)]
pub struct Virtualenv {
    root: PathBuf,
}

impl Virtualenv {
    pub fn new(project: &Path, venv_dir: &str) -> Self {
        Self {
            root: project.join(venv_dir),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bin(&self, tool: &str) -> PathBuf {
        self.root.join("bin").join(tool)
    }

    pub fn python(&self) -> PathBuf {
        self.bin("python")
    }

    pub fn pip(&self) -> PathBuf {
        self.bin("pip")
    }

    pub fn pynguin(&self) -> PathBuf {
        self.bin("pynguin")
    }

    pub fn exists(&self) -> bool {
        self.root.exists()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    #[error("command not found: {0}")]
    CommandNotFound(String),
    #[error("{program} exited with status {code}")]
    CommandFailed { program: String, code: i32 },
    #[error("{program} terminated by signal")]
    CommandKilled { program: String },
}

impl ToolError {
    /// Exit status covlab itself should exit with when this error reaches main.
    /// A failed child's status is passed through unchanged.
    pub fn exit_code(&self) -> i32 {
        match self {
            ToolError::CommandFailed { code, .. } => *code,
            ToolError::CommandNotFound(_) | ToolError::CommandKilled { .. } => 1,
        }
    }
}

pub fn pinned_requirements(versions: &ToolVersions) -> Vec<String> {
    vec![
        format!("pytest=={}", versions.pytest),
        format!("coverage=={}", versions.coverage),
        format!("pynguin=={}", versions.pynguin),
    ]
}

/// Create the venv and install the pinned tool set into it.
pub fn provision(venv: &Virtualenv, versions: &ToolVersions, project: &Path) -> anyhow::Result<()> {
    let create = ToolInvocation::new("python3")
        .args(["-m", "venv"])
        .arg(venv.root().to_string_lossy())
        .cwd(project);
    run_tool(&create)?;

    let install = ToolInvocation::new(venv.pip())
        .arg("install")
        .args(pinned_requirements(versions))
        .cwd(project);
    run_tool(&install)?;
    Ok(())
}

/// Delete the venv directory. Only called on the success path; a failed run
/// leaves the environment in place for inspection.
pub fn teardown(venv: &Virtualenv) -> anyhow::Result<()> {
    if venv.exists() {
        std::fs::remove_dir_all(venv.root())?;
    }
    Ok(())
}
