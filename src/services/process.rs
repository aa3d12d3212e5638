use crate::pyenv::ToolError;
use std::path::PathBuf;
use std::process::Command;

/// One external command to run: program, args, extra env, working directory.
///
/// Built as data so the invocation shape stays unit-testable without
/// spawning anything; `run_tool` is the only place a process starts.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
    pub cwd: Option<PathBuf>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }

    /// Rendering used by audit events and progress lines.
    pub fn command_line(&self) -> String {
        let mut out = self.program.to_string_lossy().to_string();
        for a in &self.args {
            out.push(' ');
            out.push_str(a);
        }
        out
    }
}

/// Run to completion, inheriting stdio so tool output reaches the terminal.
/// Any non-success status maps to a ToolError carrying the child's exit code.
pub fn run_tool(inv: &ToolInvocation) -> anyhow::Result<()> {
    let mut cmd = Command::new(&inv.program);
    cmd.args(&inv.args);
    for (k, v) in &inv.env {
        cmd.env(k, v);
    }
    if let Some(dir) = &inv.cwd {
        cmd.current_dir(dir);
    }

    let status = match cmd.status() {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ToolError::CommandNotFound(inv.program_name()).into());
        }
        Err(e) => {
            anyhow::bail!("failed to spawn {}: {}", inv.program_name(), e);
        }
    };

    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(ToolError::CommandFailed {
            program: inv.program_name(),
            code,
        }
        .into()),
        None => Err(ToolError::CommandKilled {
            program: inv.program_name(),
        }
        .into()),
    }
}
