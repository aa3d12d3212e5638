use crate::domain::models::WorkflowConfig;
use crate::pyenv::Virtualenv;
use crate::services::process::ToolInvocation;
use std::path::Path;

pub fn lcov_export(venv: &Virtualenv, project: &Path, cfg: &WorkflowConfig) -> ToolInvocation {
    ToolInvocation::new(venv.python())
        .args(["-m", "coverage", "lcov", "-o"])
        .arg(format!("{}/coverage.lcov", cfg.reports_dir))
        .cwd(project)
}

/// genhtml comes from the system lcov package, not from the venv.
pub fn lcov_render(project: &Path, cfg: &WorkflowConfig) -> ToolInvocation {
    ToolInvocation::new("genhtml")
        .arg(format!("{}/coverage.lcov", cfg.reports_dir))
        .arg("-o")
        .arg(format!("{}/lcov-report", cfg.reports_dir))
        .cwd(project)
}
