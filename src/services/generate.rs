use crate::domain::models::WorkflowConfig;
use crate::pyenv::Virtualenv;
use crate::services::process::ToolInvocation;
use std::path::Path;

pub fn qualified_module(namespace: &str, module: &str) -> String {
    if namespace.is_empty() {
        module.to_string()
    } else {
        format!("{}.{}", namespace, module)
    }
}

/// Pynguin invocation for one module. The generator refuses to run against
/// arbitrary code unless PYNGUIN_DANGER_AWARE is set, so it is set here and
/// nowhere else.
pub fn pynguin_run(
    venv: &Virtualenv,
    project: &Path,
    cfg: &WorkflowConfig,
    module: &str,
) -> ToolInvocation {
    ToolInvocation::new(venv.pynguin())
        .arg("--project-path")
        .arg(project.to_string_lossy())
        .arg("--module-name")
        .arg(qualified_module(&cfg.module_namespace, module))
        .arg("--output-path")
        .arg(&cfg.generated_tests_dir)
        .arg("--algorithm")
        .arg(&cfg.algorithm)
        .arg("--maximum-search-time")
        .arg(cfg.search_time_secs.to_string())
        .env("PYNGUIN_DANGER_AWARE", "1")
        .cwd(project)
}
