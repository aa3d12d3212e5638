use crate::domain::models::WorkflowConfig;
use crate::pyenv::Virtualenv;
use crate::services::process::ToolInvocation;
use std::path::Path;

fn coverage(venv: &Virtualenv, project: &Path) -> ToolInvocation {
    ToolInvocation::new(venv.python())
        .args(["-m", "coverage"])
        .cwd(project)
}

/// Coverage-wrapped run of the existing suite plus the three report
/// emissions for the given suite label: JSON, HTML keyed by the label,
/// and the plain terminal summary.
pub fn suite_run(
    venv: &Virtualenv,
    project: &Path,
    cfg: &WorkflowConfig,
    label: &str,
) -> Vec<ToolInvocation> {
    vec![
        coverage(venv, project).args(["run", "-m", "pytest"]).arg(&cfg.tests_dir),
        coverage(venv, project)
            .args(["json", "-o"])
            .arg(format!("{}/coverage_{}.json", cfg.reports_dir, label)),
        coverage(venv, project)
            .args(["html", "-d"])
            .arg(format!("{}/coverage_html_report_{}", cfg.reports_dir, label)),
        coverage(venv, project).arg("report"),
    ]
}

/// Branch-coverage run over the union of the existing and generated suites.
/// Runs whether or not generation happened; an empty generated-tests
/// directory contributes nothing.
pub fn combined_run(
    venv: &Virtualenv,
    project: &Path,
    cfg: &WorkflowConfig,
) -> Vec<ToolInvocation> {
    vec![
        coverage(venv, project)
            .args(["run", "--branch", "-m", "pytest"])
            .arg(&cfg.tests_dir)
            .arg(&cfg.generated_tests_dir),
        coverage(venv, project)
            .args(["xml", "-o"])
            .arg(format!("{}/coverage_combined.xml", cfg.reports_dir)),
        coverage(venv, project)
            .args(["html", "-d"])
            .arg(format!("{}/coverage_html_report_combined", cfg.reports_dir)),
        coverage(venv, project).args(["report", "-m"]),
    ]
}
