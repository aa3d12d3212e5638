use crate::domain::models::{CleanReport, ConfigFile, RunReport};
use std::path::{Path, PathBuf};

/// Best-effort JSONL audit trail. Failures to record are swallowed so the
/// audit log can never fail a run.
pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/covlab/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": unix_now(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn unix_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}

pub fn reports_dir(project: &Path, cfg: &ConfigFile) -> PathBuf {
    project.join(&cfg.workflow.reports_dir)
}

pub fn generated_tests_dir(project: &Path, cfg: &ConfigFile) -> PathBuf {
    project.join(&cfg.workflow.generated_tests_dir)
}

pub fn ensure_output_dirs(project: &Path, cfg: &ConfigFile) -> anyhow::Result<()> {
    std::fs::create_dir_all(reports_dir(project, cfg))?;
    std::fs::create_dir_all(generated_tests_dir(project, cfg))?;
    Ok(())
}

pub fn run_report_path(project: &Path, cfg: &ConfigFile) -> PathBuf {
    reports_dir(project, cfg).join("run_report.json")
}

pub fn write_run_report(
    project: &Path,
    cfg: &ConfigFile,
    report: &RunReport,
) -> anyhow::Result<()> {
    let path = run_report_path(project, cfg);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(report)?)?;
    Ok(())
}

/// Remove everything a run leaves behind: venv, reports, generated tests.
pub fn clean_outputs(project: &Path, cfg: &ConfigFile) -> anyhow::Result<CleanReport> {
    let mut removed = Vec::new();
    let targets = [
        project.join(&cfg.workflow.venv_dir),
        reports_dir(project, cfg),
        generated_tests_dir(project, cfg),
    ];
    for dir in targets {
        if dir.exists() {
            std::fs::remove_dir_all(&dir)?;
            removed.push(dir.to_string_lossy().to_string());
        }
    }
    audit(
        "clean",
        serde_json::json!({"project": project.to_string_lossy(), "removed": removed}),
    );
    Ok(CleanReport { removed })
}
