use crate::domain::models::{CheckItem, DoctorReport};
use crate::services::config::{load_config, CONFIG_FILE_NAME};
use std::path::Path;
use std::process::Command;

fn probe(name: &str, program: &str, args: &[&str]) -> CheckItem {
    let ok = Command::new(program)
        .args(args)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    CheckItem {
        name: name.to_string(),
        status: if ok { "ok" } else { "missing" }.to_string(),
    }
}

/// Preflight for everything the workflow shells out to. Nothing here
/// mutates the project.
pub fn preflight(project: &Path) -> DoctorReport {
    let mut checks = vec![
        probe("python3", "python3", &["--version"]),
        probe("venv_module", "python3", &["-m", "venv", "--help"]),
        probe("genhtml", "genhtml", &["--version"]),
    ];

    checks.push(CheckItem {
        name: "config".to_string(),
        status: match load_config(project) {
            Ok(_) if project.join(CONFIG_FILE_NAME).exists() => "ok",
            Ok(_) => "default",
            Err(_) => "invalid",
        }
        .to_string(),
    });

    let overall = if checks
        .iter()
        .all(|c| c.status == "ok" || c.status == "default")
    {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();

    DoctorReport { overall, checks }
}
