use crate::domain::models::{ConfigFile, RunReport, StepReport};
use crate::pyenv::{self, Virtualenv};
use crate::services::coverage::{combined_run, suite_run};
use crate::services::generate::pynguin_run;
use crate::services::lcov::{lcov_export, lcov_render};
use crate::services::process::{run_tool, ToolInvocation};
use crate::services::storage;
use crate::services::summary::read_coverage_totals;
use std::path::Path;

pub const BASELINE_LABEL: &str = "A";
pub const COMPLETION_BANNER: &str = "=== coverage workflow complete ===";

fn begin(json: bool, step: &str, detail: &str) {
    if !json {
        println!("==> {}: {}", step, detail);
    }
    storage::audit(
        "step",
        serde_json::json!({"step": step, "detail": detail}),
    );
}

fn record(steps: &mut Vec<StepReport>, step: &str) {
    steps.push(StepReport {
        step: step.to_string(),
        status: "ok".to_string(),
    });
}

fn run_all(invocations: &[ToolInvocation]) -> anyhow::Result<()> {
    for inv in invocations {
        run_tool(inv)?;
    }
    Ok(())
}

/// The whole lab sequence, in order, stopping at the first failed step.
/// Every step before the failure leaves its artifacts on disk, and the
/// virtualenv stays active so the failure can be inspected.
pub fn run_workflow(
    project: &Path,
    module: Option<&str>,
    cfg: &ConfigFile,
    json: bool,
) -> anyhow::Result<RunReport> {
    let venv = Virtualenv::new(project, &cfg.workflow.venv_dir);
    let mut steps: Vec<StepReport> = Vec::new();

    begin(json, "provision", &venv.root().to_string_lossy());
    pyenv::provision(&venv, &cfg.tools, project)?;
    record(&mut steps, "provision");

    begin(json, "prepare-dirs", &cfg.workflow.reports_dir);
    storage::ensure_output_dirs(project, cfg)?;
    record(&mut steps, "prepare-dirs");

    begin(json, "coverage-baseline", &format!("suite {}", BASELINE_LABEL));
    run_all(&suite_run(&venv, project, &cfg.workflow, BASELINE_LABEL))?;
    record(&mut steps, "coverage-baseline");

    let generation_ran = match module {
        Some(module) => {
            begin(json, "generate", module);
            run_tool(&pynguin_run(&venv, project, &cfg.workflow, module))?;
            record(&mut steps, "generate");
            true
        }
        None => false,
    };

    begin(json, "coverage-combined", "existing + generated tests");
    run_all(&combined_run(&venv, project, &cfg.workflow))?;
    record(&mut steps, "coverage-combined");

    begin(json, "lcov-export", "coverage.lcov");
    run_tool(&lcov_export(&venv, project, &cfg.workflow))?;
    record(&mut steps, "lcov-export");

    begin(json, "lcov-render", "lcov-report");
    run_tool(&lcov_render(project, &cfg.workflow))?;
    record(&mut steps, "lcov-render");

    let baseline_json = storage::reports_dir(project, cfg)
        .join(format!("coverage_{}.json", BASELINE_LABEL));
    let baseline = read_coverage_totals(&baseline_json).ok();

    let report = RunReport {
        project: project.to_string_lossy().to_string(),
        module: module.map(str::to_string),
        generation_ran,
        steps,
        baseline,
    };
    storage::write_run_report(project, cfg, &report)?;

    if !json {
        if let Some(b) = &report.baseline {
            println!(
                "baseline coverage: {:.1}% ({} of {} lines)",
                b.percent_covered, b.covered_lines, b.num_statements
            );
        }
        // The banner is the last line of text output; teardown prints nothing.
        println!("{}", COMPLETION_BANNER);
    }

    pyenv::teardown(&venv)?;
    storage::audit(
        "teardown",
        serde_json::json!({"venv": venv.root().to_string_lossy()}),
    );

    Ok(report)
}
