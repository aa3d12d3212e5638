use crate::*;

pub fn handle_run(cli: &Cli) -> anyhow::Result<()> {
    let Some(project_path) = cli.project_path.as_ref() else {
        anyhow::bail!("missing project path");
    };
    // Canonicalize once so the path survives the cwd change every tool
    // invocation makes, and so Pynguin gets an absolute --project-path.
    let project = match project_path.canonicalize() {
        Ok(p) => p,
        Err(_) => anyhow::bail!("project path not found: {}", project_path.display()),
    };

    let cfg = load_config(&project)?;
    audit(
        "run",
        serde_json::json!({
            "project": project.to_string_lossy(),
            "module": cli.module_name,
        }),
    );

    let report = run_workflow(&project, cli.module_name.as_deref(), &cfg, cli.json)?;

    if cli.json {
        emit(true, true, &report, |_| {})?;
    }
    Ok(())
}
