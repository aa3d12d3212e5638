use crate::*;

pub fn handle_admin_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Some(command) = &cli.command else {
        return Ok(false);
    };

    match command {
        Commands::Doctor { project_path } => {
            let report = preflight(project_path);
            let ok = report.overall == "ok";
            emit(cli.json, ok, &report, |r| {
                println!("covlab doctor: {}", r.overall);
                for c in &r.checks {
                    println!("{}\t{}", c.name, c.status);
                }
            })?;
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Clean { project_path } => {
            let cfg = load_config(project_path)?;
            let report = clean_outputs(project_path, &cfg)?;
            emit(cli.json, true, &report, |r| {
                if r.removed.is_empty() {
                    println!("nothing to remove");
                } else {
                    for d in &r.removed {
                        println!("removed {}", d);
                    }
                }
            })?;
        }
    }

    Ok(true)
}
