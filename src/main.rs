mod cli;
mod commands;
mod domain;
mod pyenv;
mod services;

pub use cli::{Cli, Commands};
pub use domain::models::*;
pub use pyenv::ToolError;
pub use services::config::load_config;
pub use services::doctor::preflight;
pub use services::output::emit;
pub use services::storage::{audit, clean_outputs};
pub use services::workflow::run_workflow;

use clap::Parser;

fn main() {
    let cli = Cli::parse();

    if cli.command.is_none() && cli.project_path.is_none() {
        println!("Usage: covlab <project_path> [<module_name>]");
        println!("Example: covlab /home/user/algorithms arrays.delete_nth");
        std::process::exit(1);
    }

    if let Err(err) = dispatch(&cli) {
        eprintln!("covlab: {:#}", err);
        // A delegated command's exit status passes through unchanged.
        let code = err
            .downcast_ref::<ToolError>()
            .map(ToolError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn dispatch(cli: &Cli) -> anyhow::Result<()> {
    if commands::handle_admin_commands(cli)? {
        return Ok(());
    }
    commands::handle_run(cli)
}
