use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "covlab",
    version,
    about = "Coverage and test-generation workflow CLI",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(help = "Path to the Python project to measure")]
    pub project_path: Option<PathBuf>,
    #[arg(help = "Module to generate tests for, qualified under the configured namespace")]
    pub module_name: Option<String>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preflight checks for the external tools the workflow depends on.
    Doctor {
        #[arg(long, default_value = ".")]
        project_path: PathBuf,
    },
    /// Remove the virtualenv, reports, and generated tests from a project.
    Clean {
        #[arg(long, default_value = ".")]
        project_path: PathBuf,
    },
}
