//! Maxstack: automation toolkit for the ram133 organization.
//!
//! The heart of the crate is the **module-definition compiler** ("godmode"):
//! abstract module descriptions — a name, typed inputs, a logic graph of
//! named expressions, and named outputs — are merged with their built-in
//! default enrichment and rendered into canonical YAML files, one per
//! module. Four generation modes are selected by an environment-injected
//! JSON configuration:
//!
//! - `generate_all`: emit the full built-in module set
//! - `from_json`: emit definitions read from an external JSON file
//! - `bootstrap_repo`: scaffold a repository skeleton, then `generate_all`
//! - `auto_create`: emit a caller-supplied list, or the built-in set
//!
//! The `{{ ... }}` expression strings inside module logic are opaque
//! payloads: stored and emitted verbatim, never parsed or evaluated.
//!
//! Around the compiler sit three small subsystems for day-to-day org
//! chores, all funneled through one external-command seam
//! ([`core::github`]): repository creation, workflow installation, and
//! repository metadata backup. The compiler itself never spawns a process.
//!
//! # Examples
//!
//! ```bash
//! # Generate the built-in module set
//! MAXSTACK_GODMODE_CONFIG='{"mode":"generate_all","targetDir":"out"}' maxstack godmode
//!
//! # Scaffold a repository skeleton with modules
//! MAXSTACK_GODMODE_CONFIG='{"mode":"bootstrap_repo","targetDir":"r","repoName":"foo"}' maxstack godmode
//!
//! # Org chores
//! maxstack repo create my-service
//! maxstack workflow install --repo my-service --file ci.yml
//! maxstack backup run my-service
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: data model, catalog, merger, renderer, emitter, dispatcher
//! - [`plugins`]: repo/workflow/backup command groups

pub mod core;
pub mod plugins;

use core::{config, error, godmode};
use plugins::{backup, repo, workflow};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(
    name = "maxstack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Automation toolkit for the ram133 organization: module compiler, repo bootstrap, workflow install, backup"
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the module-definition compiler from MAXSTACK_GODMODE_CONFIG.
    Godmode,
    /// Repository management (create, default branch).
    Repo(repo::RepoCli),
    /// Workflow installation into repositories.
    Workflow(workflow::WorkflowCli),
    /// Repository metadata backup.
    Backup(backup::BackupCli),
    /// Show the maxstack version.
    Version,
}

pub fn run() -> Result<(), error::MaxstackError> {
    let cli = Cli::parse();
    let current_dir = std::env::current_dir()?;

    match cli.command {
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Godmode => {
            // No configuration at all is a normal empty run.
            let Some(config) = config::from_env()? else {
                return Ok(());
            };
            godmode::dispatch(&config)
        }
        Command::Repo(cli) => repo::run_repo_cli(&current_dir, cli),
        Command::Workflow(cli) => workflow::run_workflow_cli(&current_dir, cli),
        Command::Backup(cli) => backup::run_backup_cli(&current_dir, cli),
    }
}
