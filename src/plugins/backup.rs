use crate::core::error::MaxstackError;
use crate::core::github::{self, ORG};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(
    name = "backup",
    about = "Back up repository metadata from the organization"
)]
pub struct BackupCli {
    #[clap(subcommand)]
    pub command: BackupCommand,
}

#[derive(Subcommand, Debug)]
pub enum BackupCommand {
    /// Fetch repository metadata and store it as JSON.
    Run {
        name: String,
        /// Directory for backup payloads.
        #[clap(long, default_value = "backups")]
        dir: PathBuf,
    },
}

pub fn run_backup_cli(cwd: &Path, cli: BackupCli) -> Result<(), MaxstackError> {
    match cli.command {
        BackupCommand::Run { name, dir } => backup_repo(cwd, &name, &dir),
    }
}

pub fn backup_repo(cwd: &Path, name: &str, dir: &Path) -> Result<(), MaxstackError> {
    println!("Backing up {}/{}", ORG, name);
    let endpoint = format!("repos/{}/{}", ORG, name);
    let output = github::run_gh(&["api", endpoint.as_str()], cwd)?;

    let backup_dir = cwd.join(dir);
    fs::create_dir_all(&backup_dir)?;
    let path = backup_dir.join(format!("{}.json", name));
    fs::write(&path, &output.stdout)?;
    println!("  wrote: {}", path.display());
    Ok(())
}
