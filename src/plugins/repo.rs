use crate::core::error::MaxstackError;
use crate::core::github::{self, ORG};
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser, Debug)]
#[clap(
    name = "repo",
    about = "Repository management for the ram133 organization"
)]
pub struct RepoCli {
    #[clap(subcommand)]
    pub command: RepoCommand,
}

#[derive(Subcommand, Debug)]
pub enum RepoCommand {
    /// Create a public repository in the organization.
    Create { name: String },
    /// Set the default branch of a repository.
    DefaultBranch {
        name: String,
        #[clap(long, default_value = "main")]
        branch: String,
    },
}

pub fn run_repo_cli(cwd: &Path, cli: RepoCli) -> Result<(), MaxstackError> {
    match cli.command {
        RepoCommand::Create { name } => create_repo(cwd, &name),
        RepoCommand::DefaultBranch { name, branch } => set_default_branch(cwd, &name, &branch),
    }
}

pub fn create_repo(cwd: &Path, name: &str) -> Result<(), MaxstackError> {
    println!("Creating repo {}/{}", ORG, name);
    let slug = format!("{}/{}", ORG, name);
    github::run_gh(
        &["repo", "create", slug.as_str(), "--public", "--confirm"],
        cwd,
    )?;
    println!("  created: {}", slug);
    Ok(())
}

pub fn set_default_branch(cwd: &Path, name: &str, branch: &str) -> Result<(), MaxstackError> {
    println!("Setting default branch of {}/{} to {}", ORG, name, branch);
    let endpoint = format!("repos/{}/{}", ORG, name);
    let field = format!("default_branch={}", branch);
    github::run_gh(
        &["api", endpoint.as_str(), "-X", "PATCH", "-F", field.as_str()],
        cwd,
    )?;
    Ok(())
}
