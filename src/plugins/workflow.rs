use crate::core::error::MaxstackError;
use crate::core::github::{self, ORG};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(
    name = "workflow",
    about = "Install workflow files into organization repositories"
)]
pub struct WorkflowCli {
    #[clap(subcommand)]
    pub command: WorkflowCommand,
}

#[derive(Subcommand, Debug)]
pub enum WorkflowCommand {
    /// Clone a repository, copy a workflow file under .github/workflows/,
    /// commit, push, and remove the temporary clone.
    Install {
        /// Repository name within the organization.
        #[clap(long)]
        repo: String,
        /// Workflow filename to install.
        #[clap(long)]
        file: String,
        /// Directory holding local workflow files.
        #[clap(long, default_value = "workflows")]
        source_dir: PathBuf,
    },
}

pub fn run_workflow_cli(cwd: &Path, cli: WorkflowCli) -> Result<(), MaxstackError> {
    match cli.command {
        WorkflowCommand::Install {
            repo,
            file,
            source_dir,
        } => install_workflow(cwd, &repo, &file, &source_dir),
    }
}

pub fn install_workflow(
    cwd: &Path,
    repo: &str,
    file: &str,
    source_dir: &Path,
) -> Result<(), MaxstackError> {
    println!("Installing workflow {} into {}/{}", file, ORG, repo);

    let source = cwd.join(source_dir).join(file);
    if !source.exists() {
        return Err(MaxstackError::NotFound(format!(
            "workflow file not found: {}",
            source.display()
        )));
    }

    let clone_dir = cwd.join(format!("temp-{}", repo));
    let clone_arg = clone_dir.to_string_lossy().to_string();
    let slug = format!("{}/{}", ORG, repo);
    github::run_gh(&["repo", "clone", slug.as_str(), clone_arg.as_str()], cwd)?;

    let workflows_dir = clone_dir.join(".github").join("workflows");
    fs::create_dir_all(&workflows_dir)?;
    fs::copy(&source, workflows_dir.join(file))?;

    github::run_git(&["add", "."], &clone_dir)?;
    // An unchanged tree makes commit exit non-zero; that is fine.
    github::run_git_best_effort(&["commit", "-am", "Install workflow"], &clone_dir)?;
    github::run_git(&["push"], &clone_dir)?;

    fs::remove_dir_all(&clone_dir)?;
    println!("  installed: {} -> {}/.github/workflows/", file, slug);
    Ok(())
}
