//! The four generation strategies and their one-shot dispatcher.
//!
//! Dispatch → strategy → (merger + catalog) → renderer → emitter, one
//! module at a time in list order. A failed write aborts the remaining
//! batch; files already written stay on disk.

use crate::core::catalog::{self, HybridCatalog};
use crate::core::config::GodmodeConfig;
use crate::core::definition::ModuleDefinition;
use crate::core::emit;
use crate::core::error::MaxstackError;
use crate::core::merge;
use colored::Colorize;
use std::fs;
use std::path::Path;

pub const DEFAULT_REPO_NAME: &str = "max-stack";

const README_BOILERPLATE: &str = "Multidimensional MAX engine.";

/// Run the strategy selected by `config`. Unknown modes do nothing.
pub fn dispatch(config: &GodmodeConfig) -> Result<(), MaxstackError> {
    let catalog = HybridCatalog::builtin();
    match config {
        GodmodeConfig::GenerateAll(cfg) => generate_all(&cfg.target_dir, catalog),
        GodmodeConfig::FromJson(cfg) => {
            generate_from_json(&cfg.target_dir, cfg.json_path.as_deref(), catalog)
        }
        GodmodeConfig::BootstrapRepo(cfg) => {
            bootstrap_repo(&cfg.target_dir, cfg.repo_name.as_deref(), catalog)
        }
        GodmodeConfig::AutoCreate(cfg) => {
            auto_create(&cfg.target_dir, cfg.modules.as_deref(), catalog)
        }
        GodmodeConfig::Unknown => Ok(()),
    }
}

fn emit_definition(
    target_dir: &Path,
    def: &ModuleDefinition,
    catalog: &HybridCatalog,
) -> Result<(), MaxstackError> {
    let enriched = merge::enrich(def, catalog);
    emit::write_module_file(target_dir, &enriched)?;
    Ok(())
}

fn generate_all(target_dir: &Path, catalog: &HybridCatalog) -> Result<(), MaxstackError> {
    println!(
        "Generating {} module definitions into {}",
        catalog.len(),
        target_dir.display()
    );
    emit::ensure_dir(target_dir)?;
    for def in catalog::default_definitions() {
        emit_definition(target_dir, &def, catalog)?;
    }
    println!("{} module generation complete", "✓".bright_green());
    Ok(())
}

fn generate_from_json(
    target_dir: &Path,
    json_path: Option<&Path>,
    catalog: &HybridCatalog,
) -> Result<(), MaxstackError> {
    // No source file configured: a normal empty run, not an error.
    let Some(json_path) = json_path else {
        return Ok(());
    };
    let raw = fs::read_to_string(json_path).map_err(MaxstackError::IoError)?;
    let definitions: Vec<ModuleDefinition> = serde_json::from_str(&raw).map_err(|err| {
        MaxstackError::ConfigError(format!(
            "{} is not a JSON array of module definitions: {}",
            json_path.display(),
            err
        ))
    })?;
    println!(
        "Generating {} module definitions from {} into {}",
        definitions.len(),
        json_path.display(),
        target_dir.display()
    );
    emit::ensure_dir(target_dir)?;
    for def in &definitions {
        emit_definition(target_dir, def, catalog)?;
    }
    println!("{} module generation complete", "✓".bright_green());
    Ok(())
}

fn bootstrap_repo(
    target_dir: &Path,
    repo_name: Option<&str>,
    catalog: &HybridCatalog,
) -> Result<(), MaxstackError> {
    let title = repo_name.unwrap_or(DEFAULT_REPO_NAME);
    println!("Bootstrapping {} into {}", title, target_dir.display());
    emit::ensure_dir(target_dir)?;
    let modules_dir = target_dir.join("modules");
    emit::ensure_dir(&modules_dir)?;
    emit::ensure_dir(&target_dir.join("scripts"))?;

    let readme_path = target_dir.join("README.md");
    fs::write(
        &readme_path,
        format!("# {}\n\n{}\n", title, README_BOILERPLATE),
    )
    .map_err(MaxstackError::IoError)?;
    println!("  wrote: {}", readme_path.display());

    generate_all(&modules_dir, catalog)
}

fn auto_create(
    target_dir: &Path,
    modules: Option<&[ModuleDefinition]>,
    catalog: &HybridCatalog,
) -> Result<(), MaxstackError> {
    // Only an absent list falls back to the built-in set; an explicit empty
    // list is respected and generates nothing.
    let Some(modules) = modules else {
        return generate_all(target_dir, catalog);
    };
    println!(
        "Generating {} module definitions into {}",
        modules.len(),
        target_dir.display()
    );
    emit::ensure_dir(target_dir)?;
    for def in modules {
        emit_definition(target_dir, def, catalog)?;
    }
    println!("{} module generation complete", "✓".bright_green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AutoCreateConfig, FromJsonConfig, GenerateAllConfig};
    use tempfile::tempdir;

    fn yml_count(dir: &Path) -> usize {
        fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "yml"))
                    .count()
            })
            .unwrap_or(0)
    }

    #[test]
    fn generate_all_writes_the_full_default_set() {
        let tmp = tempdir().expect("tempdir");
        let target = tmp.path().join("modules");
        dispatch(&GodmodeConfig::GenerateAll(GenerateAllConfig {
            target_dir: target.clone(),
        }))
        .expect("generate_all");
        assert_eq!(yml_count(&target), 25);
        assert!(target.join("max_hertz.yml").exists());
    }

    #[test]
    fn from_json_without_a_path_writes_nothing() {
        let tmp = tempdir().expect("tempdir");
        let target = tmp.path().join("never-created");
        dispatch(&GodmodeConfig::FromJson(FromJsonConfig {
            target_dir: target.clone(),
            json_path: None,
        }))
        .expect("from_json no-op");
        assert!(!target.exists());
    }

    #[test]
    fn auto_create_respects_an_explicit_empty_list() {
        let tmp = tempdir().expect("tempdir");
        let target = tmp.path().join("out");
        dispatch(&GodmodeConfig::AutoCreate(AutoCreateConfig {
            target_dir: target.clone(),
            modules: Some(Vec::new()),
        }))
        .expect("auto_create empty");
        assert!(target.exists());
        assert_eq!(yml_count(&target), 0);
    }

    #[test]
    fn unknown_mode_is_a_no_op() {
        dispatch(&GodmodeConfig::Unknown).expect("unknown mode");
    }
}
