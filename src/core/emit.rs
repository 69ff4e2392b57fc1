//! File emission for rendered modules.
//!
//! One `.yml` file per module under the target directory, overwriting
//! unconditionally. Writes are not atomic; the target directory is assumed
//! exclusive to a single sequential invocation.

use crate::core::error::MaxstackError;
use crate::core::merge::EnrichedDefinition;
use crate::core::render;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Create `dir` and any missing parent directories.
pub fn ensure_dir(dir: &Path) -> Result<(), MaxstackError> {
    fs::create_dir_all(dir).map_err(MaxstackError::IoError)
}

fn is_valid_file_stem(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Render `def` and write it to `<target_dir>/<name>.yml`.
///
/// The target directory is created if missing. Any existing file of the
/// same name is overwritten; a failed write leaves whatever was already on
/// disk and is not cleaned up.
pub fn write_module_file(
    target_dir: &Path,
    def: &EnrichedDefinition,
) -> Result<PathBuf, MaxstackError> {
    if !is_valid_file_stem(&def.name) {
        return Err(MaxstackError::ValidationError(format!(
            "module name is not a valid filename component: {:?}",
            def.name
        )));
    }
    ensure_dir(target_dir)?;
    let path = target_dir.join(format!("{}.yml", def.name));
    fs::write(&path, render::render(def)).map_err(MaxstackError::IoError)?;
    println!("  wrote: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::HybridCatalog;
    use crate::core::definition::ModuleDefinition;
    use crate::core::merge;
    use tempfile::tempdir;

    fn enriched(name: &str) -> EnrichedDefinition {
        let def = ModuleDefinition {
            name: name.to_string(),
            ..ModuleDefinition::default()
        };
        merge::enrich(&def, HybridCatalog::builtin())
    }

    #[test]
    fn writes_into_a_created_directory() {
        let tmp = tempdir().expect("tempdir");
        let target = tmp.path().join("a/b/modules");
        let path = write_module_file(&target, &enriched("max_hertz")).expect("write");
        assert_eq!(path, target.join("max_hertz.yml"));
        assert!(path.exists());
    }

    #[test]
    fn overwrites_rather_than_appends() {
        let tmp = tempdir().expect("tempdir");
        let first = write_module_file(tmp.path(), &enriched("max_hertz")).expect("first write");
        let first_bytes = fs::read(&first).expect("read first");
        let second = write_module_file(tmp.path(), &enriched("max_hertz")).expect("second write");
        let second_bytes = fs::read(&second).expect("read second");
        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn rejects_names_that_escape_the_target_directory() {
        let tmp = tempdir().expect("tempdir");
        for bad in ["", "..", "a/b", "/abs"] {
            let result = write_module_file(tmp.path(), &enriched(bad));
            assert!(result.is_err(), "expected rejection for {:?}", bad);
        }
    }
}
