//! Godmode invocation configuration.
//!
//! Read once per run from the `MAXSTACK_GODMODE_CONFIG` environment
//! variable as a JSON payload. The config is a tagged union over the four
//! generation modes, so each variant carries only the parameters that mode
//! actually uses.

use crate::core::definition::ModuleDefinition;
use crate::core::error::MaxstackError;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub const GODMODE_CONFIG_ENV: &str = "MAXSTACK_GODMODE_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "mode")]
pub enum GodmodeConfig {
    #[serde(rename = "generate_all")]
    GenerateAll(GenerateAllConfig),
    #[serde(rename = "from_json")]
    FromJson(FromJsonConfig),
    #[serde(rename = "bootstrap_repo")]
    BootstrapRepo(BootstrapRepoConfig),
    #[serde(rename = "auto_create")]
    AutoCreate(AutoCreateConfig),
    /// Any unrecognized `mode` string: accepted, dispatched as a no-op.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAllConfig {
    pub target_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FromJsonConfig {
    pub target_dir: PathBuf,
    #[serde(default)]
    pub json_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapRepoConfig {
    pub target_dir: PathBuf,
    #[serde(default)]
    pub repo_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoCreateConfig {
    pub target_dir: PathBuf,
    /// `None` falls back to the built-in module set; an explicit empty list
    /// generates nothing.
    #[serde(default)]
    pub modules: Option<Vec<ModuleDefinition>>,
}

/// Read the godmode config from the environment.
///
/// An unset or empty variable is a normal empty run (`Ok(None)`), not a
/// failure. A present but unparsable payload is fatal.
pub fn from_env() -> Result<Option<GodmodeConfig>, MaxstackError> {
    let raw = match env::var(GODMODE_CONFIG_ENV) {
        Ok(raw) => raw,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(err) => return Err(MaxstackError::EnvVarError(err)),
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let config = serde_json::from_str(&raw).map_err(|err| {
        MaxstackError::ConfigError(format!("invalid {} payload: {}", GODMODE_CONFIG_ENV, err))
    })?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_mode_variant() {
        let config: GodmodeConfig =
            serde_json::from_str(r#"{"mode":"generate_all","targetDir":"/tmp/out"}"#).unwrap();
        assert!(matches!(config, GodmodeConfig::GenerateAll(_)));

        let config: GodmodeConfig = serde_json::from_str(
            r#"{"mode":"from_json","targetDir":"/tmp/out","jsonPath":"/tmp/defs.json"}"#,
        )
        .unwrap();
        let GodmodeConfig::FromJson(cfg) = config else {
            panic!("expected from_json");
        };
        assert_eq!(cfg.json_path.as_deref(), Some("/tmp/defs.json".as_ref()));

        let config: GodmodeConfig =
            serde_json::from_str(r#"{"mode":"bootstrap_repo","targetDir":"/tmp/r","repoName":"foo"}"#)
                .unwrap();
        let GodmodeConfig::BootstrapRepo(cfg) = config else {
            panic!("expected bootstrap_repo");
        };
        assert_eq!(cfg.repo_name.as_deref(), Some("foo"));
    }

    #[test]
    fn auto_create_distinguishes_absent_from_empty_modules() {
        let config: GodmodeConfig =
            serde_json::from_str(r#"{"mode":"auto_create","targetDir":"/tmp/out"}"#).unwrap();
        let GodmodeConfig::AutoCreate(cfg) = config else {
            panic!("expected auto_create");
        };
        assert!(cfg.modules.is_none());

        let config: GodmodeConfig =
            serde_json::from_str(r#"{"mode":"auto_create","targetDir":"/tmp/out","modules":[]}"#)
                .unwrap();
        let GodmodeConfig::AutoCreate(cfg) = config else {
            panic!("expected auto_create");
        };
        assert_eq!(cfg.modules.as_deref(), Some(&[][..]));
    }

    #[test]
    fn unrecognized_mode_becomes_unknown() {
        let config: GodmodeConfig =
            serde_json::from_str(r#"{"mode":"summon_everything","targetDir":"/tmp/out"}"#).unwrap();
        assert!(matches!(config, GodmodeConfig::Unknown));
    }

    #[test]
    fn missing_target_dir_is_rejected() {
        assert!(serde_json::from_str::<GodmodeConfig>(r#"{"mode":"generate_all"}"#).is_err());
    }

    #[test]
    fn module_order_survives_config_round_trip() {
        let raw = r#"{"mode":"auto_create","targetDir":"/tmp/out","modules":[{"name":"m","logic":{"z":1,"a":2}}]}"#;
        let config: GodmodeConfig = serde_json::from_str(raw).unwrap();
        let GodmodeConfig::AutoCreate(cfg) = config else {
            panic!("expected auto_create");
        };
        let modules = cfg.modules.expect("modules");
        let keys: Vec<&str> = modules[0].logic.keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
