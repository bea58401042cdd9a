use crate::error::{Result, VisaScoreError};
use crate::types::config::VisaConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "visa-score.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".visa-score/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/visa-score/config.toml";

/// Resolve the scoring configuration for `root`.
///
/// An explicit path is read on its own and must exist. Otherwise the global,
/// project and local layers are merged in that order; with no layer present
/// the built-in defaults apply.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<VisaConfig> {
    if let Some(path) = explicit {
        return load_single(path);
    }
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

fn load_single(path: &Path) -> Result<VisaConfig> {
    if !path.exists() {
        return Err(VisaScoreError::ConfigNotFound(path.display().to_string()));
    }
    let cfg = into_config(read_toml_value(path)?)?;
    debug!(path = %path.display(), "loaded explicit config");
    Ok(cfg)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<VisaConfig> {
    let mut merged = Value::Table(Map::new());
    let mut layers = 0usize;
    if let Some(path) = global_path {
        layers += usize::from(merge_file_if_exists(&mut merged, path)?);
    }
    layers += usize::from(merge_file_if_exists(
        &mut merged,
        &root.join(DEFAULT_CONFIG_FILE),
    )?);
    layers += usize::from(merge_file_if_exists(
        &mut merged,
        &root.join(DEFAULT_LOCAL_FILE),
    )?);

    debug!(layers, "resolved config layers");
    into_config(merged)
}

fn into_config(value: Value) -> Result<VisaConfig> {
    let cfg: VisaConfig = value
        .try_into()
        .map_err(|e: toml::de::Error| VisaScoreError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| VisaScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
