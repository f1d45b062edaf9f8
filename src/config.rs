use std::path::{Path, PathBuf};

use toml::map::Map;
use toml::Value;

use crate::error::{CgpaError, Result};
use crate::types::config::CgpaConfig;

pub const DEFAULT_CONFIG_FILE: &str = "cgpa.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/cgpa/config.toml";

/// Load the optional presentation config: `~/.config/cgpa/config.toml`
/// overlaid by `cgpa.toml` in the working directory. `None` when neither
/// file exists; nothing requires one to run.
pub fn load_config(cwd: &Path) -> Result<Option<CgpaConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(cwd, global.as_deref())
}

pub(crate) fn load_config_with_global(
    cwd: &Path,
    global_path: Option<&Path>,
) -> Result<Option<CgpaConfig>> {
    let local_path = cwd.join(DEFAULT_CONFIG_FILE);
    let global_exists = global_path.map(Path::exists).unwrap_or(false);
    if !global_exists && !local_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &local_path)?;

    let config: CgpaConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CgpaError::ConfigParse(e.to_string()))?;
    Ok(Some(config))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)?;
    let value: Value = toml::from_str(&content)
        .map_err(|e| CgpaError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    merge_toml(merged, value);
    Ok(())
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
