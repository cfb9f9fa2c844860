use anyhow::{anyhow, Result};
use std::path::PathBuf;

pub fn get_gridpaste_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".gridpaste"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_gridpaste_dir()?;
    Ok(app_dir.join("config.toml"))
}
