use crate::domain::models::ConfigFile;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "covlab.toml";

/// Load `covlab.toml` from the project directory. A missing file means
/// all defaults; a partial file keeps defaults for whatever it omits.
pub fn load_config(project: &Path) -> anyhow::Result<ConfigFile> {
    let path = project.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
