use std::{
    env,
    path::{Path, PathBuf},
};

/// Name of the configuration file, looked up in CWD and then in HOME
pub const CONFIG_FILE: &str = ".relai-deck.toml";

/// Load config file content from CWD first, then home directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home_config) = get_home_config_path() {
        candidates.push(home_config);
    }
    load_first_existing(&candidates)
}

/// Read the first candidate path that can be read
pub(crate) fn load_first_existing(candidates: &[PathBuf]) -> Option<String> {
    candidates.iter().find_map(|path| read_config(path))
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}

/// Get the path to the config file in the home directory
///
/// Returns ~/.relai-deck.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
