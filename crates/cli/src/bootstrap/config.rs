use ferrous_doh_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Ok(Config::load(path, overrides)?)
}

/// Reports which file the configuration came from. Call after logging is up.
pub fn log_config_source(path: Option<&str>) {
    match path.map(str::to_string).or_else(Config::get_config_path) {
        Some(file) => info!(config_file = %file, "Configuration loaded"),
        None => info!("No configuration file found, using defaults"),
    }
}
