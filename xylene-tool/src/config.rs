use std::path::PathBuf;

use serde::Deserialize;

use crate::error::XylError;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub api_token: Option<String>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("xylene").join("config.toml"))
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let Ok(content) = std::fs::read_to_string(path) else {
        return Config::default();
    };

    toml::from_str(&content).unwrap_or_default()
}

/// CLI flags win, then the XYLENE_API_TOKEN env var, then the config file.
pub fn resolve_api(
    cli_base_url: Option<String>,
    cli_token: Option<String>,
) -> Result<(String, Option<String>), XylError> {
    let config = load_config();

    let base_url = cli_base_url
        .or(config.base_url)
        .ok_or(XylError::BaseUrlNotSet)?;

    let token = cli_token
        .or_else(|| {
            std::env::var("XYLENE_API_TOKEN")
                .ok()
                .filter(|t| !t.is_empty())
        })
        .or(config.api_token);

    Ok((base_url, token))
}
