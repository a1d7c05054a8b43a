use thiserror::Error;

use xylene_core::ResolveError;

#[derive(Debug, Error)]
pub enum XylError {
    #[error("API base URL not set. Pass --base-url or configure ~/.config/xylene/config.toml")]
    BaseUrlNotSet,

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
