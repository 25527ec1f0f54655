// Use 3rd party
use reqwest::Url;
use thiserror::Error;

// Use built-in library
use std::env;

/// Environment variable holding the base URL of the album API.
pub const API_URL_VAR: &str = "RSALBUMS_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid api url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),
}

/// Where an `AlbumClient` sends its requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Validates `base_url` as an http(s) URL. A trailing `/` is dropped so
    /// endpoint paths can be appended as is.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url).map_err(|err| ConfigError::InvalidUrl {
            url: base_url.to_owned(),
            reason: err.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(Self {
                base_url: base_url.trim_end_matches('/').to_owned(),
            }),
            scheme => Err(ConfigError::UnsupportedScheme(scheme.to_owned())),
        }
    }

    /// Reads `RSALBUMS_API_URL`, falling back to `DEFAULT_API_URL` when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(API_URL_VAR) {
            Ok(url) => Self::new(&url),
            Err(_) => Self::new(DEFAULT_API_URL),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
        }
    }
}
