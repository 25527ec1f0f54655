// Use 3rd party
use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

// Use internal modules
use crate::codec::{DecodeError, DecodeResult, ROOT};
use crate::config::ClientConfig;
use crate::model::album::{Album, NewAlbumArgs};
use crate::store::MusicStore;

// Possible errors returned from the album client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request unauthorized")]
    Unauthorized,
    #[error("album api error: {error}")]
    Api { status: StatusCode, error: ApiError },
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("json parse error: {0}")]
    ParseJSON(#[from] serde_json::Error),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("status code: {0}")]
    StatusCode(StatusCode),
}

impl ClientError {
    async fn from_response(response: Response) -> Self {
        match response.status() {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            status @ StatusCode::FORBIDDEN | status @ StatusCode::NOT_FOUND | status @ StatusCode::BAD_REQUEST => {
                response
                    .json::<ApiError>()
                    .await
                    .map_or_else(|_| status.into(), |error| Self::Api { status, error })
            }
            status => status.into(),
        }
    }

    /// Whether the server answered 404. The `status` inside an error body is not consulted.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::StatusCode(status) | Self::Api { status, .. } => *status == StatusCode::NOT_FOUND,
            _ => false,
        }
    }
}

impl From<StatusCode> for ClientError {
    fn from(code: StatusCode) -> Self {
        Self::StatusCode(code)
    }
}

/// Error body sent by the album api.
#[derive(Debug, Error, Deserialize)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: u16,
    #[serde(alias = "error")]
    pub message: String,
}

pub type ClientResult<T> = Result<T, ClientError>;

/// HTTP client for the album api. Bodies are produced and read by the codecs in
/// `crate::codec`, never by derived serde impls.
#[derive(Debug)]
pub struct AlbumClient {
    client: Client,
    config: ClientConfig,
}

impl AlbumClient {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn api_call(&self, method: Method, url: &str, payload: Option<&Value>) -> ClientResult<Response> {
        let url = if url.starts_with("http") {
            url.to_owned()
        } else {
            [self.config.base_url.as_str(), url].concat()
        };
        debug!("{} {}", method, url);

        let response = {
            let builder = self.client.request(method, &url);

            // Only add payload when sent
            let builder = if let Some(payload) = payload {
                builder.json(payload)
            } else {
                builder
            };

            builder.send().await.map_err(ClientError::from)?
        };

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ClientError::from_response(response).await)
        }
    }

    pub async fn get(&self, url: &str) -> ClientResult<String> {
        self.api_call(Method::GET, url, None).await?.text().await.map_err(Into::into)
    }

    pub async fn post(&self, url: &str, payload: &Value) -> ClientResult<String> {
        self.api_call(Method::POST, url, Some(payload)).await?.text().await.map_err(Into::into)
    }

    pub async fn put(&self, url: &str, payload: &Value) -> ClientResult<String> {
        self.api_call(Method::PUT, url, Some(payload)).await?.text().await.map_err(Into::into)
    }

    /// Parses a response body and runs `decoder` over it. An empty body reads as `null`.
    pub(crate) fn convert_result<T, D>(input: &str, decoder: D) -> ClientResult<T>
    where
        D: Fn(&str, &Value) -> DecodeResult<T>,
    {
        let value = if input.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str::<Value>(input)?
        };
        decoder(ROOT, &value).map_err(Into::into)
    }
}

/// Failures are logged and reported as empty results, the way the store contract models them.
fn settle<T: Default>(operation: &str, result: ClientResult<T>) -> T {
    result.unwrap_or_else(|err| {
        error!("{} failed: {}", operation, err);
        T::default()
    })
}

#[async_trait]
impl MusicStore for AlbumClient {
    async fn find_popular(&self) -> Vec<Album> {
        settle("find popular albums", self.albums().popular().await)
    }

    async fn find_all(&self) -> Vec<Album> {
        settle("find all albums", self.albums().all().await)
    }

    async fn find_by_id(&self, id: Uuid) -> Option<Album> {
        settle("find album", self.albums().get(id).await)
    }

    async fn create(&self, args: NewAlbumArgs) -> Option<Album> {
        settle("create album", self.albums().create(&args).await)
    }

    async fn update(&self, album: Album) -> Option<Album> {
        settle("update album", self.albums().update(&album).await)
    }
}
