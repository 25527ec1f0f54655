//! Rsalbums is the shared contract of an album catalog: the entities a client and a
//! server exchange, the JSON codecs both sides use for them, and the asynchronous
//! store interface albums are read from and written to.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rsalbums = "0.1.0"
//! ```
//!
//! ## Wire format
//!
//! An album travels as an object with exactly these keys, in this order:
//!
//! ```json
//! {"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","title":"Rumours","artist":"Fleetwood Mac","rate":5,"releaseDate":"1977-02-04T00:00:00Z"}
//! ```
//!
//! Decoding never panics: it yields the album or a [`codec::DecodeError`] naming the
//! path of the offending field.
//!
//! ```rust
//! use rsalbums::codec::{self, ROOT};
//!
//! let value = serde_json::json!({"title": "T", "artist": "A", "rate": 5, "releaseDate": "2020-01-01T00:00:00Z"});
//! let err = codec::decode_album(ROOT, &value).unwrap_err();
//! assert_eq!(err.path, "$.id");
//! ```
//!
//! ## Stores
//!
//! Anything implementing [`store::MusicStore`] can back the catalog. The crate ships an
//! in-memory store and an HTTP client for a remote album api. The client reads its base
//! URL from `RSALBUMS_API_URL`.
//!
//! ### Examples
//!
//! ```toml
//! [dependencies]
//! rsalbums = { version = "0.1.0" }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ```rust,no_run
//! use rsalbums::client::AlbumClient;
//! use rsalbums::config::ClientConfig;
//! use rsalbums::store::MusicStore;
//! use dotenv::dotenv;
//!
//! #[tokio::main]
//! async fn main() {
//!     {
//!         dotenv().ok();
//!     }
//!
//!     let config = ClientConfig::from_env().unwrap();
//!     let client = AlbumClient::new(config);
//!
//!     for album in client.find_popular().await {
//!         println!("{} - {}", album.artist, album.title);
//!     }
//! }
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod endpoints;
pub mod model;
pub mod store;
