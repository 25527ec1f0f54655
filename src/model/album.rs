// Use 3rd party
use chrono::{DateTime, Utc};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

// Use local
use crate::codec::{self, ROOT};

/// An album as known to a store. Values are immutable: an update produces a new `Album`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Album {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub rate: i32,
    pub release_date: DateTime<Utc>,
}

impl Album {
    /// Builds the album a store hands back after accepting `args` under a fresh `id`.
    #[must_use]
    pub fn from_args(id: Uuid, args: NewAlbumArgs, rate: i32) -> Self {
        Self {
            id,
            title: args.title,
            artist: args.artist,
            rate,
            release_date: args.release_date,
        }
    }
}

/// The fields a client supplies when asking a store to create an album.
/// `id` and `rate` are owned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NewAlbumArgs {
    pub title: String,
    pub artist: String,
    pub release_date: DateTime<Utc>,
}

impl NewAlbumArgs {
    #[must_use]
    pub fn new(title: &str, artist: &str, release_date: DateTime<Utc>) -> Self {
        Self {
            title: title.to_owned(),
            artist: artist.to_owned(),
            release_date,
        }
    }
}

// serde goes through the codecs so the wire format has a single definition

impl Serialize for Album {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        codec::encode_album(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Album {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        codec::decode_album(ROOT, &value).map_err(de::Error::custom)
    }
}

impl Serialize for NewAlbumArgs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        codec::encode_album_args(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NewAlbumArgs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        codec::decode_album_args(ROOT, &value).map_err(de::Error::custom)
    }
}
