//! Codecs for `Album`, collections of albums and `NewAlbumArgs`.

// Use 3rd party
use serde_json::{json, Value};

// Use local
use crate::codec::{self, encode_datetime, encode_list, encode_uuid, DecodeResult, Fields};
use crate::model::album::{Album, NewAlbumArgs};

/// Encodes to an object with the keys `id`, `title`, `artist`, `rate`, `releaseDate`, in that order.
pub fn encode_album(album: &Album) -> Value {
    json!({
        "id": encode_uuid(&album.id),
        "title": album.title,
        "artist": album.artist,
        "rate": album.rate,
        "releaseDate": encode_datetime(&album.release_date),
    })
}

pub fn decode_album(path: &str, value: &Value) -> DecodeResult<Album> {
    let fields = Fields::object(path, value)?;
    Ok(Album {
        id: fields.required("id", codec::uuid)?,
        title: fields.required("title", codec::string)?,
        artist: fields.required("artist", codec::string)?,
        rate: fields.required("rate", codec::int)?,
        release_date: fields.required("releaseDate", codec::datetime_utc)?,
    })
}

/// `null` is an absent album, not a failure.
pub fn decode_album_option(path: &str, value: &Value) -> DecodeResult<Option<Album>> {
    codec::option(decode_album, path, value)
}

pub fn encode_albums(albums: &[Album]) -> Value {
    encode_list(encode_album, albums)
}

pub fn decode_albums(path: &str, value: &Value) -> DecodeResult<Vec<Album>> {
    codec::list(decode_album, path, value)
}

pub fn encode_album_args(args: &NewAlbumArgs) -> Value {
    json!({
        "title": args.title,
        "artist": args.artist,
        "releaseDate": encode_datetime(&args.release_date),
    })
}

pub fn decode_album_args(path: &str, value: &Value) -> DecodeResult<NewAlbumArgs> {
    let fields = Fields::object(path, value)?;
    Ok(NewAlbumArgs {
        title: fields.required("title", codec::string)?,
        artist: fields.required("artist", codec::string)?,
        release_date: fields.required("releaseDate", codec::datetime_utc)?,
    })
}
