pub mod album;

pub use self::album::{Album, NewAlbumArgs};
