//! The asynchronous storage interface albums are read from and written to.

pub mod memory;

// Use 3rd party
use async_trait::async_trait;
use uuid::Uuid;

// Use local
use crate::model::album::{Album, NewAlbumArgs};

/// Access to a backing store of albums.
///
/// Absence is an empty result rather than an error: `find_by_id` returns `None` for an
/// unknown id, and `create`/`update` return `None` when the store rejects the change.
/// Calls are independent and carry no ordering guarantee; callers that need one
/// (a `create` visible to the next `find_all`) must await them in sequence.
#[async_trait]
pub trait MusicStore: Send + Sync {
    /// Albums ranked by popularity. The ranking is up to the store.
    async fn find_popular(&self) -> Vec<Album>;

    async fn find_all(&self) -> Vec<Album>;

    async fn find_by_id(&self, id: Uuid) -> Option<Album>;

    /// Creates an album from `args`, the store assigning its `id` and initial `rate`.
    async fn create(&self, args: NewAlbumArgs) -> Option<Album>;

    /// Replaces the stored album that shares `album.id`.
    async fn update(&self, album: Album) -> Option<Album>;
}
