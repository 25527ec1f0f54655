// Use 3rd party
use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

// Use local
use crate::model::album::{Album, NewAlbumArgs};
use crate::store::MusicStore;

/// Rate given to albums created through a store.
pub const DEFAULT_RATE: i32 = 0;

/// A `MusicStore` holding its albums in memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    albums: RwLock<Vec<Album>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }
}

#[async_trait]
impl MusicStore for MemoryStore {
    /// Highest `rate` first; albums with the same rate keep their insertion order.
    async fn find_popular(&self) -> Vec<Album> {
        let mut albums = self.albums.read().await.clone();
        albums.sort_by(|a, b| b.rate.cmp(&a.rate));
        albums
    }

    async fn find_all(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    async fn find_by_id(&self, id: Uuid) -> Option<Album> {
        self.albums.read().await.iter().find(|album| album.id == id).cloned()
    }

    async fn create(&self, args: NewAlbumArgs) -> Option<Album> {
        let album = Album::from_args(Uuid::new_v4(), args, DEFAULT_RATE);
        debug!("creating album {}", album.id);
        self.albums.write().await.push(album.clone());
        Some(album)
    }

    async fn update(&self, album: Album) -> Option<Album> {
        let mut albums = self.albums.write().await;
        match albums.iter_mut().find(|stored| stored.id == album.id) {
            Some(stored) => {
                debug!("updating album {}", album.id);
                *stored = album.clone();
                Some(album)
            }
            None => {
                debug!("update rejected, unknown album {}", album.id);
                None
            }
        }
    }
}
