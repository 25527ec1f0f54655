pub mod albums;

use crate::client::AlbumClient;
use crate::endpoints::albums::*;

// Endpoint function namespaces

impl AlbumClient {
    pub const fn albums(&self) -> Albums<'_> {
        Albums(self)
    }
}
