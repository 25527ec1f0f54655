//! Endpoint functions relating to albums

use uuid::Uuid;

use crate::client::{AlbumClient, ClientResult};
use crate::codec;
use crate::model::album::{Album, NewAlbumArgs};

pub struct Albums<'a>(pub &'a AlbumClient);

impl Albums<'_> {
    pub async fn popular(&self) -> ClientResult<Vec<Album>> {
        let result = self.0.get("/albums/popular").await?;
        AlbumClient::convert_result(&result, codec::decode_albums)
    }

    pub async fn all(&self) -> ClientResult<Vec<Album>> {
        let result = self.0.get("/albums").await?;
        AlbumClient::convert_result(&result, codec::decode_albums)
    }

    /// `Ok(None)` when the api answers 404 or `null`.
    pub async fn get(&self, id: Uuid) -> ClientResult<Option<Album>> {
        let url = format!("/albums/{}", id);
        match self.0.get(&url).await {
            Ok(result) => AlbumClient::convert_result(&result, codec::decode_album_option),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn create(&self, args: &NewAlbumArgs) -> ClientResult<Option<Album>> {
        let payload = codec::encode_album_args(args);
        let result = self.0.post("/albums", &payload).await?;
        AlbumClient::convert_result(&result, codec::decode_album_option)
    }

    pub async fn update(&self, album: &Album) -> ClientResult<Option<Album>> {
        let url = format!("/albums/{}", album.id);
        let payload = codec::encode_album(album);
        match self.0.put(&url, &payload).await {
            Ok(result) => AlbumClient::convert_result(&result, codec::decode_album_option),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{client, mock_request_success, mock_request_success_from_file};
    use crate::client::ClientError;
    use crate::store::MusicStore;
    use chrono::{TimeZone, Utc};
    use mockito::{mock, Matcher};

    fn rumours() -> Album {
        Album {
            id: Uuid::parse_str("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap(),
            title: "Rumours".to_owned(),
            artist: "Fleetwood Mac".to_owned(),
            rate: 5,
            release_date: Utc.with_ymd_and_hms(1977, 2, 4, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn popular() {
        let _mock = mock_request_success_from_file("GET", "/albums/popular", "tests/files/popular.json");

        let result: Vec<Album> = client().albums().popular().await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], rumours());
    }

    #[tokio::test]
    async fn all() {
        let _mock = mock_request_success_from_file("GET", "/albums", "tests/files/albums.json");

        let result: Vec<Album> = client().albums().all().await.unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0], rumours());
        assert_eq!(result[1].title, "Tusk");
        assert_eq!(result[2].title, "Kind of Blue");
    }

    #[tokio::test]
    async fn all_empty() {
        let _mock = mock_request_success("GET", "/albums", "[]");

        let result: Vec<Album> = client().albums().all().await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn all_reports_decode_path() {
        let _mock = mock_request_success(
            "GET",
            "/albums",
            r#"[{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","title":"Rumours","artist":"Fleetwood Mac","rate":"five","releaseDate":"1977-02-04T00:00:00Z"}]"#,
        );

        match client().albums().all().await {
            Err(ClientError::Decode(err)) => assert_eq!(err.path, "$[0].rate"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn get() {
        let _mock = mock_request_success_from_file(
            "GET",
            "/albums/3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "tests/files/album.json",
        );

        let result = client().albums().get(rumours().id).await.unwrap();
        assert_eq!(result, Some(rumours()));
    }

    #[tokio::test]
    async fn get_null() {
        let _mock = mock_request_success("GET", "/albums/5c1d2e3f-4a5b-4c6d-8e7f-9a0b1c2d3e4f", "null");

        let id = Uuid::parse_str("5c1d2e3f-4a5b-4c6d-8e7f-9a0b1c2d3e4f").unwrap();
        assert_eq!(client().albums().get(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn get_not_found() {
        let _mock = mock("GET", "/albums/7d8e9f0a-1b2c-4d3e-8f4a-5b6c7d8e9f0a")
            .with_status(404)
            .with_body(r#"{"status": 404, "message": "album not found"}"#)
            .create();

        let id = Uuid::parse_str("7d8e9f0a-1b2c-4d3e-8f4a-5b6c7d8e9f0a").unwrap();
        assert_eq!(client().albums().get(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn create() {
        let mock_create = mock("POST", "/albums")
            .match_body(Matcher::Json(serde_json::json!({
                "title": "Rumours",
                "artist": "Fleetwood Mac",
                "releaseDate": "1977-02-04T00:00:00Z"
            })))
            .with_status(201)
            .with_body_from_file("tests/files/album.json")
            .create();

        let args = NewAlbumArgs::new("Rumours", "Fleetwood Mac", Utc.with_ymd_and_hms(1977, 2, 4, 0, 0, 0).unwrap());
        let result = client().albums().create(&args).await.unwrap();

        mock_create.assert();
        assert_eq!(result, Some(rumours()));
    }

    #[tokio::test]
    async fn update() {
        let rerated = Album { rate: 4, ..rumours() };
        let mock_update = mock("PUT", "/albums/3fa85f64-5717-4562-b3fc-2c963f66afa6")
            .match_body(Matcher::Json(codec::encode_album(&rerated)))
            .with_status(200)
            .with_body(serde_json::to_string(&codec::encode_album(&rerated)).unwrap())
            .create();

        let result = client().albums().update(&rerated).await.unwrap();

        mock_update.assert();
        assert_eq!(result, Some(rerated));
    }

    #[tokio::test]
    async fn update_unknown_album() {
        let stranger = Album {
            id: Uuid::parse_str("e1f2a3b4-c5d6-4e7f-8a9b-0c1d2e3f4a5b").unwrap(),
            ..rumours()
        };
        let _mock = mock("PUT", "/albums/e1f2a3b4-c5d6-4e7f-8a9b-0c1d2e3f4a5b").with_status(404).create();

        assert_eq!(client().albums().update(&stranger).await.unwrap(), None);
        assert_eq!(client().update(stranger).await, None);
    }

    #[tokio::test]
    async fn store_round_trip() {
        let _mock_get = mock_request_success_from_file(
            "GET",
            "/albums/3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "tests/files/album.json",
        );
        let _mock_popular = mock_request_success_from_file("GET", "/albums/popular", "tests/files/popular.json");

        let store: Box<dyn MusicStore> = Box::new(client());
        assert_eq!(store.find_by_id(rumours().id).await, Some(rumours()));
        assert_eq!(store.find_popular().await.len(), 2);
    }
}
