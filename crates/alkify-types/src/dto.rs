use serde::{Deserialize, Serialize};

/// Successful login/register response. The token is an opaque bearer
/// credential; the client never inspects it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct JwtAuthentication {
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub managed_artists: Vec<ArtistDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDto {
    pub id: i64,
    pub artist_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub subscriber_count: u64,
    #[serde(default)]
    pub albums: Vec<AlbumRef>,
    #[serde(default)]
    pub tracks: Vec<TrackRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub release_date: i64,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub tracks: Vec<TrackRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub duration_seconds: u32,
    pub audio_url: String,
    #[serde(default)]
    pub release_date: i64,
    #[serde(default)]
    pub is_explicit: bool,
    #[serde(default)]
    pub like_count: u64,
    pub album: AlbumRef,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

/// Minimal artist shape embedded in album and track reads.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRef {
    pub id: i64,
    pub artist_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Minimal album shape embedded in artist and track reads.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRef {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub release_date: i64,
}

/// Minimal track shape embedded in artist and album reads.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackRef {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub duration_seconds: u32,
    #[serde(default)]
    pub audio_url: String,
    #[serde(default)]
    pub is_explicit: bool,
}

impl AlbumDto {
    /// Drops one track from the locally held list. Used for optimistic
    /// updates after a delete, so the page does not reload the album.
    pub fn remove_track(&mut self, track_id: i64) {
        self.tracks.retain(|t| t.id != track_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_decodes_camel_case_wire_format() {
        let json = r#"{
            "id": 7,
            "artistName": "Nightdrive",
            "description": "synthwave",
            "imageUrl": "nightdrive.jpg",
            "subscriberCount": 120,
            "albums": [{"id": 1, "title": "Neon", "imageUrl": null, "releaseDate": 1700000000}],
            "tracks": []
        }"#;
        let artist: ArtistDto = serde_json::from_str(json).unwrap();
        assert_eq!(artist.artist_name, "Nightdrive");
        assert_eq!(artist.image_url.as_deref(), Some("nightdrive.jpg"));
        assert_eq!(artist.albums[0].title, "Neon");
        assert!(artist.albums[0].image_url.is_none());
    }

    #[test]
    fn track_decodes_with_album_reference() {
        let json = r#"{
            "id": 3,
            "title": "Moonlight",
            "genre": "ambient",
            "durationSeconds": 215,
            "audioUrl": "moonlight.mp3",
            "releaseDate": 1690000000,
            "isExplicit": true,
            "likeCount": 9,
            "album": {"id": 2, "title": "Night Sky"},
            "artists": [{"id": 7, "artistName": "Nightdrive"}]
        }"#;
        let track: TrackDto = serde_json::from_str(json).unwrap();
        assert!(track.is_explicit);
        assert_eq!(track.duration_seconds, 215);
        assert_eq!(track.album.title, "Night Sky");
    }

    #[test]
    fn remove_track_drops_exactly_one_entry() {
        let mut album = AlbumDto {
            id: 1,
            title: "Neon".into(),
            description: String::new(),
            image_url: None,
            release_date: 0,
            artists: Vec::new(),
            tracks: vec![
                TrackRef {
                    id: 10,
                    title: "A".into(),
                    duration_seconds: 100,
                    audio_url: "a.mp3".into(),
                    is_explicit: false,
                },
                TrackRef {
                    id: 11,
                    title: "B".into(),
                    duration_seconds: 120,
                    audio_url: "b.mp3".into(),
                    is_explicit: false,
                },
            ],
        };
        album.remove_track(10);
        assert_eq!(album.tracks.len(), 1);
        assert_eq!(album.tracks[0].id, 11);

        // Removing an id that is not present leaves the list untouched.
        album.remove_track(10);
        assert_eq!(album.tracks.len(), 1);
    }
}
