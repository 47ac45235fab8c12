use crate::dto::{AlbumDto, ArtistDto, TrackDto, UserDto};

/// What the current user may do with a displayed entity. Pages render
/// edit/delete/create affordances from this instead of comparing id lists
/// inline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Capabilities {
    pub edit: bool,
    pub delete: bool,
    /// Create child content: albums under an artist, tracks under an album.
    pub add_children: bool,
}

impl Capabilities {
    const NONE: Capabilities = Capabilities {
        edit: false,
        delete: false,
        add_children: false,
    };

    const FULL: Capabilities = Capabilities {
        edit: true,
        delete: true,
        add_children: true,
    };
}

pub enum Resource<'a> {
    Artist(&'a ArtistDto),
    Album(&'a AlbumDto),
    Track(&'a TrackDto),
}

/// Single authorization predicate for all views. A user manages an artist
/// when that artist appears in their managed list; albums and tracks are
/// manageable when any credited artist is managed.
pub fn capabilities(user: Option<&UserDto>, resource: Resource<'_>) -> Capabilities {
    let Some(user) = user else {
        return Capabilities::NONE;
    };

    let owned = match resource {
        Resource::Artist(artist) => manages_artist(user, artist.id),
        Resource::Album(album) => album.artists.iter().any(|a| manages_artist(user, a.id)),
        Resource::Track(track) => track.artists.iter().any(|a| manages_artist(user, a.id)),
    };

    if owned {
        Capabilities::FULL
    } else {
        Capabilities::NONE
    }
}

pub fn manages_artist(user: &UserDto, artist_id: i64) -> bool {
    user.managed_artists.iter().any(|a| a.id == artist_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{AlbumRef, ArtistRef};

    fn artist(id: i64) -> ArtistDto {
        ArtistDto {
            id,
            artist_name: format!("artist-{id}"),
            description: String::new(),
            image_url: None,
            subscriber_count: 0,
            albums: Vec::new(),
            tracks: Vec::new(),
        }
    }

    fn user_managing(ids: &[i64]) -> UserDto {
        UserDto {
            id: 1,
            username: "alice".into(),
            email: "a@b.com".into(),
            managed_artists: ids.iter().map(|&id| artist(id)).collect(),
        }
    }

    fn album_by(artist_ids: &[i64]) -> AlbumDto {
        AlbumDto {
            id: 50,
            title: "Neon".into(),
            description: String::new(),
            image_url: None,
            release_date: 0,
            artists: artist_ids
                .iter()
                .map(|&id| ArtistRef {
                    id,
                    artist_name: format!("artist-{id}"),
                    image_url: None,
                })
                .collect(),
            tracks: Vec::new(),
        }
    }

    #[test]
    fn anonymous_user_has_no_capabilities() {
        let a = artist(7);
        assert_eq!(capabilities(None, Resource::Artist(&a)), Capabilities::NONE);
    }

    #[test]
    fn managing_user_gets_full_capabilities_on_their_artist() {
        let user = user_managing(&[7]);
        let a = artist(7);
        let caps = capabilities(Some(&user), Resource::Artist(&a));
        assert!(caps.edit && caps.delete && caps.add_children);
    }

    #[test]
    fn album_is_owned_through_any_credited_artist() {
        let user = user_managing(&[9]);
        let album = album_by(&[3, 9]);
        assert!(capabilities(Some(&user), Resource::Album(&album)).edit);

        let other = album_by(&[3, 4]);
        assert_eq!(
            capabilities(Some(&user), Resource::Album(&other)),
            Capabilities::NONE
        );
    }

    #[test]
    fn track_ownership_follows_credited_artists() {
        let user = user_managing(&[7]);
        let track = TrackDto {
            id: 3,
            title: "Moonlight".into(),
            genre: String::new(),
            duration_seconds: 0,
            audio_url: "m.mp3".into(),
            release_date: 0,
            is_explicit: false,
            like_count: 0,
            album: AlbumRef {
                id: 2,
                title: "Night Sky".into(),
                image_url: None,
                release_date: 0,
            },
            artists: vec![ArtistRef {
                id: 7,
                artist_name: "Nightdrive".into(),
                image_url: None,
            }],
        };
        assert!(capabilities(Some(&user), Resource::Track(&track)).delete);
    }
}
