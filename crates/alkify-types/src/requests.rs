use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 8;

/// Client-side form validation failures, caught before any request is sent.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("username must be at least {MIN_USERNAME_LEN} characters")]
    UsernameTooShort,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
    #[error("a valid email address is required")]
    InvalidEmail,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

impl AuthRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_artists: Option<Vec<ArtistRequest>>,
}

impl UserRequest {
    /// Registration rules: short usernames and passwords are rejected
    /// before the request leaves the browser.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.chars().count() < MIN_USERNAME_LEN {
            return Err(ValidationError::UsernameTooShort);
        }
        validate_email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRequest {
    pub artist_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<AlbumRequest>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<TrackRequest>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub is_explicit: bool,
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(username: &str, email: &str, password: &str) -> UserRequest {
        UserRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            managed_artists: None,
        }
    }

    #[test]
    fn registration_rejects_short_username() {
        let req = registration("ab", "a@b.com", "password1");
        assert_eq!(req.validate(), Err(ValidationError::UsernameTooShort));
    }

    #[test]
    fn registration_rejects_short_password() {
        let req = registration("alice", "a@b.com", "pass");
        assert_eq!(req.validate(), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn registration_rejects_bad_email() {
        let req = registration("alice", "not-an-email", "password1");
        assert_eq!(req.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn registration_accepts_valid_input() {
        assert!(registration("alice", "a@b.com", "password1")
            .validate()
            .is_ok());
    }

    #[test]
    fn track_request_serializes_camel_case() {
        let req = TrackRequest {
            title: "Moonlight".into(),
            genre: Some("ambient".into()),
            is_explicit: true,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"isExplicit\":true"));
        assert!(json.contains("\"genre\":\"ambient\""));
    }

    #[test]
    fn empty_collections_are_omitted_from_requests() {
        let req = ArtistRequest {
            artist_name: "Nightdrive".into(),
            description: None,
            albums: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, "{\"artistName\":\"Nightdrive\"}");
    }
}
