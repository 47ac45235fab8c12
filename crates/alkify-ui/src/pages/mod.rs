pub mod album;
pub mod album_form;
pub mod artist;
pub mod artist_form;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod search;
pub mod track;
pub mod track_form;
