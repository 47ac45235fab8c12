//! Client-side access layer for the Alkify API: one shared transport with
//! bearer-credential injection, a browser-persisted session, and thin
//! per-resource request wrappers.

pub mod albums;
pub mod artists;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod task;
pub mod tracks;
pub mod users;

pub use client::ApiClient;
pub use config::Config;
pub use error::ApiError;
pub use session::{Session, TokenStore};
pub use task::AbortHandle;
