#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod format;
pub mod pages;

pub use app::{App, CurrentUser};
