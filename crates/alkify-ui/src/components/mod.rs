pub mod media;
pub mod nav;
pub mod toast;
