pub mod dto;
pub mod ownership;
pub mod requests;

pub use dto::*;
pub use ownership::{capabilities, Capabilities, Resource};
pub use requests::*;
