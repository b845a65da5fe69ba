//! HTTP Handlers

mod docs;
mod ping;
mod users;

pub use docs::*;
pub use ping::*;
pub use users::*;
