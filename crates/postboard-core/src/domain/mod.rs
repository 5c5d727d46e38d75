//! Domain entities - the core business objects.

mod post;

pub use post::{CONTENT_MAX_CHARS, NewPost, Post, PostId, PostInput, TITLE_MAX_CHARS};
