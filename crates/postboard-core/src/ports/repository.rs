use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId, PostInput};
use crate::error::RepoError;

/// Generic repository trait defining the id-keyed operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Every stored entity, in insertion order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Returns `true` iff exactly one was removed.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Insert a new post and return it as re-read from the store.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite title and content of an existing post, leaving `created` alone.
    /// Returns `None` when no post matches.
    async fn update_content(&self, id: PostId, input: PostInput)
    -> Result<Option<Post>, RepoError>;

    /// Posts whose title contains `query`, ignoring case, in insertion order.
    async fn search_by_title(&self, query: &str) -> Result<Vec<Post>, RepoError>;

    /// Short name of the backing store, for diagnostics.
    fn backend(&self) -> &'static str;
}
