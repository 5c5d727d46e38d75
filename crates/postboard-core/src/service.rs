//! Post CRUD service - the layer handlers talk to.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{NewPost, Post, PostId, PostInput};
use crate::error::RepoError;
use crate::ports::PostRepository;

/// CRUD and search operations over posts.
///
/// Identifiers arrive as raw strings. A malformed identifier is reported
/// exactly like an absent one (`None` / `false`) and never reaches the store.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Name of the store behind this service.
    pub fn backend(&self) -> &'static str {
        self.repo.backend()
    }

    /// Insert a post stamped with the current time and return the stored copy.
    pub async fn create(&self, input: PostInput) -> Result<Post, RepoError> {
        let post = self.repo.insert(NewPost::new(input, Utc::now())).await?;
        tracing::debug!(post_id = %post.id, "Post created");
        Ok(post)
    }

    pub async fn list(&self) -> Result<Vec<Post>, RepoError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        match Self::parse_id(id) {
            Some(id) => self.repo.find_by_id(id).await,
            None => Ok(None),
        }
    }

    pub async fn update(&self, id: &str, input: PostInput) -> Result<Option<Post>, RepoError> {
        match Self::parse_id(id) {
            Some(id) => self.repo.update_content(id, input).await,
            None => Ok(None),
        }
    }

    /// Returns `true` iff exactly one post was removed.
    pub async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        match Self::parse_id(id) {
            Some(id) => self.repo.delete(id).await,
            None => Ok(false),
        }
    }

    /// Case-insensitive substring match on the title. `query` is literal text.
    pub async fn search_by_title(&self, query: &str) -> Result<Vec<Post>, RepoError> {
        self.repo.search_by_title(query).await
    }

    fn parse_id(raw: &str) -> Option<PostId> {
        let id = PostId::parse(raw);
        if id.is_none() {
            tracing::debug!(raw_id = %raw, "Rejected malformed post id");
        }
        id
    }
}
