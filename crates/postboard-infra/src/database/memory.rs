//! In-memory post repository - used when no document store is configured.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use regex::RegexBuilder;
use tokio::sync::RwLock;

use postboard_core::domain::{NewPost, Post, PostId, PostInput};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostRepository};

/// Post repository holding everything in a vector behind an async RwLock.
///
/// Ids mimic ObjectIds: a big-endian seconds timestamp followed by a
/// per-process counter. Note: data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
    counter: AtomicU64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
            counter: AtomicU64::new(0),
        }
    }

    fn next_id(&self) -> PostId {
        // Saturates past 2106 (and before 1970) instead of wrapping.
        let seconds = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
        let sequence = self.counter.fetch_add(1, Ordering::Relaxed);

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..].copy_from_slice(&sequence.to_be_bytes());
        PostId::from_bytes(bytes)
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;
        match posts.iter().position(|p| p.id == id) {
            Some(index) => {
                posts.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let post = post.into_post(self.next_id());
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn update_content(
        &self,
        id: PostId,
        input: PostInput,
    ) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        post.title = input.title().to_string();
        post.content = input.content().to_string();
        Ok(Some(post.clone()))
    }

    async fn search_by_title(&self, query: &str) -> Result<Vec<Post>, RepoError> {
        let matcher = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|p| matcher.is_match(&p.title))
            .cloned()
            .collect())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn insert(repo: &InMemoryPostRepository, title: &str) -> Post {
        let input = PostInput::new(title, "content").unwrap();
        repo.insert(NewPost::new(input, Utc::now())).await.unwrap()
    }

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_hex() {
        let repo = InMemoryPostRepository::new();
        let a = insert(&repo, "a").await;
        let b = insert(&repo, "b").await;

        assert_ne!(a.id, b.id);
        assert_eq!(a.id.to_hex().len(), PostId::HEX_LEN);
    }

    #[tokio::test]
    async fn test_id_leads_with_creation_seconds() {
        let repo = InMemoryPostRepository::new();
        let before = Utc::now().timestamp();
        let post = insert(&repo, "a").await;
        let after = Utc::now().timestamp();

        let [a, b, c, d, ..] = post.id.bytes();
        let seconds = i64::from(u32::from_be_bytes([a, b, c, d]));
        assert!(seconds >= before && seconds <= after);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryPostRepository::new();
        for title in ["one", "two", "three"] {
            insert(&repo, title).await;
        }

        let all = repo.find_all().await.unwrap();
        assert_eq!(titles(&all), vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let repo = InMemoryPostRepository::new();
        insert(&repo, "Hello World").await;
        insert(&repo, "goodbye").await;

        let hello = repo.search_by_title("hello").await.unwrap();
        assert_eq!(titles(&hello), vec!["Hello World"]);

        let world = repo.search_by_title("WORLD").await.unwrap();
        assert_eq!(titles(&world), vec!["Hello World"]);

        let bye = repo.search_by_title("bye").await.unwrap();
        assert_eq!(titles(&bye), vec!["goodbye"]);

        assert!(repo.search_by_title("xyz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_query_literally() {
        let repo = InMemoryPostRepository::new();
        insert(&repo, "Price (USD)").await;
        insert(&repo, "anything").await;

        let found = repo.search_by_title("(usd)").await.unwrap();
        assert_eq!(titles(&found), vec!["Price (USD)"]);

        assert!(repo.search_by_title(".*").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_only_touches_title_and_content() {
        let repo = InMemoryPostRepository::new();
        let original = insert(&repo, "before").await;

        let input = PostInput::new("after", "new content").unwrap();
        let updated = repo
            .update_content(original.id, input)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created, original.created);
        assert_eq!(updated.title, "after");
        assert_eq!(updated.content, "new content");
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let repo = InMemoryPostRepository::new();
        let keep = insert(&repo, "keep").await;
        let gone = insert(&repo, "gone").await;

        assert!(repo.delete(gone.id).await.unwrap());
        assert!(!repo.delete(gone.id).await.unwrap());

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![keep]);
    }
}
