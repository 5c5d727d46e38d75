//! MongoDB post repository.

use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use postboard_core::domain::{NewPost, Post, PostId, PostInput};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostRepository};

use super::POST_COLLECTION;
use super::connections::{MongoConnector, map_mongo_error};
use super::document::{NewPostDocument, PostDocument, object_id};

/// Post repository backed by a MongoDB collection.
///
/// Every operation runs inside [`MongoConnector::scoped`]. Listings are
/// sorted by `_id`, which follows insertion order.
pub struct MongoPostRepository {
    connector: MongoConnector,
}

impl MongoPostRepository {
    pub fn new(connector: MongoConnector) -> Self {
        Self { connector }
    }
}

fn posts(db: &Database) -> Collection<PostDocument> {
    db.collection(POST_COLLECTION)
}

async fn find_one(db: &Database, id: PostId) -> Result<Option<Post>, RepoError> {
    let found = posts(db)
        .find_one(doc! { "_id": object_id(id) })
        .await
        .map_err(map_mongo_error)?;
    Ok(found.map(Into::into))
}

async fn find_many(db: &Database, filter: bson::Document) -> Result<Vec<Post>, RepoError> {
    let cursor = posts(db)
        .find(filter)
        .sort(doc! { "_id": 1 })
        .await
        .map_err(map_mongo_error)?;
    let docs: Vec<PostDocument> = cursor.try_collect().await.map_err(map_mongo_error)?;
    Ok(docs.into_iter().map(Into::into).collect())
}

#[async_trait]
impl BaseRepository<Post, PostId> for MongoPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        tracing::debug!("Listing posts");
        self.connector
            .scoped(|db| async move { find_many(&db, doc! {}).await })
            .await
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post by id");
        self.connector
            .scoped(|db| async move { find_one(&db, id).await })
            .await
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        tracing::debug!(post_id = %id, "Deleting post");
        self.connector
            .scoped(|db| async move {
                let result = posts(&db)
                    .delete_one(doc! { "_id": object_id(id) })
                    .await
                    .map_err(map_mongo_error)?;
                Ok(result.deleted_count == 1)
            })
            .await
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let document = NewPostDocument::from(post);
        self.connector
            .scoped(|db| async move {
                let result = db
                    .collection::<NewPostDocument>(POST_COLLECTION)
                    .insert_one(document)
                    .await
                    .map_err(map_mongo_error)?;

                let oid = result.inserted_id.as_object_id().ok_or_else(|| {
                    RepoError::Mapping(format!(
                        "inserted _id is not an ObjectId: {}",
                        result.inserted_id
                    ))
                })?;
                let id = PostId::from_bytes(oid.bytes());
                tracing::debug!(post_id = %id, "Inserted post");

                find_one(&db, id).await?.ok_or_else(|| {
                    RepoError::Query(format!("inserted post {id} could not be read back"))
                })
            })
            .await
    }

    async fn update_content(
        &self,
        id: PostId,
        input: PostInput,
    ) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Updating post");
        self.connector
            .scoped(|db| async move {
                let result = posts(&db)
                    .update_one(
                        doc! { "_id": object_id(id) },
                        doc! { "$set": { "title": input.title(), "content": input.content() } },
                    )
                    .await
                    .map_err(map_mongo_error)?;

                if result.matched_count == 0 {
                    return Ok(None);
                }
                find_one(&db, id).await
            })
            .await
    }

    async fn search_by_title(&self, query: &str) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(query = %query, "Searching posts by title");
        let filter = doc! {
            "title": { "$regex": regex::escape(query), "$options": "i" }
        };
        self.connector
            .scoped(|db| async move { find_many(&db, filter).await })
            .await
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}
