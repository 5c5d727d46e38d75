//! BSON shapes of the `post` collection.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use postboard_core::domain::{NewPost, Post, PostId};

/// A stored post document. Fields beyond these four are ignored on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub content: String,
    pub created: bson::DateTime,
}

/// A post document before insertion; the store fills in `_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPostDocument {
    pub title: String,
    pub content: String,
    pub created: bson::DateTime,
}

impl From<PostDocument> for Post {
    fn from(doc: PostDocument) -> Self {
        Self {
            id: PostId::from_bytes(doc.id.bytes()),
            title: doc.title,
            content: doc.content,
            created: doc.created.to_chrono(),
        }
    }
}

impl From<NewPost> for NewPostDocument {
    fn from(post: NewPost) -> Self {
        Self {
            title: post.title,
            content: post.content,
            created: bson::DateTime::from_chrono(post.created),
        }
    }
}

pub(crate) fn object_id(id: PostId) -> ObjectId {
    ObjectId::from_bytes(id.bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_document_maps_to_post() {
        let oid = ObjectId::parse_str("60d5ec49f13e5a5a9c0f9a2c").unwrap();
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();

        let doc = doc! {
            "_id": oid,
            "title": "Mi Primer Post",
            "content": "Este es el contenido de mi post.",
            "created": bson::DateTime::from_chrono(created),
        };

        let post: Post = bson::from_document::<PostDocument>(doc).unwrap().into();
        assert_eq!(post.id.to_hex(), "60d5ec49f13e5a5a9c0f9a2c");
        assert_eq!(post.title, "Mi Primer Post");
        assert_eq!(post.created, created);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "title": "t",
            "content": "c",
            "created": bson::DateTime::now(),
            "author": "someone",
        };
        assert!(bson::from_document::<PostDocument>(doc).is_ok());
    }

    #[test]
    fn test_missing_created_is_rejected() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "title": "t",
            "content": "c",
        };
        assert!(bson::from_document::<PostDocument>(doc).is_err());
    }

    #[test]
    fn test_new_post_document_has_no_id() {
        let post = NewPost {
            title: "t".into(),
            content: "c".into(),
            created: Utc::now(),
        };
        let doc = bson::to_document(&NewPostDocument::from(post)).unwrap();
        assert!(!doc.contains_key("_id"));
        assert!(doc.get_datetime("created").is_ok());
    }
}
