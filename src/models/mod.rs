/// Data models for blog-service
///
/// This module defines structures for:
/// - Post: Blog posts with a long-form body used for ranking
/// - Comment: Append-only comments keyed by post identifier
/// - WishlistEntry: Per-user saved posts with denormalized summary fields
///
/// Field names serialize as camelCase in both BSON documents and JSON
/// payloads, so the stored shape and the wire shape are the same.
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A blog post.
///
/// Documents created through the four-field upsert path carry only `title`,
/// `shortDescription`, `longDescription`, and `photo`; everything else is
/// optional so those documents still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub short_description: String,
    /// Long-form body. Word count over this field drives ranking; a missing
    /// field counts as zero words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub photo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Creation timestamp, the default sort key for listings. RFC 3339
    /// strings sort lexicographically in timestamp order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A post together with its derived ranking score.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPost {
    #[serde(flatten)]
    pub post: Post,
    pub word_count: usize,
}

/// A comment on a post. Append-only: never mutated or deleted.
///
/// `post_id` is an opaque content identifier; no referential check is made
/// against the posts collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub post_id: String,
    pub author: String,
    pub text: String,
    pub commented_at: DateTime<Utc>,
}

/// A wishlist entry: one user saving one post.
///
/// The post summary fields are copied at insert time and never refreshed;
/// duplicate (userEmail, postId) pairs are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_email: String,
    pub post_id: String,
    pub title: String,
    pub photo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    #[test]
    fn test_upserted_document_with_four_fields_deserializes() {
        // Shape produced by the upsert-on-miss update path.
        let doc = doc! {
            "_id": ObjectId::new(),
            "title": "hello",
            "shortDescription": "short",
            "longDescription": "one two three",
            "photo": "https://example.com/p.png",
        };

        let post: Post = from_document(doc).expect("partial post should deserialize");
        assert_eq!(post.title, "hello");
        assert!(post.category.is_none());
        assert!(post.created_at.is_none());
        assert!(post.author.is_none());
    }

    #[test]
    fn test_post_fields_serialize_camel_case_without_absent_options() {
        let post = Post {
            id: None,
            title: "t".into(),
            short_description: "s".into(),
            long_description: None,
            photo: "p".into(),
            category: Some("tech".into()),
            created_at: None,
            author: None,
        };

        let doc = to_document(&post).expect("post should serialize");
        assert!(doc.contains_key("shortDescription"));
        assert_eq!(doc.get_str("category").unwrap(), "tech");
        assert!(!doc.contains_key("_id"));
        assert!(!doc.contains_key("longDescription"));
        assert!(!doc.contains_key("createdAt"));
    }

    #[test]
    fn test_ranked_post_flattens_post_fields() {
        let post = Post {
            id: None,
            title: "t".into(),
            short_description: "s".into(),
            long_description: Some("a b".into()),
            photo: "p".into(),
            category: None,
            created_at: None,
            author: None,
        };
        let ranked = RankedPost {
            post,
            word_count: 2,
        };

        let value = serde_json::to_value(&ranked).expect("ranked post should serialize");
        assert_eq!(value["title"], "t");
        assert_eq!(value["wordCount"], 2);
    }
}
