use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::results::UpdateResult;
use mongodb::Database;

use crate::db;
use crate::models::Post;

/// Approximate total number of posts.
///
/// Uses the collection's metadata count, which is eventually consistent with
/// writes still in flight.
pub async fn count_posts(db: &Database) -> Result<u64, mongodb::error::Error> {
    db::posts(db).estimated_document_count().await
}

/// Build the filter conjunction for a post listing.
///
/// - `title`: case-insensitive unanchored substring match. The input is
///   escaped before it becomes a store-side regex, so metacharacters match
///   literally.
/// - `category`: exact equality.
///
/// Absent or empty criteria impose no constraint; with none given the filter
/// is empty and matches every document.
pub fn build_post_filter(title: Option<&str>, category: Option<&str>) -> Document {
    let mut filter = Document::new();

    if let Some(title) = title.filter(|t| !t.is_empty()) {
        filter.insert(
            "title",
            doc! { "$regex": regex::escape(title), "$options": "i" },
        );
    }

    if let Some(category) = category.filter(|c| !c.is_empty()) {
        filter.insert("category", category);
    }

    filter
}

/// List posts matching `filter`, newest first.
///
/// Sorted by creation timestamp descending with `_id` descending as the
/// tiebreak, so pages partition the result set deterministically.
pub async fn list_posts(
    db: &Database,
    filter: Document,
    skip: u64,
    limit: i64,
) -> Result<Vec<Post>, mongodb::error::Error> {
    db::posts(db)
        .find(filter)
        .sort(doc! { "createdAt": -1, "_id": -1 })
        .skip(skip)
        .limit(limit)
        .await?
        .try_collect()
        .await
}

/// Find a post by ID.
pub async fn find_post_by_id(
    db: &Database,
    post_id: ObjectId,
) -> Result<Option<Post>, mongodb::error::Error> {
    db::posts(db).find_one(doc! { "_id": post_id }).await
}

/// Insert a new post and return its generated identifier.
///
/// All provided fields are persisted verbatim; no server-side validation.
pub async fn create_post(db: &Database, mut post: Post) -> Result<ObjectId, mongodb::error::Error> {
    let id = post.id.unwrap_or_else(ObjectId::new);
    post.id = Some(id);
    db::posts(db).insert_one(&post).await?;
    Ok(id)
}

/// Replace exactly the four updatable fields on the post matching `post_id`.
///
/// With `upsert: true`, a miss inserts a new document carrying only those
/// four fields. This upsert-on-miss behavior is a deliberate contract; the
/// returned `UpdateResult` tells the caller whether the operation matched an
/// existing document or inserted a new one.
pub async fn update_post_fields(
    db: &Database,
    post_id: ObjectId,
    title: &str,
    long_description: &str,
    short_description: &str,
    photo: &str,
) -> Result<UpdateResult, mongodb::error::Error> {
    db::posts(db)
        .update_one(
            doc! { "_id": post_id },
            doc! { "$set": {
                "title": title,
                "longDescription": long_description,
                "shortDescription": short_description,
                "photo": photo,
            }},
        )
        .upsert(true)
        .await
}

/// Fetch every post, in the store's natural retrieval order.
///
/// Feeds the ranking engine's full-collection scan.
pub async fn find_all_posts(db: &Database) -> Result<Vec<Post>, mongodb::error::Error> {
    db::posts(db).find(doc! {}).await?.try_collect().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_criteria_build_empty_filter() {
        assert!(build_post_filter(None, None).is_empty());
        assert!(build_post_filter(Some(""), Some("")).is_empty());
    }

    #[test]
    fn test_title_filter_is_case_insensitive_regex() {
        let filter = build_post_filter(Some("rust"), None);
        let title = filter.get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), "rust");
        assert_eq!(title.get_str("$options").unwrap(), "i");
        assert!(!filter.contains_key("category"));
    }

    #[test]
    fn test_title_metacharacters_are_escaped() {
        let filter = build_post_filter(Some("c++ (intro)?"), None);
        let pattern = filter
            .get_document("title")
            .unwrap()
            .get_str("$regex")
            .unwrap();
        assert_eq!(pattern, regex::escape("c++ (intro)?"));
        assert!(pattern.contains(r"\+\+"));
    }

    #[test]
    fn test_category_filter_is_exact_match() {
        let filter = build_post_filter(None, Some("tech"));
        assert_eq!(filter.get_str("category").unwrap(), "tech");
    }

    #[test]
    fn test_conjunction_of_both_predicates() {
        let filter = build_post_filter(Some("rust"), Some("tech"));
        assert!(filter.contains_key("title"));
        assert_eq!(filter.get_str("category").unwrap(), "tech");
        assert_eq!(filter.len(), 2);
    }
}
