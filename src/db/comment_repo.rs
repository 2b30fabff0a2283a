use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Database;

use crate::db;
use crate::models::Comment;

/// Insert a new comment verbatim and return its generated identifier.
///
/// No existence check is made on the referenced post.
pub async fn create_comment(
    db: &Database,
    mut comment: Comment,
) -> Result<ObjectId, mongodb::error::Error> {
    let id = comment.id.unwrap_or_else(ObjectId::new);
    comment.id = Some(id);
    db::comments(db).insert_one(&comment).await?;
    Ok(id)
}

/// Sort order for comment listings: comment timestamp descending, with
/// equal timestamps in insertion order (`_id` ascending; ObjectIds are
/// insertion-monotonic).
fn comment_sort() -> Document {
    doc! { "commentedAt": -1, "_id": 1 }
}

/// List comments, newest first.
///
/// `post_id = None` returns every comment across all posts; this "no filter
/// means all" default is the documented contract, not an oversight.
pub async fn list_comments(
    db: &Database,
    post_id: Option<&str>,
) -> Result<Vec<Comment>, mongodb::error::Error> {
    let filter = match post_id {
        Some(id) => doc! { "postId": id },
        None => Document::new(),
    };

    db::comments(db)
        .find(filter)
        .sort(comment_sort())
        .await?
        .try_collect()
        .await
}
