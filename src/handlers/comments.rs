/// Comment handlers - HTTP endpoints for comment operations
use actix_web::{web, HttpResponse};
use mongodb::Database;
use serde::Deserialize;

use crate::db::comment_repo;
use crate::error::Result;
use crate::models::Comment;

/// Query parameters for the comment listing.
#[derive(Debug, Deserialize)]
pub struct ListCommentsQuery {
    /// Content identifier; absent means every comment across all posts.
    #[serde(rename = "blogId")]
    pub blog_id: Option<String>,
}

/// GET /all-comments/blogId?blogId
pub async fn list_comments(
    db: web::Data<Database>,
    query: web::Query<ListCommentsQuery>,
) -> Result<HttpResponse> {
    let comments = comment_repo::list_comments(&db, query.blog_id.as_deref()).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// POST /all-comments
pub async fn create_comment(
    db: web::Data<Database>,
    req: web::Json<Comment>,
) -> Result<HttpResponse> {
    let id = comment_repo::create_comment(&db, req.into_inner()).await?;

    Ok(HttpResponse::Created().json(super::CreatedResponse::new(id)))
}
