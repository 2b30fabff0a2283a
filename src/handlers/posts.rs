/// Post handlers - HTTP endpoints for post operations
use actix_web::{web, HttpResponse};
use mongodb::Database;
use serde::{Deserialize, Serialize};

use crate::db::post_repo;
use crate::error::{AppError, Result};
use crate::models::Post;
use crate::services::ranking::{RankingService, DEFAULT_TOP_POSTS};

/// Query parameters for the paginated post listing.
///
/// `page` and `limit` are typed at the boundary; non-numeric values are
/// rejected during extraction, missing, negative, and zero values below,
/// so every rejection carries the service's JSON error body.
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// Title substring criterion, matched case-insensitively.
    pub name: Option<String>,
    /// Exact category criterion.
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPostsResponse {
    pub total_blogs: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostResponse {
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

/// Request body for the four-field post update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: String,
    pub long_description: String,
    pub short_description: String,
    pub photo: String,
}

/// Reject absent or out-of-range pagination and compute the skip offset.
fn validate_pagination(page: Option<i64>, limit: Option<i64>) -> Result<(u64, i64)> {
    let page = page.ok_or_else(|| AppError::ValidationError("page is required".to_string()))?;
    let limit = limit.ok_or_else(|| AppError::ValidationError("limit is required".to_string()))?;

    if page < 0 {
        return Err(AppError::ValidationError(format!(
            "page must be >= 0, got {page}"
        )));
    }
    if limit <= 0 {
        return Err(AppError::ValidationError(format!(
            "limit must be > 0, got {limit}"
        )));
    }

    let skip = (page as u64)
        .checked_mul(limit as u64)
        .ok_or_else(|| AppError::ValidationError("page * limit out of range".to_string()))?;

    Ok((skip, limit))
}

/// GET /totalBlogs
pub async fn total_posts(db: web::Data<Database>) -> Result<HttpResponse> {
    let count = post_repo::count_posts(&db).await?;
    Ok(HttpResponse::Ok().json(TotalPostsResponse { total_blogs: count }))
}

/// GET /all-blogs?page&limit&name&category
pub async fn list_posts(
    db: web::Data<Database>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse> {
    let (skip, limit) = validate_pagination(query.page, query.limit)?;
    let filter = post_repo::build_post_filter(query.name.as_deref(), query.category.as_deref());
    let posts = post_repo::list_posts(&db, filter, skip, limit).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /blog-details/{id}
pub async fn get_post(db: web::Data<Database>, post_id: web::Path<String>) -> Result<HttpResponse> {
    let id = super::parse_object_id(&post_id)?;

    match post_repo::find_post_by_id(&db, id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound(format!("post {post_id} does not exist"))),
    }
}

/// GET /top-blogs
pub async fn top_posts(ranking: web::Data<RankingService>) -> Result<HttpResponse> {
    let ranked = ranking.top_posts(DEFAULT_TOP_POSTS).await?;

    Ok(HttpResponse::Ok().json(ranked))
}

/// POST /add-blog
pub async fn create_post(db: web::Data<Database>, req: web::Json<Post>) -> Result<HttpResponse> {
    let id = post_repo::create_post(&db, req.into_inner()).await?;

    Ok(HttpResponse::Created().json(super::CreatedResponse::new(id)))
}

/// PUT /update-blog/{id}
pub async fn update_post(
    db: web::Data<Database>,
    post_id: web::Path<String>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let id = super::parse_object_id(&post_id)?;

    let result = post_repo::update_post_fields(
        &db,
        id,
        &req.title,
        &req.long_description,
        &req.short_description,
        &req.photo,
    )
    .await?;

    Ok(HttpResponse::Ok().json(UpdatePostResponse {
        matched_count: result.matched_count,
        modified_count: result.modified_count,
        upserted_id: result
            .upserted_id
            .as_ref()
            .and_then(|id| id.as_object_id())
            .map(|id| id.to_hex()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_computes_skip_from_page_and_limit() {
        assert_eq!(validate_pagination(Some(0), Some(10)).unwrap(), (0, 10));
        assert_eq!(validate_pagination(Some(3), Some(25)).unwrap(), (75, 25));
    }

    #[test]
    fn test_pagination_rejects_missing_parameters() {
        assert!(matches!(
            validate_pagination(None, Some(10)),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            validate_pagination(Some(0), None),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_pagination_rejects_negative_page() {
        assert!(matches!(
            validate_pagination(Some(-1), Some(10)),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_pagination_rejects_non_positive_limit() {
        assert!(matches!(
            validate_pagination(Some(0), Some(0)),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            validate_pagination(Some(0), Some(-5)),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_pagination_rejects_overflowing_skip() {
        assert!(matches!(
            validate_pagination(Some(i64::MAX), Some(i64::MAX)),
            Err(AppError::ValidationError(_))
        ));
    }
}
