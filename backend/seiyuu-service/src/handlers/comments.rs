/// Comment handlers
use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::{Comment, PostId};
use crate::views::post_detail;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    #[validate(length(max = 2000, message = "Comment is too long"))]
    pub content: String,
}

/// Comments of a post, oldest first
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}/comments",
    tag = "comments",
    params(("id" = i64, Path, description = "Post id")),
    responses((status = 200, description = "Comments", body = [Comment]))
)]
pub async fn list_comments(
    gateway: web::Data<Gateway>,
    post_id: web::Path<PostId>,
) -> Result<HttpResponse> {
    let comments = gateway
        .list_comments(*post_id)
        .await
        .map_err(|e| e.reported("Failed to load post"))?;
    Ok(HttpResponse::Ok().json(comments))
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/comments",
    tag = "comments",
    params(("id" = i64, Path, description = "Post id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Created", body = Comment),
        (status = 404, description = "Post not found")
    )
)]
pub async fn create_comment(
    gateway: web::Data<Gateway>,
    post_id: web::Path<PostId>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;
    let comment = post_detail::add_comment(&gateway, *post_id, &req.content).await?;
    Ok(HttpResponse::Created().json(comment))
}
