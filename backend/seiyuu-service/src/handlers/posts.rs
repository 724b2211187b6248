/// Post handlers - HTTP endpoints for post operations
use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::{Post, PostId, PostPatch, SortOrder};
use crate::views::{post_detail, CreateFlow, CreatePostForm};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub sort: Option<String>,
    pub seiyuu: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DeletePostQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// List posts, optionally for one voice actor
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    tag = "posts",
    params(
        ("sort" = Option<String>, Query, description = "newest (default), oldest or upvotes"),
        ("seiyuu" = Option<i64>, Query, description = "AniList staff id")
    ),
    responses((status = 200, description = "Posts", body = [Post]))
)]
pub async fn list_posts(
    gateway: web::Data<Gateway>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse> {
    let posts = match query.seiyuu {
        Some(seiyuu) => gateway.list_posts_for_seiyuu(seiyuu).await,
        None => {
            gateway
                .list_posts(SortOrder::parse(query.sort.as_deref()))
                .await
        }
    }
    .map_err(|e| e.reported("Failed to load posts"))?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Create a post after verifying its voice-actor id
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    tag = "posts",
    request_body = CreatePostForm,
    responses(
        (status = 201, description = "Created", body = Post),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_post(
    gateway: web::Data<Gateway>,
    req: web::Json<CreatePostForm>,
) -> Result<HttpResponse> {
    let post = CreateFlow::new(req.into_inner()).submit(&gateway).await?;
    Ok(HttpResponse::Created().json(post))
}

/// Get a post by ID
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post", body = Post),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_post(
    gateway: web::Data<Gateway>,
    post_id: web::Path<PostId>,
) -> Result<HttpResponse> {
    let post = gateway
        .get_post(*post_id)
        .await
        .map_err(|e| e.reported("Failed to load post"))?;
    Ok(HttpResponse::Ok().json(post))
}

/// Edit title, content, image or video
#[utoipa::path(
    patch,
    path = "/api/v1/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    request_body = PostPatch,
    responses((status = 200, description = "Updated post"))
)]
pub async fn update_post(
    gateway: web::Data<Gateway>,
    post_id: web::Path<PostId>,
    req: web::Json<PostPatch>,
) -> Result<HttpResponse> {
    let body = post_detail::save_edit(&gateway, *post_id, req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(body))
}

/// Two-step delete: arms without `confirm=true`, deletes post and comments with it
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id"),
        ("confirm" = Option<bool>, Query, description = "Second activation of the delete control")
    ),
    responses((status = 200, description = "Armed confirmation or deletion result"))
)]
pub async fn delete_post(
    gateway: web::Data<Gateway>,
    post_id: web::Path<PostId>,
    query: web::Query<DeletePostQuery>,
) -> Result<HttpResponse> {
    let outcome = post_detail::delete_post(&gateway, *post_id, query.confirm).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// Atomically add one upvote and return the stored count
#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/upvote",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    responses((status = 200, description = "Acknowledged upvote count"))
)]
pub async fn upvote_post(
    gateway: web::Data<Gateway>,
    post_id: web::Path<PostId>,
) -> Result<HttpResponse> {
    let outcome = post_detail::upvote(&gateway, *post_id).await?;
    Ok(HttpResponse::Ok().json(outcome))
}
