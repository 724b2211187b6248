/// OpenAPI documentation for SeiyuuHub Seiyuu Service
use crate::handlers::{comments, health, posts, screens, seiyuu};
use crate::handlers::comments::CreateCommentRequest;
use crate::models::{Comment, Post, PostPatch, SortOrder};
use crate::views::{CreatePostForm, VerifyRequest};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SeiyuuHub Seiyuu Service API",
        version = "1.0.0",
        description = "Fan posts about voice actors. Stores posts, comments and upvotes, looks voice actors up on AniList, and serves one view payload per client screen.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8082", description = "Development server"),
    ),
    paths(
        health::health,
        health::liveness,
        health::readiness,
        posts::list_posts,
        posts::create_post,
        posts::get_post,
        posts::update_post,
        posts::delete_post,
        posts::upvote_post,
        comments::list_comments,
        comments::create_comment,
        seiyuu::roster,
        seiyuu::get_seiyuu,
        seiyuu::verify_seiyuu,
        screens::render_screen,
    ),
    components(schemas(
        Post,
        Comment,
        PostPatch,
        SortOrder,
        CreatePostForm,
        CreateCommentRequest,
        VerifyRequest,
    )),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "posts", description = "Post creation, retrieval, edits, upvotes and deletion"),
        (name = "comments", description = "Comments on posts"),
        (name = "seiyuu", description = "Voice-actor roster and profiles from AniList"),
        (name = "screens", description = "View payloads per client route"),
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_post_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/posts"));
        assert!(doc.paths.paths.contains_key("/api/v1/posts/{id}/upvote"));
    }

    #[test]
    fn test_every_declared_tag_has_a_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/health",
            "/api/v1/health/ready",
            "/api/v1/seiyuu",
            "/api/v1/seiyuu/{id}",
            "/api/v1/seiyuu/verify",
            "/api/v1/screens/{path}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{}", path);
        }
    }
}
