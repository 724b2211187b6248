//! Client routes and HTTP route registration
//!
//! [`Route`] is the set of screens the front end can show; `configure` mounts
//! every `/api/v1` endpoint on an actix `App`.

use crate::handlers;
use crate::models::{PostId, SeiyuuId};
use actix_web::web;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/create`
    Create,
    /// `/seiyuu`
    SeiyuuList,
    /// `/seiyuu/{id}`
    Seiyuu(SeiyuuId),
    /// `/post/{id}`
    Post(PostId),
}

impl Route {
    /// Match a client path. Trailing slashes are ignored; unknown paths and
    /// non-numeric ids give `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["create"] => Some(Route::Create),
            ["seiyuu"] => Some(Route::SeiyuuList),
            ["seiyuu", id] => id.parse().ok().map(Route::Seiyuu),
            ["post", id] => id.parse().ok().map(Route::Post),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Create => "/create".to_string(),
            Route::SeiyuuList => "/seiyuu".to_string(),
            Route::Seiyuu(id) => format!("/seiyuu/{}", id),
            Route::Post(id) => format!("/post/{}", id),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Create => "create",
            Route::SeiyuuList => "seiyuu_list",
            Route::Seiyuu(_) => "seiyuu",
            Route::Post(_) => "post",
        }
    }
}

/// Mount the `/api/v1` resource, screen and health routes.
///
/// Expects `web::Data<Gateway>` to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health))
            .route("/health/live", web::get().to(handlers::liveness))
            .route("/health/ready", web::get().to(handlers::readiness))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(handlers::list_posts))
                    .route("", web::post().to(handlers::create_post))
                    .route("/{id}", web::get().to(handlers::get_post))
                    .route("/{id}", web::patch().to(handlers::update_post))
                    .route("/{id}", web::delete().to(handlers::delete_post))
                    .route("/{id}/upvote", web::post().to(handlers::upvote_post))
                    .route("/{id}/comments", web::get().to(handlers::list_comments))
                    .route("/{id}/comments", web::post().to(handlers::create_comment)),
            )
            .service(
                web::scope("/seiyuu")
                    .route("", web::get().to(handlers::roster))
                    .route("/verify", web::post().to(handlers::verify_seiyuu))
                    .route("/{id}", web::get().to(handlers::get_seiyuu)),
            )
            .route("/screens/{path:.*}", web::get().to(handlers::render_screen)),
    );
}

/// Mount `POST /api/anilist`. Expects `web::Data<AniListClient>` on the app.
pub fn configure_proxy(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/anilist", web::post().to(handlers::anilist_proxy));
}
