/// HTTP handlers
///
/// - Posts / comments: the gateway's store operations as a resource API
/// - Seiyuu: roster, profiles and id verification against AniList
/// - Screens: one view-model payload per client route
/// - Proxy: development pass-through to AniList
pub mod comments;
pub mod health;
pub mod posts;
pub mod proxy;
pub mod screens;
pub mod seiyuu;

pub use comments::{create_comment, list_comments};
pub use health::{health, liveness, readiness};
pub use posts::{create_post, delete_post, get_post, list_posts, update_post, upvote_post};
pub use proxy::anilist_proxy;
pub use screens::render_screen;
pub use seiyuu::{get_seiyuu, roster, verify_seiyuu};
