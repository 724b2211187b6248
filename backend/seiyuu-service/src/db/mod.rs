/// Post and comment storage
///
/// - `PostStore`: the async contract the gateway talks to
/// - `PgPostStore`: PostgreSQL implementation over `post_repo` / `comment_repo`
/// - `InMemoryPostStore`: process-local implementation for development and tests
pub mod comment_repo;
pub mod memory;
pub mod post_repo;

pub use memory::{InMemoryPostStore, StoreOp};

use crate::error::Result;
use crate::models::{Comment, Post, PostDraft, PostId, PostPatch, SeiyuuId, SortOrder};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn list_posts(&self, sort: SortOrder) -> Result<Vec<Post>>;

    /// Newest first
    async fn list_posts_by_seiyuu(&self, seiyuu: SeiyuuId) -> Result<Vec<Post>>;

    async fn find_post(&self, id: PostId) -> Result<Option<Post>>;

    /// Insert with `upvotes = 0` and `created_at = now`
    async fn insert_post(&self, draft: &PostDraft) -> Result<Post>;

    /// `None` when the post does not exist
    async fn update_post(&self, id: PostId, patch: &PostPatch) -> Result<Option<Post>>;

    /// Atomic `upvotes + 1`; returns the stored count, `None` when the post does not exist
    async fn increment_upvotes(&self, id: PostId) -> Result<Option<i64>>;

    /// Delete the post's comments, then the post, as one unit.
    /// Returns `false` when the post did not exist.
    async fn delete_post_cascade(&self, id: PostId) -> Result<bool>;

    /// Oldest first
    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>>;

    /// `None` when the parent post does not exist
    async fn insert_comment(&self, post_id: PostId, content: &str) -> Result<Option<Comment>>;

    /// Readiness probe
    async fn ping(&self) -> Result<()>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn list_posts(&self, sort: SortOrder) -> Result<Vec<Post>> {
        Ok(post_repo::list_posts(&self.pool, sort).await?)
    }

    async fn list_posts_by_seiyuu(&self, seiyuu: SeiyuuId) -> Result<Vec<Post>> {
        Ok(post_repo::list_posts_by_seiyuu(&self.pool, seiyuu).await?)
    }

    async fn find_post(&self, id: PostId) -> Result<Option<Post>> {
        Ok(post_repo::find_post_by_id(&self.pool, id).await?)
    }

    async fn insert_post(&self, draft: &PostDraft) -> Result<Post> {
        Ok(post_repo::create_post(&self.pool, draft).await?)
    }

    async fn update_post(&self, id: PostId, patch: &PostPatch) -> Result<Option<Post>> {
        Ok(post_repo::update_post(&self.pool, id, patch).await?)
    }

    async fn increment_upvotes(&self, id: PostId) -> Result<Option<i64>> {
        Ok(post_repo::increment_upvotes(&self.pool, id).await?)
    }

    async fn delete_post_cascade(&self, id: PostId) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let removed_comments = comment_repo::delete_comments_by_post(&mut *tx, id).await?;
        let deleted = post_repo::delete_post(&mut *tx, id).await?;

        tx.commit().await?;

        debug!(post_id = id, removed_comments, deleted, "Post cascade committed");
        Ok(deleted)
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>> {
        Ok(comment_repo::list_comments(&self.pool, post_id).await?)
    }

    async fn insert_comment(&self, post_id: PostId, content: &str) -> Result<Option<Comment>> {
        match comment_repo::create_comment(&self.pool, post_id, content).await {
            Ok(comment) => Ok(Some(comment)),
            Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
