//! Process-local post store
//!
//! Same contract as the PostgreSQL store: the cascade works on a staged copy
//! and only commits when every step succeeds. Faults can be injected per
//! operation, and every write step is journaled so tests can check ordering.

use super::PostStore;
use crate::error::{AppError, Result};
use crate::models::{Comment, Post, PostDraft, PostId, PostPatch, SeiyuuId, SortOrder};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use tokio::sync::{Mutex, RwLock};

/// Store step that can be journaled or made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    ListPosts,
    FindPost,
    InsertPost,
    UpdatePost,
    IncrementUpvotes,
    DeleteComments,
    DeletePost,
    ListComments,
    InsertComment,
}

#[derive(Debug, Clone, Default)]
struct Tables {
    posts: Vec<Post>,
    comments: Vec<Comment>,
    next_post_id: PostId,
    next_comment_id: i64,
}

#[derive(Debug, Default)]
pub struct InMemoryPostStore {
    tables: RwLock<Tables>,
    faults: Mutex<HashSet<StoreOp>>,
    journal: Mutex<Vec<StoreOp>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully specified post (fixtures). Advances the id sequence past it.
    pub async fn seed_post(&self, post: Post) {
        let mut tables = self.tables.write().await;
        tables.next_post_id = tables.next_post_id.max(post.id);
        tables.posts.push(post);
    }

    /// Insert a fully specified comment (fixtures).
    pub async fn seed_comment(&self, comment: Comment) {
        let mut tables = self.tables.write().await;
        tables.next_comment_id = tables.next_comment_id.max(comment.id);
        tables.comments.push(comment);
    }

    /// Make every later call of `op` fail.
    pub async fn fail_on(&self, op: StoreOp) {
        self.faults.lock().await.insert(op);
    }

    /// Write steps in the order they ran
    pub async fn journal(&self) -> Vec<StoreOp> {
        self.journal.lock().await.clone()
    }

    pub async fn comment_count(&self, post_id: PostId) -> usize {
        self.tables
            .read()
            .await
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .count()
    }

    async fn step(&self, op: StoreOp) -> Result<()> {
        if self.faults.lock().await.contains(&op) {
            return Err(AppError::Database(format!("injected failure on {:?}", op)));
        }
        if !matches!(
            op,
            StoreOp::ListPosts | StoreOp::FindPost | StoreOp::ListComments
        ) {
            self.journal.lock().await.push(op);
        }
        Ok(())
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list_posts(&self, sort: SortOrder) -> Result<Vec<Post>> {
        self.step(StoreOp::ListPosts).await?;
        let mut posts = self.tables.read().await.posts.clone();
        sort.sort(&mut posts);
        Ok(posts)
    }

    async fn list_posts_by_seiyuu(&self, seiyuu: SeiyuuId) -> Result<Vec<Post>> {
        self.step(StoreOp::ListPosts).await?;
        let mut posts: Vec<Post> = self
            .tables
            .read()
            .await
            .posts
            .iter()
            .filter(|p| p.seiyuu == seiyuu)
            .cloned()
            .collect();
        SortOrder::Newest.sort(&mut posts);
        Ok(posts)
    }

    async fn find_post(&self, id: PostId) -> Result<Option<Post>> {
        self.step(StoreOp::FindPost).await?;
        Ok(self
            .tables
            .read()
            .await
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn insert_post(&self, draft: &PostDraft) -> Result<Post> {
        self.step(StoreOp::InsertPost).await?;
        let mut tables = self.tables.write().await;
        tables.next_post_id += 1;
        let post = Post {
            id: tables.next_post_id,
            title: draft.title.clone(),
            user: draft.user.clone(),
            seiyuu: draft.seiyuu,
            content: draft.content.clone(),
            image: draft.image.clone(),
            video: draft.video.clone(),
            created_at: Utc::now(),
            upvotes: 0,
        };
        tables.posts.push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: PostId, patch: &PostPatch) -> Result<Option<Post>> {
        self.step(StoreOp::UpdatePost).await?;
        let mut tables = self.tables.write().await;
        Ok(tables.posts.iter_mut().find(|p| p.id == id).map(|post| {
            patch.apply_to(post);
            post.clone()
        }))
    }

    async fn increment_upvotes(&self, id: PostId) -> Result<Option<i64>> {
        self.step(StoreOp::IncrementUpvotes).await?;
        let mut tables = self.tables.write().await;
        Ok(tables.posts.iter_mut().find(|p| p.id == id).map(|post| {
            post.upvotes += 1;
            post.upvotes
        }))
    }

    async fn delete_post_cascade(&self, id: PostId) -> Result<bool> {
        let mut tables = self.tables.write().await;
        let mut staged = tables.clone();

        self.step(StoreOp::DeleteComments).await?;
        staged.comments.retain(|c| c.post_id != id);

        self.step(StoreOp::DeletePost).await?;
        let before = staged.posts.len();
        staged.posts.retain(|p| p.id != id);
        let deleted = staged.posts.len() < before;

        *tables = staged;
        Ok(deleted)
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>> {
        self.step(StoreOp::ListComments).await?;
        let mut comments: Vec<Comment> = self
            .tables
            .read()
            .await
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(comments)
    }

    async fn insert_comment(&self, post_id: PostId, content: &str) -> Result<Option<Comment>> {
        self.step(StoreOp::InsertComment).await?;
        let mut tables = self.tables.write().await;
        if !tables.posts.iter().any(|p| p.id == post_id) {
            return Ok(None);
        }
        tables.next_comment_id += 1;
        let comment = Comment {
            id: tables.next_comment_id,
            post_id,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        tables.comments.push(comment.clone());
        Ok(Some(comment))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
