//! Post detail: body, comments, and the upvote / comment / edit / delete actions

use crate::components::{CommentItem, Navbar, PostBody};
use crate::error::{AppError, Result};
use crate::gateway::Gateway;
use crate::models::{Comment, PostId, PostPatch};
use crate::views::create::check_media;
use serde::Serialize;
use tracing::info;
use validator::Validate;

pub const NO_COMMENTS: &str = "No comments yet. Be the first to comment!";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this post?";
pub const DELETE_WARNING: &str = "This action cannot be undone. All comments will also be deleted.";

/// Edit toggle. Disabled while a save is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EditControl {
    pub editing: bool,
    pub processing: bool,
}

impl EditControl {
    pub fn label(&self) -> &'static str {
        if self.editing {
            "Cancel"
        } else {
            "Edit"
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.processing
    }

    pub fn toggle(&mut self) {
        if self.is_enabled() {
            self.editing = !self.editing;
        }
    }
}

/// What one activation of the delete control led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStep {
    /// Control was disabled; nothing happened
    Ignored,
    /// First activation: confirmation is now shown
    Armed,
    /// Second activation: the cascade must run now
    Execute,
}

/// Two-step delete button.
///
/// The first activation only arms the control. Activating it again while armed
/// asks for the delete. While processing, or while the post is being edited,
/// the control is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeleteControl {
    pub armed: bool,
    pub processing: bool,
    pub editing: bool,
}

impl DeleteControl {
    pub fn label(&self) -> &'static str {
        if self.armed {
            "Confirm Delete"
        } else {
            "Delete"
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.processing && !self.editing
    }

    pub fn activate(&mut self) -> DeleteStep {
        if !self.is_enabled() {
            return DeleteStep::Ignored;
        }
        if self.armed {
            self.processing = true;
            DeleteStep::Execute
        } else {
            self.armed = true;
            DeleteStep::Armed
        }
    }

    pub fn cancel(&mut self) {
        if !self.processing {
            self.armed = false;
        }
    }

    /// The cascade finished; a failure disarms so the user has to start over.
    pub fn finish(&mut self, succeeded: bool) {
        self.processing = false;
        if !succeeded {
            self.armed = false;
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteConfirmation {
    pub label: &'static str,
    pub prompt: &'static str,
    pub warning: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DeleteOutcome {
    Armed {
        post_id: PostId,
        confirmation: DeleteConfirmation,
    },
    Deleted {
        post_id: PostId,
        redirect: &'static str,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct PostControls {
    pub edit: EditControl,
    pub edit_label: &'static str,
    pub delete: DeleteControl,
    pub delete_label: &'static str,
}

impl Default for PostControls {
    fn default() -> Self {
        let edit = EditControl::default();
        let delete = DeleteControl::default();
        Self {
            edit_label: edit.label(),
            delete_label: delete.label(),
            edit,
            delete,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostDetailView {
    pub navbar: Navbar,
    pub post: PostBody,
    pub comments: Vec<CommentItem>,
    pub comment_count: usize,
    pub empty_comments_message: Option<&'static str>,
    pub controls: PostControls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpvoteOutcome {
    pub post_id: PostId,
    pub upvotes: i64,
}

impl PostDetailView {
    pub async fn load(gateway: &Gateway, id: PostId) -> Result<Self> {
        let (post, comments) = futures::join!(gateway.get_post(id), gateway.list_comments(id));

        let post = post.map_err(|e| e.reported("Failed to load post"))?;
        let comments = comments.map_err(|e| e.reported("Failed to load post"))?;
        let names = gateway.resolve_names([post.seiyuu]).await;

        let comments: Vec<CommentItem> = comments.iter().map(CommentItem::from).collect();
        Ok(Self {
            navbar: Navbar::default(),
            post: PostBody::new(&post, &names),
            comment_count: comments.len(),
            empty_comments_message: comments.is_empty().then_some(NO_COMMENTS),
            comments,
            controls: PostControls::default(),
        })
    }
}

/// Count shown after an upvote is the one the store acknowledged.
pub async fn upvote(gateway: &Gateway, id: PostId) -> Result<UpvoteOutcome> {
    let upvotes = gateway
        .upvote(id)
        .await
        .map_err(|e| e.reported("Failed to upvote post. Please try again."))?;
    Ok(UpvoteOutcome {
        post_id: id,
        upvotes,
    })
}

pub async fn add_comment(gateway: &Gateway, id: PostId, content: &str) -> Result<Comment> {
    let content = content.trim();
    if content.is_empty() {
        return Err(AppError::Validation("Comment cannot be empty".to_string()));
    }
    gateway
        .create_comment(id, content)
        .await
        .map_err(|e| e.reported("Failed to add comment. Please try again."))
}

pub async fn save_edit(gateway: &Gateway, id: PostId, patch: PostPatch) -> Result<PostBody> {
    let patch = patch.normalized();
    if patch.is_empty() {
        return Err(AppError::BadRequest("Nothing to update".to_string()));
    }
    if patch.title.as_deref().is_some_and(str::is_empty) {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    patch.validate()?;
    check_media(patch.image.as_deref(), patch.video.as_deref())?;

    let post = gateway
        .update_post(id, &patch)
        .await
        .map_err(|e| e.reported("Failed to update post. Please try again."))?;
    let names = gateway.resolve_names([post.seiyuu]).await;
    Ok(PostBody::new(&post, &names))
}

/// One activation of the delete control on a fresh screen.
///
/// Without `confirmed` the control only arms and the confirmation is returned.
/// With it, the first gesture is taken as already made and the cascade runs.
pub async fn delete_post(gateway: &Gateway, id: PostId, confirmed: bool) -> Result<DeleteOutcome> {
    let mut control = DeleteControl::default();
    if confirmed {
        control.activate();
    }

    match control.activate() {
        DeleteStep::Armed | DeleteStep::Ignored => Ok(DeleteOutcome::Armed {
            post_id: id,
            confirmation: DeleteConfirmation {
                label: control.label(),
                prompt: DELETE_PROMPT,
                warning: DELETE_WARNING,
            },
        }),
        DeleteStep::Execute => {
            let result = gateway.delete_post_cascade(id).await;
            control.finish(result.is_ok());
            result.map_err(|e| e.reported("Failed to delete post. Please try again."))?;

            info!(post_id = id, "Post deleted from detail screen");
            Ok(DeleteOutcome::Deleted {
                post_id: id,
                redirect: "/",
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_requires_two_activations() {
        let mut control = DeleteControl::default();
        assert_eq!(control.label(), "Delete");

        assert_eq!(control.activate(), DeleteStep::Armed);
        assert_eq!(control.label(), "Confirm Delete");
        assert!(!control.processing);

        assert_eq!(control.activate(), DeleteStep::Execute);
        assert!(control.processing);
        assert!(!control.is_enabled());
        assert_eq!(control.activate(), DeleteStep::Ignored);
    }

    #[test]
    fn test_failed_delete_disarms() {
        let mut control = DeleteControl::default();
        control.activate();
        control.activate();
        control.finish(false);
        assert!(!control.armed);
        assert!(control.is_enabled());
    }

    #[test]
    fn test_editing_disables_delete() {
        let mut control = DeleteControl {
            editing: true,
            ..Default::default()
        };
        assert_eq!(control.activate(), DeleteStep::Ignored);
        assert!(!control.armed);
    }

    #[test]
    fn test_cancel_disarms() {
        let mut control = DeleteControl::default();
        control.activate();
        control.cancel();
        assert_eq!(control.label(), "Delete");
    }

    #[test]
    fn test_edit_toggle_labels() {
        let mut edit = EditControl::default();
        assert_eq!(edit.label(), "Edit");
        edit.toggle();
        assert_eq!(edit.label(), "Cancel");

        edit.processing = true;
        edit.toggle();
        assert!(edit.editing);
    }
}
