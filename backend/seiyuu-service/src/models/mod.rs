/// Data models for seiyuu-service
///
/// - Post: fan post about one voice actor (text, image and/or YouTube video)
/// - Comment: reply attached to a post
/// - PostDraft / PostPatch: validated input for inserts and partial updates
/// - SortOrder: list ordering for the home screen
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Store-assigned post identifier
pub type PostId = i64;

/// AniList staff id of the voice actor a post is about
pub type SeiyuuId = anilist_client::StaffId;

/// Row of the `"Posts"` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Author display name
    pub user: String,
    pub seiyuu: SeiyuuId,
    pub content: Option<String>,
    pub image: Option<String>,
    pub video: Option<String>,
    pub created_at: DateTime<Utc>,
    pub upvotes: i64,
}

/// Row of the `"Comments"` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "post_Id")]
    #[sqlx(rename = "post_Id")]
    pub post_id: PostId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Fields of a post about to be inserted. Blank optional fields are already `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub user: String,
    pub seiyuu: SeiyuuId,
    pub content: Option<String>,
    pub image: Option<String>,
    pub video: Option<String>,
}

/// Partial update of a post.
///
/// `None` leaves a field untouched. For the optional columns `Some("")` clears
/// the stored value; [`PostPatch::normalized`] turns whitespace-only input into
/// that empty marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct PostPatch {
    #[validate(length(max = 200, message = "Title is too long"))]
    pub title: Option<String>,
    #[validate(length(max = 10000, message = "Content is too long"))]
    pub content: Option<String>,
    pub image: Option<String>,
    pub video: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.image.is_none() && self.video.is_none()
    }

    pub fn normalized(self) -> Self {
        fn clearable(value: Option<String>) -> Option<String> {
            value.map(|v| if v.trim().is_empty() { String::new() } else { v })
        }

        Self {
            title: self.title.map(|t| t.trim().to_string()),
            content: clearable(self.content),
            image: clearable(self.image.map(|i| i.trim().to_string())),
            video: clearable(self.video.map(|v| v.trim().to_string())),
        }
    }

    /// Apply to an in-memory post, mirroring the SQL update.
    pub fn apply_to(&self, post: &mut Post) {
        fn set(target: &mut Option<String>, value: &Option<String>) {
            if let Some(v) = value {
                *target = if v.is_empty() { None } else { Some(v.clone()) };
            }
        }

        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        set(&mut post.content, &self.content);
        set(&mut post.image, &self.image);
        set(&mut post.video, &self.video);
    }
}

/// Ordering of the post list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// `created_at` descending
    #[default]
    Newest,
    /// `created_at` ascending
    Oldest,
    /// upvote count descending
    Upvotes,
}

impl SortOrder {
    /// Parse a query value; anything unrecognised is `Newest`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("oldest") => SortOrder::Oldest,
            Some("upvotes") => SortOrder::Upvotes,
            _ => SortOrder::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Upvotes => "upvotes",
        }
    }

    /// Whether `a` may precede `b` in a list sorted by this order.
    pub fn in_order(&self, a: &Post, b: &Post) -> bool {
        match self {
            SortOrder::Newest => a.created_at >= b.created_at,
            SortOrder::Oldest => a.created_at <= b.created_at,
            SortOrder::Upvotes => a.upvotes >= b.upvotes,
        }
    }

    /// Sort in place. The sort is stable, so ties keep their input order.
    pub fn sort(&self, posts: &mut [Post]) {
        match self {
            SortOrder::Newest => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Oldest => posts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Upvotes => posts.sort_by(|a, b| b.upvotes.cmp(&a.upvotes)),
        }
    }
}

/// Trim and drop blank optional text.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
