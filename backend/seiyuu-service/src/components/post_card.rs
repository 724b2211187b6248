//! Post renderers: list cards, the detail body, and comment rows

use super::media::{
    format_detail_date, format_list_date, youtube_embed_url, youtube_thumbnail_url,
    youtube_video_id,
};
use crate::gateway::NameSnapshot;
use crate::models::{Comment, Post, PostId, SeiyuuId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeiyuuLink {
    pub id: SeiyuuId,
    pub href: String,
    /// `None` while the name is unresolved
    pub name: Option<String>,
}

impl SeiyuuLink {
    pub fn new(id: SeiyuuId, names: &NameSnapshot) -> Self {
        Self {
            id,
            href: format!("/seiyuu/{}", id),
            name: names.get(&id).cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEmbed {
    pub video_id: String,
    pub embed_url: String,
    pub thumbnail_url: String,
}

impl VideoEmbed {
    /// `None` for anything that is not a recognisable YouTube URL
    pub fn from_url(url: &str) -> Option<Self> {
        youtube_video_id(url).map(|video_id| Self {
            embed_url: youtube_embed_url(&video_id),
            thumbnail_url: youtube_thumbnail_url(&video_id),
            video_id,
        })
    }
}

/// Post as shown in lists (home, voice-actor page)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCard {
    pub id: PostId,
    pub href: String,
    pub title: String,
    pub user: String,
    pub posted_on: String,
    pub seiyuu: SeiyuuLink,
    pub upvotes: i64,
    /// Image URL, else the YouTube thumbnail
    pub thumbnail: Option<String>,
    pub has_video: bool,
}

impl PostCard {
    pub fn new(post: &Post, names: &NameSnapshot) -> Self {
        let video = post.video.as_deref().and_then(VideoEmbed::from_url);
        Self {
            id: post.id,
            href: format!("/post/{}", post.id),
            title: post.title.clone(),
            user: post.user.clone(),
            posted_on: format_list_date(&post.created_at),
            seiyuu: SeiyuuLink::new(post.seiyuu, names),
            upvotes: post.upvotes,
            thumbnail: post
                .image
                .clone()
                .or_else(|| video.as_ref().map(|v| v.thumbnail_url.clone())),
            has_video: video.is_some(),
        }
    }
}

/// Full post on the detail screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostBody {
    pub id: PostId,
    pub title: String,
    pub user: String,
    pub posted_at: String,
    pub seiyuu: SeiyuuLink,
    pub content: Option<String>,
    pub image: Option<String>,
    pub video: Option<VideoEmbed>,
    pub upvotes: i64,
}

impl PostBody {
    pub fn new(post: &Post, names: &NameSnapshot) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            user: post.user.clone(),
            posted_at: format_detail_date(&post.created_at),
            seiyuu: SeiyuuLink::new(post.seiyuu, names),
            content: post.content.clone(),
            image: post.image.clone(),
            video: post.video.as_deref().and_then(VideoEmbed::from_url),
            upvotes: post.upvotes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentItem {
    pub id: i64,
    pub content: String,
    pub posted_at: String,
}

impl From<&Comment> for CommentItem {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content.clone(),
            posted_at: format_detail_date(&comment.created_at),
        }
    }
}
