//! Home screen: every post, sortable, with a free-text filter

use crate::components::{Navbar, PostCard};
use crate::error::Result;
use crate::gateway::{Gateway, NameSnapshot};
use crate::models::{Post, SortOrder};
use serde::Serialize;

pub const NO_MATCHES: &str = "No posts found matching your search.";
pub const NO_POSTS: &str = "No posts yet. Be the first to create one!";

/// Posts whose title, content, author or resolved voice-actor name contains
/// `query`, ignoring case. A blank query keeps every post; otherwise the
/// query is matched as typed, surrounding whitespace included.
pub fn filter_posts<'a>(posts: &'a [Post], query: &str, names: &NameSnapshot) -> Vec<&'a Post> {
    if query.trim().is_empty() {
        return posts.iter().collect();
    }
    let needle = query.to_lowercase();

    let contains = |text: &str| text.to_lowercase().contains(&needle);

    posts
        .iter()
        .filter(|post| {
            contains(&post.title)
                || post.content.as_deref().is_some_and(contains)
                || contains(&post.user)
                || names.get(&post.seiyuu).is_some_and(|name| contains(name))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: &'static str,
    pub action_label: &'static str,
    /// Link target; `None` when the action clears the search in place
    pub action_href: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub navbar: Navbar,
    pub sort: SortOrder,
    pub search: String,
    /// `Found N post(s) for "q"`, only while searching
    pub result_summary: Option<String>,
    pub posts: Vec<PostCard>,
    pub empty_state: Option<EmptyState>,
}

impl HomeView {
    pub async fn load(gateway: &Gateway, sort: SortOrder, search: Option<&str>) -> Result<Self> {
        let posts = gateway
            .list_posts(sort)
            .await
            .map_err(|e| e.reported("Failed to load posts"))?;

        let names = gateway.resolve_names(posts.iter().map(|p| p.seiyuu)).await;
        Ok(Self::build(sort, search.unwrap_or_default(), &posts, &names))
    }

    pub fn build(sort: SortOrder, search: &str, posts: &[Post], names: &NameSnapshot) -> Self {
        let search = search.to_string();
        let searching = !search.trim().is_empty();
        let filtered = filter_posts(posts, &search, names);

        let result_summary = searching
            .then(|| format!("Found {} post(s) for \"{}\"", filtered.len(), search));

        let empty_state = match (filtered.is_empty(), searching) {
            (false, _) => None,
            (true, true) => Some(EmptyState {
                message: NO_MATCHES,
                action_label: "Clear search",
                action_href: None,
            }),
            (true, false) => Some(EmptyState {
                message: NO_POSTS,
                action_label: "Create Post",
                action_href: Some("/create"),
            }),
        };

        Self {
            navbar: Navbar::default(),
            sort,
            result_summary,
            posts: filtered.into_iter().map(|p| PostCard::new(p, names)).collect(),
            empty_state,
            search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(id: i64, title: &str, content: Option<&str>, user: &str, seiyuu: i64) -> Post {
        Post {
            id,
            title: title.to_string(),
            user: user.to_string(),
            seiyuu,
            content: content.map(str::to_string),
            image: None,
            video: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, id as u32).unwrap(),
            upvotes: 0,
        }
    }

    fn fixture() -> (Vec<Post>, NameSnapshot) {
        let posts = vec![
            post(1, "Steins;Gate rewatch", Some("El Psy Kongroo"), "okabe", 10),
            post(2, "Favourite duet", None, "Ann", 20),
            post(3, "Random thoughts", Some("nothing here"), "bob", 30),
        ];
        let mut names = NameSnapshot::new();
        names.insert(10, "Mamoru Miyano".to_string());
        names.insert(20, "Kana Hanazawa".to_string());
        (posts, names)
    }

    fn ids(posts: Vec<&Post>) -> Vec<i64> {
        posts.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let (posts, names) = fixture();
        assert_eq!(ids(filter_posts(&posts, "   ", &names)), vec![1, 2, 3]);
    }

    #[test]
    fn test_matches_each_field_case_insensitively() {
        let (posts, names) = fixture();
        assert_eq!(ids(filter_posts(&posts, "STEINS", &names)), vec![1]);
        assert_eq!(ids(filter_posts(&posts, "kongroo", &names)), vec![1]);
        assert_eq!(ids(filter_posts(&posts, "ann", &names)), vec![2]);
        assert_eq!(ids(filter_posts(&posts, "hanazawa", &names)), vec![2]);
    }

    #[test]
    fn test_surrounding_whitespace_is_part_of_query() {
        let (posts, names) = fixture();
        assert!(filter_posts(&posts, "rewatch ", &names).is_empty());
        assert_eq!(ids(filter_posts(&posts, "gate rew", &names)), vec![1]);
        assert_eq!(ids(filter_posts(&posts, " thoughts", &names)), vec![3]);

        let view = HomeView::build(SortOrder::Newest, "rewatch ", &posts, &names);
        assert_eq!(
            view.result_summary.as_deref(),
            Some("Found 0 post(s) for \"rewatch \"")
        );
        assert_eq!(view.empty_state.unwrap().message, NO_MATCHES);
    }

    #[test]
    fn test_unresolved_name_never_matches() {
        let (posts, mut names) = fixture();
        names.remove(&20);
        assert!(filter_posts(&posts, "hanazawa", &names).is_empty());
    }

    #[test]
    fn test_search_summary_and_empty_states() {
        let (posts, names) = fixture();

        let view = HomeView::build(SortOrder::Newest, "kana", &posts, &names);
        assert_eq!(view.result_summary.as_deref(), Some("Found 1 post(s) for \"kana\""));
        assert!(view.empty_state.is_none());

        let view = HomeView::build(SortOrder::Newest, "zzz", &posts, &names);
        assert_eq!(view.empty_state.unwrap().message, NO_MATCHES);

        let view = HomeView::build(SortOrder::Newest, "", &[], &names);
        assert!(view.result_summary.is_none());
        assert_eq!(view.empty_state.unwrap().action_href, Some("/create"));
    }
}
