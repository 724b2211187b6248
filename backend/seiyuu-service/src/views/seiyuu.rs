//! Voice-actor detail: live AniList profile plus the posts written about them

use crate::components::{Navbar, PostCard};
use crate::error::{AppError, Result};
use crate::gateway::{Gateway, NameSnapshot, VoiceActor};
use crate::models::{Post, SeiyuuId};
use anilist_client::StaffProfile;
use serde::Serialize;

pub const NO_POSTS_FOR_SEIYUU: &str = "No posts yet. Be the first to post about this seiyuu!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterTile {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePanel {
    pub id: SeiyuuId,
    pub name: String,
    pub native_name: Option<String>,
    pub image: Option<String>,
    pub home_town: Option<String>,
    pub date_of_birth: String,
    /// Omitted unless AniList knows it
    pub date_of_death: Option<String>,
    pub age: Option<u32>,
    pub occupations: Vec<String>,
    pub characters: Vec<CharacterTile>,
}

impl From<&StaffProfile> for ProfilePanel {
    fn from(profile: &StaffProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name.full.clone(),
            native_name: profile.name.native.clone(),
            image: profile.image.as_ref().and_then(|i| i.large.clone()),
            home_town: profile.home_town.clone(),
            date_of_birth: profile
                .date_of_birth
                .map(|d| d.display())
                .unwrap_or_else(|| "Unknown".to_string()),
            date_of_death: profile
                .date_of_death
                .filter(|d| d.is_known())
                .map(|d| d.display()),
            age: profile.age,
            occupations: profile.occupations().to_vec(),
            characters: profile
                .characters()
                .iter()
                .map(|c| CharacterTile {
                    id: c.id,
                    name: c.name.full.clone(),
                    image: c.image.as_ref().and_then(|i| i.medium.clone()),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeiyuuView {
    pub navbar: Navbar,
    pub profile: ProfilePanel,
    pub posts: Vec<PostCard>,
    /// Set when the post list could not be loaded; the profile still renders
    pub posts_error: Option<String>,
    pub empty_message: Option<&'static str>,
}

impl SeiyuuView {
    /// Profile and posts are fetched concurrently. A profile failure fails the
    /// screen; a post-list failure only blanks the post section.
    pub async fn load(gateway: &Gateway, id: SeiyuuId) -> Result<Self> {
        let (profile, posts) = futures::join!(
            gateway.lookup_voice_actor(id),
            gateway.list_posts_for_seiyuu(id)
        );

        let actor = profile
            .map_err(|e| e.reported("Failed to load seiyuu"))?
            .ok_or_else(|| AppError::NotFound("Seiyuu not found".to_string()))?;

        let mut names = NameSnapshot::new();
        names.insert(id, actor.name.clone());

        Ok(match posts {
            Ok(posts) => Self::build(&actor, &posts, &names, None),
            Err(e) => {
                let message = e.reported("Failed to load posts").to_string();
                Self::build(&actor, &[], &names, Some(message))
            }
        })
    }

    fn build(
        actor: &VoiceActor,
        posts: &[Post],
        names: &NameSnapshot,
        posts_error: Option<String>,
    ) -> Self {
        let cards: Vec<PostCard> = posts.iter().map(|p| PostCard::new(p, names)).collect();
        Self {
            navbar: Navbar::default(),
            profile: ProfilePanel::from(&actor.profile),
            empty_message: (cards.is_empty() && posts_error.is_none())
                .then_some(NO_POSTS_FOR_SEIYUU),
            posts: cards,
            posts_error,
        }
    }
}
