//! Remote data gateway
//!
//! Single entry point for every remote call a screen makes: posts and comments
//! go to the [`PostStore`], staff lookups go to the AniList [`StaffDirectory`].
//! The gateway also owns the process-wide [`SeiyuuNameCache`].
//!
//! Nothing here is spawned. Every call runs inside the caller's future, so when
//! a request is dropped its in-flight lookups are dropped with it.

pub mod name_cache;

pub use name_cache::{NameSnapshot, SeiyuuNameCache, UNKNOWN_SEIYUU};

use crate::db::PostStore;
use crate::error::{AppError, Result};
use crate::metrics::gateway::{record_operation, STAFF_LOOKUP_DURATION_SECONDS};
use crate::models::{Comment, Post, PostDraft, PostId, PostPatch, SeiyuuId, SortOrder};
use anilist_client::{RosterStaff, StaffDirectory, StaffProfile, StaffSummary};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// Staff requested per roster page
    pub roster_page_size: u32,
    /// Upper bound on concurrent name lookups
    pub name_lookup_concurrency: usize,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            roster_page_size: 25,
            name_lookup_concurrency: 4,
        }
    }
}

/// Voice actor as returned by [`Gateway::lookup_voice_actor`]
#[derive(Debug, Clone, Serialize)]
pub struct VoiceActor {
    pub name: String,
    pub occupations: Vec<String>,
    pub profile: StaffProfile,
}

/// One roster page, already filtered to voice actors
#[derive(Debug, Clone, Serialize)]
pub struct RosterPage {
    pub page: u32,
    pub staff: Vec<RosterStaff>,
}

#[derive(Clone)]
pub struct Gateway {
    store: Arc<dyn PostStore>,
    staff: Arc<dyn StaffDirectory>,
    names: Arc<SeiyuuNameCache>,
    settings: GatewaySettings,
}

impl Gateway {
    pub fn new(
        store: Arc<dyn PostStore>,
        staff: Arc<dyn StaffDirectory>,
        settings: GatewaySettings,
    ) -> Self {
        Self {
            store,
            staff,
            names: Arc::new(SeiyuuNameCache::new()),
            settings,
        }
    }

    pub fn names(&self) -> &SeiyuuNameCache {
        &self.names
    }

    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    /// Store readiness
    pub async fn ping(&self) -> Result<()> {
        self.store.ping().await
    }

    // ---------------------------------------------------------------------
    // Posts
    // ---------------------------------------------------------------------

    #[instrument(skip(self), fields(sort = sort.as_str()))]
    pub async fn list_posts(&self, sort: SortOrder) -> Result<Vec<Post>> {
        let result = self.store.list_posts(sort).await;
        record_operation("list_posts", &result);
        result
    }

    #[instrument(skip(self))]
    pub async fn list_posts_for_seiyuu(&self, seiyuu_id: SeiyuuId) -> Result<Vec<Post>> {
        let result = self.store.list_posts_by_seiyuu(seiyuu_id).await;
        record_operation("list_posts_for_seiyuu", &result);
        result
    }

    #[instrument(skip(self))]
    pub async fn get_post(&self, id: PostId) -> Result<Post> {
        let result = self
            .store
            .find_post(id)
            .await
            .and_then(|post| post.ok_or_else(|| post_not_found(id)));
        record_operation("get_post", &result);
        result
    }

    #[instrument(skip(self, draft), fields(seiyuu = draft.seiyuu))]
    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post> {
        let result = self.store.insert_post(draft).await;
        if let Ok(post) = &result {
            info!(post_id = post.id, seiyuu = post.seiyuu, "Post created");
        }
        record_operation("create_post", &result);
        result
    }

    #[instrument(skip(self, patch))]
    pub async fn update_post(&self, id: PostId, patch: &PostPatch) -> Result<Post> {
        let result = self
            .store
            .update_post(id, patch)
            .await
            .and_then(|post| post.ok_or_else(|| post_not_found(id)));
        record_operation("update_post", &result);
        result
    }

    /// Remove the post and all of its comments in one store transaction.
    #[instrument(skip(self))]
    pub async fn delete_post_cascade(&self, id: PostId) -> Result<()> {
        let result = match self.store.delete_post_cascade(id).await {
            Ok(true) => {
                info!(post_id = id, "Post and comments deleted");
                Ok(())
            }
            Ok(false) => Err(post_not_found(id)),
            Err(e) => Err(e),
        };
        record_operation("delete_post_cascade", &result);
        result
    }

    /// Atomic server-side increment; returns the acknowledged count.
    #[instrument(skip(self))]
    pub async fn upvote(&self, id: PostId) -> Result<i64> {
        let result = self
            .store
            .increment_upvotes(id)
            .await
            .and_then(|count| count.ok_or_else(|| post_not_found(id)));
        record_operation("upvote", &result);
        result
    }

    // ---------------------------------------------------------------------
    // Comments
    // ---------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>> {
        let result = self.store.list_comments(post_id).await;
        record_operation("list_comments", &result);
        result
    }

    #[instrument(skip(self, content))]
    pub async fn create_comment(&self, post_id: PostId, content: &str) -> Result<Comment> {
        let result = self
            .store
            .insert_comment(post_id, content)
            .await
            .and_then(|comment| comment.ok_or_else(|| post_not_found(post_id)));
        record_operation("create_comment", &result);
        result
    }

    // ---------------------------------------------------------------------
    // Staff service
    // ---------------------------------------------------------------------

    /// Full profile; `None` when AniList has no such staff.
    #[instrument(skip(self))]
    pub async fn lookup_voice_actor(&self, id: SeiyuuId) -> Result<Option<VoiceActor>> {
        let timer = STAFF_LOOKUP_DURATION_SECONDS
            .with_label_values(&["profile"])
            .start_timer();
        let result = self.staff.staff_profile(id).await.map_err(AppError::from);
        timer.observe_duration();

        let result = result.map(|profile| {
            profile.map(|profile| {
                self.names.insert(profile.id, profile.name.full.clone());
                VoiceActor {
                    name: profile.name.full.clone(),
                    occupations: profile.occupations().to_vec(),
                    profile,
                }
            })
        });
        record_operation("lookup_voice_actor", &result);
        result
    }

    /// Name and occupations only; `None` when AniList has no such staff.
    #[instrument(skip(self))]
    pub async fn verify_voice_actor(&self, id: SeiyuuId) -> Result<Option<StaffSummary>> {
        let result = self.fetch_summary(id).await;
        if let Ok(Some(summary)) = &result {
            self.names.insert(summary.id, summary.name.full.clone());
        }
        record_operation("verify_voice_actor", &result);
        result
    }

    /// One page of the roster, keeping only staff credited as voice actors.
    /// Pages below 1 are treated as page 1; pages past the end are empty.
    #[instrument(skip(self))]
    pub async fn roster_page(&self, page: u32) -> Result<RosterPage> {
        let page = page.max(1);
        let timer = STAFF_LOOKUP_DURATION_SECONDS
            .with_label_values(&["page"])
            .start_timer();
        let result = self
            .staff
            .staff_page(page, self.settings.roster_page_size)
            .await
            .map_err(AppError::from);
        timer.observe_duration();

        let result = result.map(|staff| {
            let fetched = staff.len();
            let staff: Vec<RosterStaff> =
                staff.into_iter().filter(RosterStaff::is_voice_actor).collect();
            debug!(page, fetched, voice_actors = staff.len(), "Roster page loaded");
            RosterPage { page, staff }
        });
        record_operation("roster_page", &result);
        result
    }

    /// Look up the names of every id not yet cached and return a snapshot for `ids`.
    ///
    /// Staff AniList does not know are cached as [`UNKNOWN_SEIYUU`]. A failed
    /// lookup leaves its id unresolved so a later screen can try again.
    pub async fn resolve_names<I>(&self, ids: I) -> NameSnapshot
    where
        I: IntoIterator<Item = SeiyuuId>,
    {
        let ids: Vec<SeiyuuId> = ids.into_iter().collect();
        let missing = self.names.missing(ids.iter().copied());

        if !missing.is_empty() {
            debug!(count = missing.len(), "Resolving voice-actor names");

            let lookups: Vec<(SeiyuuId, Result<Option<StaffSummary>>)> =
                stream::iter(missing)
                    .map(|id| async move { (id, self.fetch_summary(id).await) })
                    .buffer_unordered(self.settings.name_lookup_concurrency.max(1))
                    .collect()
                    .await;

            for (id, lookup) in lookups {
                match lookup {
                    Ok(Some(summary)) => self.names.insert(id, summary.name.full),
                    Ok(None) => self.names.insert(id, UNKNOWN_SEIYUU),
                    Err(e) => warn!(seiyuu_id = id, error = %e, "Name lookup failed"),
                }
            }
        }

        self.names.snapshot(ids)
    }

    async fn fetch_summary(&self, id: SeiyuuId) -> Result<Option<StaffSummary>> {
        let timer = STAFF_LOOKUP_DURATION_SECONDS
            .with_label_values(&["summary"])
            .start_timer();
        let result = self.staff.staff_summary(id).await.map_err(AppError::from);
        timer.observe_duration();
        result
    }
}

fn post_not_found(id: PostId) -> AppError {
    AppError::NotFound(format!("Post {} not found", id))
}
