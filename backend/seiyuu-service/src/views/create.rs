//! Create screen: post form plus the AniList voice-actor id check
//!
//! A post can only be submitted after its seiyuu id has been confirmed to
//! belong to someone AniList credits as a voice actor. Editing the id throws
//! away any earlier result.

use crate::components::media::is_youtube_url;
use crate::components::Navbar;
use crate::error::{AppError, Result};
use crate::gateway::Gateway;
use crate::models::{non_blank, Post, PostDraft, SeiyuuId};
use anilist_client::StaffSummary;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;
use utoipa::ToSchema;
use validator::{Validate, ValidateUrl};

pub const INVALID_ID: &str = "Please enter a valid numeric ID";
pub const NOT_FOUND: &str = "Seiyuu not found with this ID";
pub const NOT_A_VOICE_ACTOR: &str = "This ID does not belong to a voice actor";
pub const LOOKUP_FAILED: &str = "Error validating seiyuu ID";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SeiyuuVerification {
    #[default]
    Unverified,
    Validating,
    Valid {
        name: String,
    },
    Invalid {
        reason: String,
    },
}

impl SeiyuuVerification {
    pub fn is_valid(&self) -> bool {
        matches!(self, SeiyuuVerification::Valid { .. })
    }

    fn invalid(reason: &str) -> Self {
        SeiyuuVerification::Invalid {
            reason: reason.to_string(),
        }
    }
}

/// Positive integer id, surrounding whitespace ignored
pub fn parse_seiyuu_id(input: &str) -> Option<SeiyuuId> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<SeiyuuId>().ok().filter(|id| *id > 0)
}

/// Accept the id as any JSON value. Strings and integers keep their text;
/// anything else becomes text that [`parse_seiyuu_id`] rejects, so the caller
/// sees the usual invalid-id state instead of a body error.
fn id_as_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Image must parse as a URL and video must be a YouTube link. Blank values
/// pass, since they leave the field empty.
pub(crate) fn check_media(image: Option<&str>, video: Option<&str>) -> Result<()> {
    if let Some(image) = image.map(str::trim).filter(|i| !i.is_empty()) {
        if !image.validate_url() {
            return Err(AppError::Validation(
                "Please enter a valid image URL".to_string(),
            ));
        }
    }
    if let Some(video) = video.map(str::trim).filter(|v| !v.is_empty()) {
        if !is_youtube_url(video) {
            return Err(AppError::Validation(
                "Please enter a valid YouTube URL".to_string(),
            ));
        }
    }
    Ok(())
}

/// Raw form fields as typed by the user
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreatePostForm {
    #[serde(default)]
    #[validate(length(max = 200, message = "Title is too long"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Name is too long"))]
    pub user: String,
    #[serde(default, alias = "seiyuu", deserialize_with = "id_as_text")]
    pub seiyuu_id: String,
    #[serde(default)]
    #[validate(length(max = 10000, message = "Content is too long"))]
    pub content: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VerifyRequest {
    #[serde(default, alias = "seiyuu", deserialize_with = "id_as_text")]
    pub seiyuu_id: String,
}

#[derive(Debug, Clone)]
pub struct CreateFlow {
    form: CreatePostForm,
    verification: SeiyuuVerification,
}

impl CreateFlow {
    pub fn new(form: CreatePostForm) -> Self {
        Self {
            form,
            verification: SeiyuuVerification::Unverified,
        }
    }

    pub fn form(&self) -> &CreatePostForm {
        &self.form
    }

    pub fn verification(&self) -> &SeiyuuVerification {
        &self.verification
    }

    pub fn can_submit(&self) -> bool {
        self.verification.is_valid()
    }

    pub fn edit_seiyuu_id(&mut self, value: impl Into<String>) {
        self.form.seiyuu_id = value.into();
        self.verification = SeiyuuVerification::Unverified;
    }

    /// Move to `Validating` and return the id to look up, or straight to
    /// `Invalid` when the field is not a usable id.
    pub fn begin_verification(&mut self) -> Option<SeiyuuId> {
        match parse_seiyuu_id(&self.form.seiyuu_id) {
            Some(id) => {
                self.verification = SeiyuuVerification::Validating;
                Some(id)
            }
            None => {
                self.verification = SeiyuuVerification::invalid(INVALID_ID);
                None
            }
        }
    }

    /// Apply a lookup result. Ignored unless a verification is in flight, so a
    /// result that arrives after the id was edited cannot mark the new id valid.
    pub fn complete_verification(&mut self, lookup: Result<Option<StaffSummary>>) {
        if self.verification != SeiyuuVerification::Validating {
            return;
        }

        self.verification = match lookup {
            Ok(Some(staff)) if staff.is_voice_actor() => SeiyuuVerification::Valid {
                name: staff.name.full,
            },
            Ok(Some(_)) => SeiyuuVerification::invalid(NOT_A_VOICE_ACTOR),
            Ok(None) => SeiyuuVerification::invalid(NOT_FOUND),
            Err(e) => {
                warn!(error = %e, "Seiyuu id verification failed");
                SeiyuuVerification::invalid(LOOKUP_FAILED)
            }
        };
    }

    pub async fn verify(&mut self, gateway: &Gateway) -> &SeiyuuVerification {
        if let Some(id) = self.begin_verification() {
            let lookup = gateway.verify_voice_actor(id).await;
            self.complete_verification(lookup);
        }
        &self.verification
    }

    /// Required fields and URL shapes; first failure wins.
    pub fn check_fields(&self) -> Result<()> {
        if self.form.title.trim().is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }
        if self.form.user.trim().is_empty() {
            return Err(AppError::Validation("Your name is required".to_string()));
        }
        self.form.validate()?;
        check_media(self.form.image.as_deref(), self.form.video.as_deref())
    }

    /// Insertable post; only available once the id is verified.
    pub fn draft(&self) -> Result<PostDraft> {
        if !self.can_submit() {
            return Err(AppError::Validation(
                "Please verify the seiyuu ID before submitting".to_string(),
            ));
        }
        let seiyuu = parse_seiyuu_id(&self.form.seiyuu_id)
            .ok_or_else(|| AppError::Validation(INVALID_ID.to_string()))?;

        Ok(PostDraft {
            title: self.form.title.trim().to_string(),
            user: self.form.user.trim().to_string(),
            seiyuu,
            content: non_blank(self.form.content.clone()),
            image: non_blank(self.form.image.clone()),
            video: non_blank(self.form.video.clone()),
        })
    }

    /// Check fields, verify the id, then insert.
    pub async fn submit(mut self, gateway: &Gateway) -> Result<Post> {
        self.check_fields()?;

        if let SeiyuuVerification::Invalid { reason } = self.verify(gateway).await {
            return Err(AppError::Validation(reason.clone()));
        }

        let draft = self.draft()?;
        gateway
            .create_post(&draft)
            .await
            .map_err(|e| e.reported("Failed to create post. Please try again."))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub placeholder: &'static str,
}

/// Empty form as first shown
#[derive(Debug, Clone, Serialize)]
pub struct CreateView {
    pub navbar: Navbar,
    pub fields: Vec<FormField>,
    pub verification: SeiyuuVerification,
    pub verify_label: &'static str,
    pub submit_label: &'static str,
}

impl Default for CreateView {
    fn default() -> Self {
        Self {
            navbar: Navbar::default(),
            fields: vec![
                FormField {
                    name: "title",
                    label: "Title",
                    required: true,
                    placeholder: "Enter post title",
                },
                FormField {
                    name: "user",
                    label: "Your Name",
                    required: true,
                    placeholder: "Enter your name",
                },
                FormField {
                    name: "seiyuu_id",
                    label: "Seiyuu ID",
                    required: true,
                    placeholder: "Enter AniList staff ID",
                },
                FormField {
                    name: "content",
                    label: "Content",
                    required: false,
                    placeholder: "Write your post content",
                },
                FormField {
                    name: "image",
                    label: "Image URL",
                    required: false,
                    placeholder: "https://example.com/image.jpg",
                },
                FormField {
                    name: "video",
                    label: "YouTube Video URL",
                    required: false,
                    placeholder: "https://www.youtube.com/watch?v=...",
                },
            ],
            verification: SeiyuuVerification::Unverified,
            verify_label: "Verify",
            submit_label: "Create Post",
        }
    }
}
