/// AniList staff directory client
///
/// Thin GraphQL client for the public AniList API. Only the staff-related
/// queries SeiyuuHub needs are exposed:
/// - **Summary**: name and primary occupations (voice-actor verification, name resolution)
/// - **Profile**: full profile with birth/death dates and notable characters
/// - **Page**: favourites-ordered roster pages
///
/// # Example
///
/// ```rust,no_run
/// use anilist_client::{AniListClient, AniListConfig, StaffDirectory};
///
/// # async fn run() -> anilist_client::Result<()> {
/// let client = AniListClient::new(&AniListConfig::default())?;
/// if let Some(staff) = client.staff_summary(95185).await? {
///     println!("{} voice actor: {}", staff.name.full, staff.is_voice_actor());
/// }
/// # Ok(())
/// # }
/// ```
pub mod client;
pub mod error;
pub mod models;
pub mod queries;

pub use client::{AniListClient, AniListConfig, StaffDirectory, DEFAULT_ANILIST_ENDPOINT};
pub use error::{AniListError, Result};
pub use models::{
    CharacterNode, FuzzyDate, RosterStaff, StaffId, StaffImage, StaffName, StaffProfile,
    StaffSummary, VOICE_ACTOR_OCCUPATION,
};
