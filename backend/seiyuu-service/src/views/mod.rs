/// Screen view models
///
/// One module per client screen. Each loads what it needs through the
/// [`Gateway`](crate::gateway::Gateway), derives the slices it shows, and
/// renders them with the presentational components. User actions live next to
/// the screen they belong to.
pub mod create;
pub mod home;
pub mod post_detail;
pub mod roster;
pub mod seiyuu;

pub use create::{CreateFlow, CreatePostForm, CreateView, SeiyuuVerification, VerifyRequest};
pub use home::{filter_posts, HomeView};
pub use post_detail::{DeleteControl, DeleteOutcome, EditControl, PostDetailView, UpvoteOutcome};
pub use roster::RosterView;
pub use seiyuu::SeiyuuView;
