/// Stateless presentational components
///
/// Each component is a serializable value built from already-resolved data;
/// none of them talk to the gateway.
pub mod card;
pub mod media;
pub mod navbar;
pub mod post_card;

pub use card::Card;
pub use navbar::{NavLink, Navbar};
pub use post_card::{CommentItem, PostBody, PostCard, SeiyuuLink, VideoEmbed};
