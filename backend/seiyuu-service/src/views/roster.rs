//! Voice-actor roster, one favourites-ordered page at a time

use crate::components::{Card, Navbar};
use crate::error::Result;
use crate::gateway::{Gateway, RosterPage};
use serde::Serialize;

pub const EMPTY_PAGE: &str = "No voice actors on this page.";

#[derive(Debug, Clone, Serialize)]
pub struct RosterView {
    pub navbar: Navbar,
    pub page: u32,
    /// `None` on the first page
    pub previous_page: Option<u32>,
    /// Always offered; a page past the end simply comes back empty
    pub next_page: u32,
    pub cards: Vec<Card>,
    pub empty_message: Option<&'static str>,
}

impl RosterView {
    pub async fn load(gateway: &Gateway, page: u32) -> Result<Self> {
        let roster = gateway
            .roster_page(page)
            .await
            .map_err(|e| e.reported("Failed to load voice actors"))?;
        Ok(Self::from(roster))
    }
}

impl From<RosterPage> for RosterView {
    fn from(roster: RosterPage) -> Self {
        let cards: Vec<Card> = roster.staff.iter().map(Card::from).collect();
        Self {
            navbar: Navbar::default(),
            page: roster.page,
            previous_page: (roster.page > 1).then(|| roster.page - 1),
            next_page: roster.page.saturating_add(1),
            empty_message: cards.is_empty().then_some(EMPTY_PAGE),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_message_and_navigation() {
        let view = RosterView::from(RosterPage {
            page: 400,
            staff: Vec::new(),
        });
        assert_eq!(view.empty_message, Some(EMPTY_PAGE));
        assert_eq!(view.previous_page, Some(399));
        assert_eq!(view.next_page, 401);
    }

    #[test]
    fn test_first_page_has_no_previous() {
        let view = RosterView::from(RosterPage {
            page: 1,
            staff: Vec::new(),
        });
        assert_eq!(view.previous_page, None);
    }
}
