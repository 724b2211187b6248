use anilist_client::RosterStaff;
use serde::Serialize;

/// Roster tile for one voice actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: i64,
    pub href: String,
    pub name: String,
    pub native_name: Option<String>,
    pub image: Option<String>,
    pub favourites: Option<i64>,
}

impl From<&RosterStaff> for Card {
    fn from(staff: &RosterStaff) -> Self {
        Self {
            id: staff.id,
            href: format!("/seiyuu/{}", staff.id),
            name: staff.name.full.clone(),
            native_name: staff.name.native.clone(),
            image: staff.image.as_ref().and_then(|i| i.large.clone()),
            favourites: staff.favourites,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anilist_client::{StaffImage, StaffName};

    #[test]
    fn test_card_links_to_profile() {
        let staff = RosterStaff {
            id: 95185,
            name: StaffName {
                full: "Kana Hanazawa".to_string(),
                native: Some("花澤香菜".to_string()),
            },
            image: Some(StaffImage {
                large: Some("https://img.anili.st/kana.png".to_string()),
                medium: None,
            }),
            primary_occupations: Some(vec!["Voice Actor".to_string()]),
            favourites: Some(12000),
        };

        let card = Card::from(&staff);
        assert_eq!(card.href, "/seiyuu/95185");
        assert_eq!(card.native_name.as_deref(), Some("花澤香菜"));
        assert_eq!(card.image.as_deref(), Some("https://img.anili.st/kana.png"));
    }
}
