/// AniList staff records as returned by the GraphQL API
use serde::{Deserialize, Serialize};

/// AniList staff identifier
pub type StaffId = i64;

/// Occupation string AniList uses for voice actors
pub const VOICE_ACTOR_OCCUPATION: &str = "Voice Actor";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffName {
    pub full: String,
    #[serde(default)]
    pub native: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffImage {
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
}

/// Partial date: AniList leaves any component null when unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl FuzzyDate {
    pub fn is_known(&self) -> bool {
        self.year.is_some()
    }

    /// `YYYY-MM-DD`, truncated at the first unknown component.
    /// Returns `"Unknown"` without a year.
    pub fn display(&self) -> String {
        let Some(year) = self.year else {
            return "Unknown".to_string();
        };
        match (self.month, self.day) {
            (Some(month), Some(day)) => format!("{}-{:02}-{:02}", year, month, day),
            (Some(month), None) => format!("{}-{:02}", year, month),
            (None, _) => year.to_string(),
        }
    }
}

/// Lightweight staff record (name + occupations)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffSummary {
    pub id: StaffId,
    pub name: StaffName,
    #[serde(default)]
    pub primary_occupations: Option<Vec<String>>,
}

impl StaffSummary {
    pub fn occupations(&self) -> &[String] {
        self.primary_occupations.as_deref().unwrap_or_default()
    }

    pub fn is_voice_actor(&self) -> bool {
        has_voice_actor(self.occupations())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterName {
    pub full: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterNode {
    pub id: i64,
    pub name: CharacterName,
    #[serde(default)]
    pub image: Option<StaffImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterConnection {
    #[serde(default)]
    pub nodes: Vec<CharacterNode>,
}

/// Full staff profile used by the voice-actor detail screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffProfile {
    pub id: StaffId,
    pub name: StaffName,
    #[serde(default)]
    pub image: Option<StaffImage>,
    #[serde(default)]
    pub home_town: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<FuzzyDate>,
    #[serde(default)]
    pub date_of_death: Option<FuzzyDate>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub primary_occupations: Option<Vec<String>>,
    #[serde(default)]
    pub characters: Option<CharacterConnection>,
}

impl StaffProfile {
    pub fn occupations(&self) -> &[String] {
        self.primary_occupations.as_deref().unwrap_or_default()
    }

    pub fn is_voice_actor(&self) -> bool {
        has_voice_actor(self.occupations())
    }

    pub fn characters(&self) -> &[CharacterNode] {
        self.characters
            .as_ref()
            .map(|c| c.nodes.as_slice())
            .unwrap_or_default()
    }
}

/// One entry of a favourites-ordered staff page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStaff {
    pub id: StaffId,
    pub name: StaffName,
    #[serde(default)]
    pub image: Option<StaffImage>,
    #[serde(default)]
    pub primary_occupations: Option<Vec<String>>,
    #[serde(default)]
    pub favourites: Option<i64>,
}

impl RosterStaff {
    pub fn is_voice_actor(&self) -> bool {
        has_voice_actor(self.primary_occupations.as_deref().unwrap_or_default())
    }
}

fn has_voice_actor(occupations: &[String]) -> bool {
    occupations.iter().any(|o| o == VOICE_ACTOR_OCCUPATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_date_display() {
        let full = FuzzyDate {
            year: Some(1987),
            month: Some(3),
            day: Some(7),
        };
        assert_eq!(full.display(), "1987-03-07");

        let partial = FuzzyDate {
            year: Some(1990),
            month: Some(11),
            day: None,
        };
        assert_eq!(partial.display(), "1990-11");

        assert_eq!(FuzzyDate::default().display(), "Unknown");
        assert!(!FuzzyDate::default().is_known());
    }

    #[test]
    fn test_summary_deserializes_null_occupations() {
        let json = r#"{"id": 5, "name": {"full": "Someone", "native": null}, "primaryOccupations": null}"#;
        let summary: StaffSummary = serde_json::from_str(json).unwrap();
        assert!(summary.occupations().is_empty());
        assert!(!summary.is_voice_actor());
    }

    #[test]
    fn test_voice_actor_requires_exact_occupation() {
        let summary = StaffSummary {
            id: 1,
            name: StaffName {
                full: "Kana Hanazawa".to_string(),
                native: None,
            },
            primary_occupations: Some(vec!["Singer".to_string(), "Voice Actor".to_string()]),
        };
        assert!(summary.is_voice_actor());

        let director = StaffSummary {
            primary_occupations: Some(vec!["Director".to_string(), "voice actor".to_string()]),
            ..summary
        };
        assert!(!director.is_voice_actor());
    }
}
