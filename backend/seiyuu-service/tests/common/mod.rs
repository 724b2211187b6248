//! Shared fixtures: a scripted staff directory and gateway builders
#![allow(dead_code)]

use anilist_client::{
    AniListError, RosterStaff, StaffDirectory, StaffId, StaffImage, StaffName, StaffProfile,
    StaffSummary,
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use seiyuu_service::db::InMemoryPostStore;
use seiyuu_service::models::Post;
use seiyuu_service::{Gateway, GatewaySettings};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-process stand-in for AniList
#[derive(Default)]
pub struct FakeStaffDirectory {
    staff: Mutex<HashMap<StaffId, StaffProfile>>,
    roster: Mutex<Vec<RosterStaff>>,
    failing: Mutex<HashSet<StaffId>>,
    summary_calls: AtomicUsize,
}

impl FakeStaffDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_staff(self, id: StaffId, name: &str, occupations: &[&str]) -> Self {
        self.staff
            .lock()
            .unwrap()
            .insert(id, profile(id, name, occupations));
        self
    }

    pub fn with_roster(self, entries: Vec<RosterStaff>) -> Self {
        *self.roster.lock().unwrap() = entries;
        self
    }

    /// Lookups for `id` fail as if AniList were unreachable
    pub fn failing_for(self, id: StaffId) -> Self {
        self.failing.lock().unwrap().insert(id);
        self
    }

    pub fn summary_calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
    }

    fn check(&self, id: StaffId) -> anilist_client::Result<()> {
        if self.failing.lock().unwrap().contains(&id) {
            return Err(AniListError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StaffDirectory for FakeStaffDirectory {
    async fn staff_summary(&self, id: StaffId) -> anilist_client::Result<Option<StaffSummary>> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        self.check(id)?;
        Ok(self.staff.lock().unwrap().get(&id).map(|p| StaffSummary {
            id: p.id,
            name: p.name.clone(),
            primary_occupations: p.primary_occupations.clone(),
        }))
    }

    async fn staff_profile(&self, id: StaffId) -> anilist_client::Result<Option<StaffProfile>> {
        self.check(id)?;
        Ok(self.staff.lock().unwrap().get(&id).cloned())
    }

    async fn staff_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> anilist_client::Result<Vec<RosterStaff>> {
        let start = ((page.max(1) - 1) * per_page) as usize;
        Ok(self
            .roster
            .lock()
            .unwrap()
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect())
    }
}

pub fn profile(id: StaffId, name: &str, occupations: &[&str]) -> StaffProfile {
    StaffProfile {
        id,
        name: StaffName {
            full: name.to_string(),
            native: None,
        },
        image: Some(StaffImage {
            large: Some(format!("https://img.example/{}.png", id)),
            medium: None,
        }),
        home_town: Some("Tokyo, Japan".to_string()),
        date_of_birth: None,
        date_of_death: None,
        age: None,
        primary_occupations: Some(occupations.iter().map(|o| o.to_string()).collect()),
        characters: None,
    }
}

pub fn roster_entry(id: StaffId, name: &str, occupations: &[&str]) -> RosterStaff {
    RosterStaff {
        id,
        name: StaffName {
            full: name.to_string(),
            native: None,
        },
        image: None,
        primary_occupations: Some(occupations.iter().map(|o| o.to_string()).collect()),
        favourites: Some(1000 - id),
    }
}

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap()
}

pub fn post(id: i64, title: &str, seiyuu: i64, created_at: DateTime<Utc>, upvotes: i64) -> Post {
    Post {
        id,
        title: title.to_string(),
        user: "Ann".to_string(),
        seiyuu,
        content: None,
        image: None,
        video: None,
        created_at,
        upvotes,
    }
}

pub fn gateway(store: Arc<InMemoryPostStore>, staff: Arc<FakeStaffDirectory>) -> Gateway {
    Gateway::new(store, staff, GatewaySettings::default())
}
