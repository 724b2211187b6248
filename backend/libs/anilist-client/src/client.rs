//! HTTP client for the AniList GraphQL endpoint
//!
//! Every request is a single POST of `{query, variables}`. AniList reports a
//! missing record either as `"Staff": null` or as a GraphQL error carrying
//! `status: 404` (with HTTP 404), so the body is decoded before the HTTP
//! status is judged.

use crate::error::{AniListError, Result};
use crate::models::{RosterStaff, StaffId, StaffProfile, StaffSummary};
use crate::queries::{STAFF_PAGE_QUERY, STAFF_PROFILE_QUERY, STAFF_SUMMARY_QUERY};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Public AniList GraphQL endpoint
pub const DEFAULT_ANILIST_ENDPOINT: &str = "https://graphql.anilist.co";

/// Read access to AniList staff records
#[async_trait]
pub trait StaffDirectory: Send + Sync {
    /// Name and primary occupations. `None` when AniList has no such staff.
    async fn staff_summary(&self, id: StaffId) -> Result<Option<StaffSummary>>;

    /// Full profile. `None` when AniList has no such staff.
    async fn staff_profile(&self, id: StaffId) -> Result<Option<StaffProfile>>;

    /// One favourites-ordered page of staff (1-based). Pages past the end are empty.
    async fn staff_page(&self, page: u32, per_page: u32) -> Result<Vec<RosterStaff>>;
}

#[derive(Debug, Clone)]
pub struct AniListConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for AniListConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ANILIST_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
    #[serde(default)]
    status: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct StaffData<T> {
    #[serde(rename = "Staff")]
    staff: Option<T>,
}

#[derive(Debug, Deserialize)]
struct PageData {
    #[serde(rename = "Page")]
    page: Option<PageStaff>,
}

#[derive(Debug, Deserialize)]
struct PageStaff {
    #[serde(default)]
    staff: Vec<RosterStaff>,
}

/// AniList client with a pooled `reqwest` connection
#[derive(Clone)]
pub struct AniListClient {
    http: Client,
    endpoint: String,
}

impl AniListClient {
    pub fn new(config: &AniListConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("seiyuu-hub/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Relay a raw GraphQL request body upstream and return the status and body untouched.
    pub async fn forward(&self, body: Vec<u8>) -> Result<(u16, Vec<u8>)> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        Ok((status, bytes.to_vec()))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<Option<T>> {
        debug!(endpoint = %self.endpoint, %variables, "AniList request");

        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        let parsed: GraphqlResponse<T> = match serde_json::from_slice(&body) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => return Err(AniListError::Decode(e.to_string())),
            Err(_) => {
                return Err(AniListError::Status {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                })
            }
        };

        if let Some(errors) = parsed.errors.filter(|errors| !errors.is_empty()) {
            if errors.iter().all(|e| e.status == Some(404)) {
                return Ok(None);
            }
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            return Err(AniListError::Graphql(messages.join("; ")));
        }

        if !status.is_success() {
            return Err(AniListError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(parsed.data)
    }
}

#[async_trait]
impl StaffDirectory for AniListClient {
    async fn staff_summary(&self, id: StaffId) -> Result<Option<StaffSummary>> {
        let data: Option<StaffData<StaffSummary>> =
            self.execute(STAFF_SUMMARY_QUERY, json!({ "id": id })).await?;
        Ok(data.and_then(|d| d.staff))
    }

    async fn staff_profile(&self, id: StaffId) -> Result<Option<StaffProfile>> {
        let data: Option<StaffData<StaffProfile>> =
            self.execute(STAFF_PROFILE_QUERY, json!({ "id": id })).await?;
        Ok(data.and_then(|d| d.staff))
    }

    async fn staff_page(&self, page: u32, per_page: u32) -> Result<Vec<RosterStaff>> {
        let data: Option<PageData> = self
            .execute(
                STAFF_PAGE_QUERY,
                json!({ "page": page, "perPage": per_page }),
            )
            .await?;
        Ok(data
            .and_then(|d| d.page)
            .map(|p| p.staff)
            .unwrap_or_default())
    }
}
