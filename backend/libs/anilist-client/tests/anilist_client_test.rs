//! Integration Tests: AniList client against a mocked GraphQL endpoint
//!
//! Coverage:
//! - Staff summary / profile decoding
//! - "Not found" detection (null Staff, 404 GraphQL error)
//! - Upstream failures surface as errors
//! - Roster pages past the end are empty
//! - Raw request forwarding

use anilist_client::{AniListClient, AniListConfig, AniListError, StaffDirectory};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AniListClient {
    AniListClient::new(&AniListConfig {
        endpoint: server.uri(),
        timeout: Duration::from_secs(5),
    })
    .expect("client builds")
}

#[tokio::test]
async fn summary_returns_voice_actor() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "variables": { "id": 95185 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "Staff": {
                    "id": 95185,
                    "name": { "full": "Kana Hanazawa", "native": "花澤香菜" },
                    "primaryOccupations": ["Voice Actor", "Singer"]
                }
            }
        })))
        .mount(&server)
        .await;

    let staff = client_for(&server)
        .staff_summary(95185)
        .await
        .unwrap()
        .expect("staff present");

    assert_eq!(staff.name.full, "Kana Hanazawa");
    assert!(staff.is_voice_actor());
}

#[tokio::test]
async fn summary_not_found_via_graphql_404() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{ "message": "Not Found.", "status": 404 }],
            "data": { "Staff": null }
        })))
        .mount(&server)
        .await;

    let staff = client_for(&server).staff_summary(1).await.unwrap();
    assert!(staff.is_none());
}

#[tokio::test]
async fn summary_not_found_via_null_staff() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "Staff": null } })),
        )
        .mount(&server)
        .await;

    assert!(client_for(&server).staff_summary(2).await.unwrap().is_none());
}

#[tokio::test]
async fn rate_limit_error_is_not_treated_as_missing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "errors": [{ "message": "Too Many Requests.", "status": 429 }],
            "data": null
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).staff_summary(3).await.unwrap_err();
    assert!(matches!(err, AniListError::Graphql(msg) if msg.contains("Too Many Requests")));
}

#[tokio::test]
async fn non_json_server_error_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server).staff_profile(4).await.unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err, AniListError::Status { status: 502, .. }));
}

#[tokio::test]
async fn profile_decodes_dates_and_characters() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "Staff": {
                    "id": 95185,
                    "name": { "full": "Kana Hanazawa", "native": "花澤香菜" },
                    "homeTown": "Tokyo, Japan",
                    "image": { "large": "https://img.anili.st/kana.png" },
                    "dateOfBirth": { "year": 1989, "month": 2, "day": 25 },
                    "dateOfDeath": { "year": null, "month": null, "day": null },
                    "age": 36,
                    "primaryOccupations": ["Voice Actor"],
                    "characters": {
                        "nodes": [
                            { "id": 1, "name": { "full": "Mayuri Shiina" }, "image": { "medium": "m.png" } }
                        ]
                    }
                }
            }
        })))
        .mount(&server)
        .await;

    let profile = client_for(&server)
        .staff_profile(95185)
        .await
        .unwrap()
        .expect("profile present");

    assert_eq!(profile.home_town.as_deref(), Some("Tokyo, Japan"));
    assert_eq!(profile.date_of_birth.unwrap().display(), "1989-02-25");
    assert!(!profile.date_of_death.unwrap().is_known());
    assert_eq!(profile.characters().len(), 1);
    assert_eq!(profile.age, Some(36));
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "variables": { "page": 9999, "perPage": 25 } })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "Page": { "staff": [] } } })),
        )
        .mount(&server)
        .await;

    let page = client_for(&server).staff_page(9999, 25).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn forward_relays_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "query": "{ Viewer { id } }" })))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"errors":[]}"#))
        .mount(&server)
        .await;

    let (status, body) = client_for(&server)
        .forward(br#"{"query":"{ Viewer { id } }"}"#.to_vec())
        .await
        .unwrap();

    assert_eq!(status, 401);
    assert_eq!(body, br#"{"errors":[]}"#.to_vec());
}
