//! Endpoint wrapper tests: query construction over the wire and
//! validation short-circuits.

use cfbd_client::endpoints::{get_coaches, get_drives, CoachesQuery, DrivesQuery};
use cfbd_client::{ApiToken, CfbdClient, CfbdError, Season, SeasonType, TokenStore, Week};
use serde_json::json;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_token() -> ApiToken {
    let dir = TempDir::new().unwrap();
    let store = TokenStore::in_dir(dir.path());
    ApiToken::resolve_with_store(Some("test-token"), &store).unwrap()
}

#[test]
fn coaches_query_reaches_the_wire() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coaches"))
            .and(query_param("year", "2020"))
            .and(query_param("team", "Southern Mississippi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"first_name": "Jay", "last_name": "Hopson"}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        server
    });

    let client = CfbdClient::with_base_url(test_token(), server.uri()).unwrap();
    let query = CoachesQuery {
        season: Some(Season::new(2020).unwrap()),
        team: Some("Southern Mississippi".to_string()),
        ..Default::default()
    };
    let value = get_coaches(&client, &query).unwrap();
    assert_eq!(value[0]["last_name"], "Hopson");
}

#[test]
fn drives_query_reaches_the_wire() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/drives"))
            .and(query_param("seasonType", "postseason"))
            .and(query_param("year", "2021"))
            .and(query_param("week", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        server
    });

    let client = CfbdClient::with_base_url(test_token(), server.uri()).unwrap();
    let mut query = DrivesQuery::for_season(Season::new(2021).unwrap());
    query.season_type = SeasonType::Postseason;
    query.week = Some(Week::new(1).unwrap());
    assert!(get_drives(&client, &query).is_ok());
}

#[test]
fn invalid_coaches_query_never_hits_the_network() {
    // Unroutable base URL: a request attempt would fail with an HTTP error,
    // so an InvalidParam here proves validation ran first.
    let client = CfbdClient::with_base_url(test_token(), "http://127.0.0.1:1").unwrap();
    let err = get_coaches(&client, &CoachesQuery::default()).unwrap_err();
    assert!(matches!(err, CfbdError::InvalidParam { .. }));
}

#[test]
fn ambiguous_season_selection_is_invalid() {
    let client = CfbdClient::with_base_url(test_token(), "http://127.0.0.1:1").unwrap();
    let query = CoachesQuery {
        season: Some(Season::new(2020).unwrap()),
        min_season: Some(Season::new(2019).unwrap()),
        max_season: Some(Season::new(2022).unwrap()),
        ..Default::default()
    };
    let err = get_coaches(&client, &query).unwrap_err();
    assert!(matches!(err, CfbdError::InvalidParam { .. }));
}
