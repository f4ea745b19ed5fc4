use std::time::Duration;

use launch_core::LaunchRecord;
use launch_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> FetchSettings {
    FetchSettings {
        base_url: server.uri(),
        ..FetchSettings::default()
    }
}

#[test]
fn default_url_targets_2020_launches() {
    let url = FetchSettings::default().launches_url().unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.spacexdata.com/v3/launches?launch_year=2020"
    );
}

#[test]
fn launches_url_tolerates_trailing_slash() {
    let settings = FetchSettings {
        base_url: "http://localhost:8080/api/".to_string(),
        launch_year: 2018,
        ..FetchSettings::default()
    };
    assert_eq!(
        settings.launches_url().unwrap().as_str(),
        "http://localhost:8080/api/launches?launch_year=2018"
    );
}

#[test]
fn launches_url_rejects_garbage_base() {
    let settings = FetchSettings {
        base_url: "not a url".to_string(),
        ..FetchSettings::default()
    };
    assert_eq!(
        settings.launches_url().unwrap_err().kind,
        FailureKind::InvalidUrl
    );
}

#[tokio::test]
async fn fetcher_returns_records_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launches"))
        .and(query_param("launch_year", "2020"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "1", "name": "A" },
            { "id": "2", "name": "B" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings_for(&server);
    let url = settings.launches_url().unwrap();
    let fetcher = ReqwestFetcher::new(settings);

    let records = fetcher.fetch_launches(url.as_str()).await.expect("fetch ok");
    assert_eq!(
        records,
        vec![
            LaunchRecord::new(json!({ "id": "1", "name": "A" })),
            LaunchRecord::new(json!({ "id": "2", "name": "B" })),
        ]
    );
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launches"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let settings = settings_for(&server);
    let url = settings.launches_url().unwrap();
    let fetcher = ReqwestFetcher::new(settings);

    let err = fetcher.fetch_launches(url.as_str()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert_eq!(err.message, "HTTP error! status: 404");
}

#[tokio::test]
async fn fetcher_rejects_non_array_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "nope" })))
        .mount(&server)
        .await;

    let settings = settings_for(&server);
    let url = settings.launches_url().unwrap();
    let fetcher = ReqwestFetcher::new(settings);

    let err = fetcher.fetch_launches(url.as_str()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn fetcher_reports_unreachable_host() {
    let settings = FetchSettings {
        base_url: "http://127.0.0.1:1".to_string(),
        ..FetchSettings::default()
    };
    let url = settings.launches_url().unwrap();

    let fetcher = ReqwestFetcher::new(settings);
    let err = fetcher.fetch_launches(url.as_str()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
    assert!(err.message.starts_with("error sending request"));
    assert!(
        err.message.to_lowercase().contains("connection refused"),
        "cause missing from {:?}",
        err.message
    );
}

#[tokio::test]
async fn fetcher_times_out_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launches"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..settings_for(&server)
    };
    let url = settings.launches_url().unwrap();
    let fetcher = ReqwestFetcher::new(settings);

    let err = fetcher.fetch_launches(url.as_str()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/launches"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("[1,2,3,4,5]"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: Some(10),
        ..settings_for(&server)
    };
    let url = settings.launches_url().unwrap();
    let fetcher = ReqwestFetcher::new(settings);

    let err = fetcher.fetch_launches(url.as_str()).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}
