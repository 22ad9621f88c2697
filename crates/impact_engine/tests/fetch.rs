use std::time::Duration;

use impact_core::Impact;
use impact_engine::{open_source, FailureKind, FetchSettings, HttpSource, ImpactSource};
use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"[
  {"id": 1, "entity": "WHO", "highlight": "WHO", "impact": "WHO trained 30,000 health workers"},
  {"id": 2, "entity": "UNICEF", "highlight": "", "impact": "Safe water for 20 million people"}
]"#;

#[tokio::test]
async fn fetches_and_decodes_impacts_below_base_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/un-impacts/data/impacts.json"))
        .and(header("cache-control", "no-store"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(BODY, "application/json"),
        )
        .mount(&server)
        .await;

    let base = format!("{}/un-impacts", server.uri());
    let source = HttpSource::from_base(&base, FetchSettings::default()).expect("valid base");
    assert_eq!(source.url().path(), "/un-impacts/data/impacts.json");
    assert_eq!(source.describe(), source.url().to_string());

    let impacts = source.load().await.expect("load ok");
    assert_eq!(
        impacts,
        vec![
            Impact::new(1, "WHO", "WHO", "WHO trained 30,000 health workers"),
            Impact::new(2, "UNICEF", "", "Safe water for 20 million people"),
        ]
    );
}

#[tokio::test]
async fn explicit_json_url_is_used_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feeds/latest.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(BODY, "application/json"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/feeds/latest.json", server.uri());
    let source = open_source(&url, FetchSettings::default()).expect("source");
    assert_eq!(source.describe(), url);
    assert_eq!(source.load().await.expect("load ok").len(), 2);
}

#[tokio::test]
async fn http_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/impacts.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = HttpSource::from_base(&server.uri(), FetchSettings::default()).unwrap();
    let err = source.load().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/impacts.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(BODY, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let source = HttpSource::from_base(&server.uri(), settings).unwrap();
    let err = source.load().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/impacts.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .insert_header("Content-Length", "11")
                .set_body_string("[         ]"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let source = HttpSource::from_base(&server.uri(), settings).unwrap();
    let err = source.load().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn html_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/impacts.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"),
        )
        .mount(&server)
        .await;

    let source = HttpSource::from_base(&server.uri(), FetchSettings::default()).unwrap();
    let err = source.load().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[test]
fn malformed_url_is_rejected() {
    let err = HttpSource::new("https://", FetchSettings::default()).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
