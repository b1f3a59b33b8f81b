use crisp_api::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;
use tokio_test::block_on;

const WEBSITE_ID: &str = "8c842203-7ed8-4e29-a608-7cf78a7d2fcc";

fn create_website(server_url: &str) -> Website {
    let config =
        Config::with_credentials("test_identifier", "test_key", Tier::Plugin).with_base_url(server_url);
    Client::from_config(config).unwrap().website()
}

#[test]
fn test_list_visitors_end_to_end() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", format!("/website/{WEBSITE_ID}/visitors/list/2").as_str())
        .match_header("x-crisp-tier", "plugin")
        .with_status(200)
        .with_body(
            json!({
                "error": false,
                "reason": "resolved",
                "data": [
                    {"session_id": "session_1", "nickname": "Valerian"},
                    {"session_id": "session_2"}
                ]
            })
            .to_string(),
        )
        .create();

    let website = create_website(&server.url());
    let response = block_on(website.list_visitors(WEBSITE_ID, 2)).unwrap();

    mock.assert();
    let visitors = response.data().unwrap();
    assert_eq!(visitors.len(), 2);
    assert_eq!(visitors[0].nickname.as_deref(), Some("Valerian"));
}

#[test]
fn test_acquire_analytics_points_end_to_end() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", format!("/website/{WEBSITE_ID}/analytics/points").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "conversation".into()),
            Matcher::UrlEncoded("metric".into(), "segment".into()),
            Matcher::UrlEncoded("date_split".into(), "day".into()),
            Matcher::UrlEncoded("classifier".into(), "inbox".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "error": false,
                "reason": "resolved",
                "data": {
                    "pipeline": {"aggregator": "summation"},
                    "points": [{"value": 4.0, "hits": 4, "date": {"from": 1, "to": 2}}]
                }
            })
            .to_string(),
        )
        .create();

    let website = create_website(&server.url());
    let response = block_on(website.acquire_analytics_points(
        WEBSITE_ID,
        AnalyticsMetric::Conversation(ConversationPointMetric::Segment),
        "2026-10-01T00:00:00.000Z",
        "2026-10-08T00:00:00.000Z",
        "day",
        AnalyticsPointsFilter::default().with_classifier("inbox"),
    ))
    .unwrap();

    mock.assert();
    let points = response.data().unwrap();
    assert_eq!(points.pipeline.aggregator, Aggregator::Summation);
    assert_eq!(points.points[0].hits, 4);
}

#[test]
fn test_delete_website_sends_verification_body() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", format!("/website/{WEBSITE_ID}").as_str())
        .match_body(Matcher::Json(json!({
            "verify": {"method": "password", "secret": "hunter2"}
        })))
        .with_status(200)
        .with_body(r#"{"error":false,"reason":"deleted","data":{}}"#)
        .create();

    let website = create_website(&server.url());
    let response = block_on(
        website.delete_website(WEBSITE_ID, &WebsiteDeletionVerify::password("hunter2")),
    )
    .unwrap();

    mock.assert();
    assert_eq!(response.reason, "deleted");
    assert_eq!(response.data().unwrap(), Empty {});
}

#[test]
fn test_clear_blocked_visitors_error_envelope_passes_through() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", format!("/website/{WEBSITE_ID}/visitors/blocked/country").as_str())
        .with_status(403)
        .with_body(r#"{"error":true,"reason":"not_allowed","data":{}}"#)
        .create();

    let website = create_website(&server.url());
    let response = block_on(website.clear_blocked_visitors_in_rule(WEBSITE_ID, "country")).unwrap();

    mock.assert();
    assert!(response.is_error());
    assert_eq!(response.reason, "not_allowed");
}
