// Every resource method hands back the transport's answer untouched

use crate::common::{RecordingTransport, Reply, WEBSITE_ID, not_found_envelope, website_with};
use crisp_api::prelude::*;
use reqwest::StatusCode;
use serde_json::Value;

/// Calls every resource method once and collects the raw outcome of each
async fn call_every_method(website: &Website) -> Vec<(&'static str, ApiResult<ApiResponse<Value>>)> {
    let metric = AnalyticsMetric::Campaign(CampaignPointMetric::Sent);
    let verify = WebsiteDeletionVerify::password("secret");
    let people = PeopleSelection::Profiles(vec!["people_1".to_string()]);
    let new_website = NewWebsite::new("Acme", "acme.com");

    vec![
        (
            "count_visitors",
            website.count_visitors(WEBSITE_ID).await.map(ApiResponse::cast),
        ),
        (
            "list_visitors",
            website.list_visitors(WEBSITE_ID, 1).await.map(ApiResponse::cast),
        ),
        (
            "pinpoint_visitors_on_map",
            website
                .pinpoint_visitors_on_map(WEBSITE_ID, Some(1.0), None, None)
                .await
                .map(ApiResponse::cast),
        ),
        (
            "get_session_identifier_from_token",
            website
                .get_session_identifier_from_token(WEBSITE_ID, "token")
                .await
                .map(ApiResponse::cast),
        ),
        (
            "count_blocked_visitors",
            website.count_blocked_visitors(WEBSITE_ID).await.map(ApiResponse::cast),
        ),
        (
            "count_blocked_visitors_in_rule",
            website
                .count_blocked_visitors_in_rule(WEBSITE_ID, "ip_range")
                .await
                .map(ApiResponse::cast),
        ),
        (
            "clear_blocked_visitors_in_rule",
            website
                .clear_blocked_visitors_in_rule(WEBSITE_ID, "ip_range")
                .await
                .map(ApiResponse::cast),
        ),
        (
            "acquire_analytics_points",
            website
                .acquire_analytics_points(
                    WEBSITE_ID,
                    metric,
                    "2024-01-01",
                    "2024-02-01",
                    "day",
                    AnalyticsPointsFilter::default(),
                )
                .await
                .map(ApiResponse::cast),
        ),
        (
            "list_analytics_filters",
            website
                .list_analytics_filters(WEBSITE_ID, 1, metric, "2024-01-01", "2024-02-01")
                .await
                .map(ApiResponse::cast),
        ),
        (
            "list_analytics_classifiers",
            website
                .list_analytics_classifiers(WEBSITE_ID, 1, metric, "2024-01-01", "2024-02-01")
                .await
                .map(ApiResponse::cast),
        ),
        (
            "get_website_availability_status",
            website
                .get_website_availability_status(WEBSITE_ID)
                .await
                .map(ApiResponse::cast),
        ),
        (
            "list_website_operator_availabilities",
            website
                .list_website_operator_availabilities(WEBSITE_ID)
                .await
                .map(ApiResponse::cast),
        ),
        (
            "create_website",
            website.create_website(&new_website).await.map(ApiResponse::cast),
        ),
        (
            "get_website",
            website.get_website(WEBSITE_ID).await.map(ApiResponse::cast),
        ),
        (
            "delete_website",
            website
                .delete_website(WEBSITE_ID, &verify)
                .await
                .map(ApiResponse::cast),
        ),
        (
            "abort_website_deletion",
            website.abort_website_deletion(WEBSITE_ID).await.map(ApiResponse::cast),
        ),
        (
            "batch_resolve_conversations",
            website
                .batch_resolve_conversations(WEBSITE_ID, &["session_1"])
                .await
                .map(ApiResponse::cast),
        ),
        (
            "batch_read_conversations",
            website
                .batch_read_conversations(WEBSITE_ID, &["session_1"])
                .await
                .map(ApiResponse::cast),
        ),
        (
            "batch_remove_conversations",
            website
                .batch_remove_conversations(WEBSITE_ID, &["session_1"])
                .await
                .map(ApiResponse::cast),
        ),
        (
            "batch_remove_people",
            website
                .batch_remove_people(WEBSITE_ID, &people)
                .await
                .map(ApiResponse::cast),
        ),
    ]
}

#[tokio::test]
async fn test_error_envelope_resolves_unchanged_for_every_method() {
    let transport = RecordingTransport::new(Reply::Envelope(not_found_envelope()));
    let website = website_with(&transport);

    let outcomes = call_every_method(&website).await;

    assert_eq!(outcomes.len(), transport.requests().len());
    for (name, outcome) in outcomes {
        let envelope = outcome.unwrap_or_else(|e| panic!("{name} rejected: {e}"));
        assert_eq!(envelope, not_found_envelope(), "{name} altered the envelope");
        assert!(envelope.is_error());
        assert_eq!(envelope.reason, "not_found");
    }
}

#[tokio::test]
async fn test_transport_failure_rejects_unchanged_for_every_method() {
    let transport =
        RecordingTransport::new(Reply::Failure(|| AppError::Unexpected(StatusCode::BAD_GATEWAY)));
    let website = website_with(&transport);

    for (name, outcome) in call_every_method(&website).await {
        match outcome {
            Err(AppError::Unexpected(status)) => assert_eq!(status, StatusCode::BAD_GATEWAY),
            other => panic!("{name} did not surface the transport error: {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_deserialization_failure_is_not_rewrapped() {
    let transport = RecordingTransport::new(Reply::Failure(|| {
        AppError::Deserialization("expected value at line 1 column 1".to_string())
    }));
    let website = website_with(&transport);

    let err = website.count_visitors(WEBSITE_ID).await.unwrap_err();

    match err {
        AppError::Deserialization(msg) => assert_eq!(msg, "expected value at line 1 column 1"),
        other => panic!("Unexpected error: {other:?}"),
    }
}
