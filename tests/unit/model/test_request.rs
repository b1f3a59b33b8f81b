use crisp_api::model::request::{QueryParams, QueryValue, RestRequest};
use reqwest::Method;
use serde_json::json;

#[test]
fn test_query_value_predicates() {
    assert!(1.5_f64.is_present());
    assert!(0_u32.is_present());
    assert!("fr".is_present());
    assert!(!"".is_present());
    assert!(!String::new().is_present());
    assert!(!f64::INFINITY.is_present());
    assert!(!f64::NAN.is_present());
    assert_eq!(1.5_f64.to_query_string(), "1.5");
    assert_eq!(10_i64.to_query_string(), "10");
}

#[test]
fn test_query_params_serialize_as_flat_map() {
    let query = QueryParams::new()
        .with("type", "visitor")
        .with_opt("center_radius", Some(100.0_f64))
        .with_opt::<f64>("center_latitude", None);

    assert_eq!(
        serde_json::to_value(&query).unwrap(),
        json!({"type": "visitor", "center_radius": "100"})
    );
}

#[test]
fn test_insert_overwrites_existing_key() {
    let mut query = QueryParams::new();
    query.insert("page", 1).insert("page", 2);
    assert_eq!(query.get("page"), Some("2"));
    assert_eq!(query.len(), 1);
}

#[test]
fn test_rest_request_builders() {
    let request = RestRequest::new(Method::PATCH, "website/1/batch/read")
        .with_query(Some(QueryParams::new().with("a", "b")))
        .with_body(Some(json!({"sessions": []})));

    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.path, "website/1/batch/read");
    assert_eq!(request.query.unwrap().get("a"), Some("b"));
    assert_eq!(request.body, Some(json!({"sessions": []})));
}

#[test]
fn test_identical_builds_are_equal() {
    let build = || {
        RestRequest::new(Method::GET, "website/1/visitors/map").with_query(Some(
            QueryParams::new()
                .with_opt("center_longitude", Some(2.35))
                .with_opt("center_latitude", Some(48.85)),
        ))
    };
    assert_eq!(build(), build());
}
