use super::*;

fn test_config(base_url: &str) -> PlacesConfig {
    PlacesConfig {
        base_url: base_url.to_string(),
        ..PlacesConfig::new("test-key")
    }
}

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::new(&test_config(base_url)).expect("client construction should not fail")
}

#[test]
fn endpoint_appends_search_segment_to_versioned_base() {
    let client = test_client("https://places.googleapis.com/v1");
    let url = client.endpoint(&["places:searchText"]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://places.googleapis.com/v1/places:searchText"
    );
}

#[test]
fn endpoint_tolerates_trailing_slash() {
    let client = test_client("https://places.googleapis.com/v1/");
    let url = client.endpoint(&["places", "ChIJ-abc"]).unwrap();
    assert_eq!(url.as_str(), "https://places.googleapis.com/v1/places/ChIJ-abc");
}

#[test]
fn endpoint_percent_encodes_place_id() {
    let client = test_client("http://127.0.0.1:8080");
    let url = client.endpoint(&["places", "a/b c"]).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8080/places/a%2Fb%20c");
}

#[test]
fn new_rejects_invalid_base_url() {
    let result = PlacesClient::new(&test_config("not a url"));
    assert!(
        matches!(result, Err(PlacesError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn new_rejects_cannot_be_a_base_url() {
    let result = PlacesClient::new(&test_config("mailto:places@example.com"));
    assert!(
        matches!(result, Err(PlacesError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn api_error_message_reads_provider_envelope() {
    let body = r#"{"error":{"code":403,"message":"API key not valid.","status":"PERMISSION_DENIED"}}"#;
    assert_eq!(
        api_error_message(body, StatusCode::FORBIDDEN),
        "API key not valid."
    );
}

#[test]
fn api_error_message_falls_back_to_status_field() {
    let body = r#"{"error":{"code":404,"status":"NOT_FOUND"}}"#;
    assert_eq!(api_error_message(body, StatusCode::NOT_FOUND), "NOT_FOUND");
}

#[test]
fn api_error_message_falls_back_to_reason_phrase() {
    assert_eq!(
        api_error_message("<html>bad gateway</html>", StatusCode::BAD_GATEWAY),
        "Bad Gateway"
    );
}

#[test]
fn field_masks_match_provider_contract() {
    assert_eq!(DETAIL_FIELD_MASK.split(',').count(), 9);
    assert_eq!(SEARCH_FIELD_MASK.split(',').count(), 5);
    assert!(SEARCH_FIELD_MASK
        .split(',')
        .all(|field| field.starts_with("places.")));
    assert_eq!(FIND_FIELD_MASK, "places.id");
}
