use super::*;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use leadgen_core::{EnrichConfig, PlacesConfig, ScraperConfig};
use leadgen_places::PlacesClient;
use leadgen_scraper::EmailScraper;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_app(server: &MockServer, max_requests: usize) -> Router {
    let places = PlacesClient::new(&PlacesConfig {
        base_url: server.uri(),
        request_timeout_secs: 5,
        ..PlacesConfig::new("test-key")
    })
    .expect("places client");
    let scraper = EmailScraper::new(&ScraperConfig::default()).expect("scraper");
    let enrich = EnrichConfig {
        inter_place_delay_ms: 0,
        post_scrape_delay_ms: 0,
        ..EnrichConfig::default()
    };
    let pipeline = Arc::new(LeadPipeline::new(places, scraper, enrich));
    build_app(
        AppState { pipeline },
        RateLimitState::new(max_requests, Duration::from_secs(60)),
    )
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn mount_search(server: &MockServer, places: Value) {
    Mock::given(method("POST"))
        .and(path("/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "places": places })))
        .mount(server)
        .await;
}

// -------------------------------------------------------------------------
// Envelope and helpers
// -------------------------------------------------------------------------

#[test]
fn api_error_codes_map_to_statuses() {
    let cases = [
        ("bad_request", StatusCode::BAD_REQUEST),
        ("upstream_error", StatusCode::BAD_GATEWAY),
        ("rate_limited", StatusCode::TOO_MANY_REQUESTS),
        ("internal_error", StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (code, expected) in cases {
        let response = ApiError::new("req-1", code, "msg").into_response();
        assert_eq!(response.status(), expected, "code {code}");
    }
}

#[test]
fn parse_limit_accepts_numbers_and_numeric_strings() {
    assert_eq!(parse_limit(None), None);
    assert_eq!(parse_limit(Some(&json!(5))), Some(5));
    assert_eq!(parse_limit(Some(&json!("7"))), Some(7));
    assert_eq!(parse_limit(Some(&json!(" 3 "))), Some(3));
    assert_eq!(parse_limit(Some(&json!(4.9))), Some(4));
    assert_eq!(parse_limit(Some(&json!(0))), Some(0));
}

#[test]
fn parse_limit_rejects_everything_else() {
    assert_eq!(parse_limit(Some(&json!("many"))), None);
    assert_eq!(parse_limit(Some(&json!(-2))), None);
    assert_eq!(parse_limit(Some(&json!(null))), None);
    assert_eq!(parse_limit(Some(&json!(true))), None);
    assert_eq!(parse_limit(Some(&json!([5]))), None);
}

#[test]
fn pipeline_errors_map_to_api_codes() {
    let missing = map_pipeline_error("r".into(), &PipelineError::MissingParameter("query"));
    assert_eq!(missing.error.code, "bad_request");
    assert_eq!(missing.error.message, "missing required parameter: query");

    let upstream = map_pipeline_error(
        "r".into(),
        &PipelineError::Places(leadgen_places::PlacesError::Api {
            status: 403,
            message: "denied".into(),
            retry_after_secs: None,
        }),
    );
    assert_eq!(upstream.error.code, "upstream_error");
    assert_eq!(upstream.error.message, "places API error (403): denied");
}

// -------------------------------------------------------------------------
// Routes
// -------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_ok_with_request_id() {
    let server = MockServer::start().await;
    let response = test_app(&server, 10)
        .oneshot(get("/api/health"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header")
        .to_string();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["meta"]["request_id"], request_id.as_str());
}

#[tokio::test]
async fn incoming_request_id_is_propagated() {
    let server = MockServer::start().await;
    let request = Request::builder()
        .uri("/api/health")
        .header("x-request-id", "req-abc")
        .body(Body::empty())
        .unwrap();
    let response = test_app(&server, 10).oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "req-abc"
    );
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let server = MockServer::start().await;
    let request = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = test_app(&server, 10).oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn find_without_query_is_bad_request() {
    let server = MockServer::start().await;
    let (status, json) = send(test_app(&server, 10), get("/api/find")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
    assert_eq!(json["error"]["message"], "missing required parameter: query");
    assert!(json["meta"]["request_id"].is_string());
    assert_eq!(server.received_requests().await.map_or(0, |r| r.len()), 0);
}

#[tokio::test]
async fn find_returns_best_match() {
    let server = MockServer::start().await;
    mount_search(&server, json!([{ "id": "best" }])).await;

    let (status, json) = send(test_app(&server, 10), get("/api/find?query=aceros%20le%C3%B3n")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["place_id"], "best");
}

#[tokio::test]
async fn find_without_hits_returns_null_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let (status, json) = send(test_app(&server, 10), get("/api/find?query=nada")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["data"]["place_id"].is_null());
}

#[tokio::test]
async fn search_text_honors_limit_and_defaults_bad_values() {
    let server = MockServer::start().await;
    let places: Vec<_> = (0..30).map(|i| json!({ "id": format!("p{i}") })).collect();
    mount_search(&server, json!(places)).await;

    let (status, json) = send(test_app(&server, 10), get("/api/searchText?query=x&limit=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["results"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["results"][0]["place_id"], "p0");

    let (_, json) = send(test_app(&server, 10), get("/api/searchText?query=x&limit=abc")).await;
    assert_eq!(json["data"]["results"].as_array().unwrap().len(), 20);

    let (_, json) = send(test_app(&server, 10), get("/api/searchText?query=x")).await;
    assert_eq!(json["data"]["results"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn search_text_provider_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/places:searchText"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "API key not valid." }
        })))
        .mount(&server)
        .await;

    let (status, json) = send(test_app(&server, 10), get("/api/searchText?query=x")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "upstream_error");
    assert_eq!(
        json["error"]["message"],
        "places API error (403): API key not valid."
    );
}

#[tokio::test]
async fn details_returns_lead_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/places/place-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "place-1",
            "displayName": { "text": "Aceros León" },
            "nationalPhoneNumber": "477 123 4567"
        })))
        .mount(&server)
        .await;

    let (status, json) = send(test_app(&server, 10), get("/api/details?place_id=place-1")).await;
    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["place_id"], "place-1");
    assert_eq!(data["name"], "Aceros León");
    assert_eq!(data["phone_link"], "tel:4771234567");
    assert!(data["website"].is_null());
    assert_eq!(data["emails"], json!([]));
    assert!(data.get("query").is_none());
}

#[tokio::test]
async fn details_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/places/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": 404, "message": "Requested entity was not found." }
        })))
        .mount(&server)
        .await;

    let (status, json) = send(test_app(&server, 10), get("/api/details?place_id=missing")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        json["error"]["message"],
        "places API error (404): Requested entity was not found."
    );
}

#[tokio::test]
async fn details_without_place_id_is_bad_request() {
    let server = MockServer::start().await;
    let (status, json) = send(test_app(&server, 10), get("/api/details")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "missing required parameter: place_id");
}

#[tokio::test]
async fn enrich_text_accepts_string_limit() {
    let server = MockServer::start().await;
    mount_search(&server, json!([{ "id": "a" }, { "id": "b" }, { "id": "c" }])).await;
    for id in ["a", "b", "c"] {
        Mock::given(method("GET"))
            .and(path(format!("/places/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": id })))
            .mount(&server)
            .await;
    }

    let (status, json) = send(
        test_app(&server, 10),
        post_json("/api/enrichText", &json!({ "query": "tornillos", "limit": "2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let results = json["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["query"], "tornillos");
    assert_eq!(results[1]["place_id"], "b");
    assert!(results[1]["error_message"].is_null());
}

#[tokio::test]
async fn enrich_text_without_query_is_bad_request() {
    let server = MockServer::start().await;
    let (status, json) = send(
        test_app(&server, 10),
        post_json("/api/enrichText", &json!({ "limit": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn enrich_text_malformed_body_is_bad_request() {
    let server = MockServer::start().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/enrichText")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = send(test_app(&server, 10), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn rate_limit_rejects_excess_requests() {
    let server = MockServer::start().await;
    mount_search(&server, json!([{ "id": "a" }])).await;
    let app = test_app(&server, 1);

    let (first, _) = send(app.clone(), get("/api/find?query=x")).await;
    assert_eq!(first, StatusCode::OK);

    let request = Request::builder()
        .uri("/api/find?query=x")
        .header("x-request-id", "req-throttled")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "req-throttled"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "rate_limited");
    assert_eq!(json["meta"]["request_id"], "req-throttled");
    assert!(json["meta"]["timestamp"].is_string());
}

#[tokio::test]
async fn zero_budget_rejects_with_error_envelope() {
    let server = MockServer::start().await;
    let (status, json) = send(test_app(&server, 0), get("/api/find?query=x")).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "rate_limited");
    assert!(json["meta"]["request_id"].is_string());
    assert_eq!(server.received_requests().await.map_or(0, |r| r.len()), 0);
}

#[tokio::test]
async fn health_is_not_rate_limited() {
    let server = MockServer::start().await;
    let app = test_app(&server, 0);
    let (status, _) = send(app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
}
