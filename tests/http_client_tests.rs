//! Integration tests for the HTTP client.
//!
//! These tests run the blocking client against a `wiremock` server and
//! verify the status-code contract: `204` as no content, `>= 400` as an
//! error, and everything else as decoded JSON.

use mailerlite::clients::{Headers, HttpClient, HttpError, HttpMethod, HttpResponse};
use mailerlite::{ApiKey, BaseUrl, MailerLiteConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_client(base_url: &str) -> HttpClient {
    let config = MailerLiteConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new(base_url).unwrap())
        .build()
        .unwrap();
    HttpClient::from_config(&config).unwrap()
}

/// Runs a blocking request on the blocking pool.
async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

// ============================================================================
// Status handling
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_success_returns_status_and_decoded_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/groups/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "News"})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let response = blocking(move || create_client(&uri).get("groups/1"))
        .await
        .unwrap();

    assert_eq!(
        response,
        HttpResponse::Json {
            code: 200,
            body: json!({"id": 1, "name": "News"})
        }
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_no_content_is_distinct_from_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/groups/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/groups/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let uri = server.uri();
    let (deleted, empty) = blocking(move || {
        let client = create_client(&uri);
        (client.delete("groups/1"), client.get("groups/2"))
    })
    .await;

    let deleted = deleted.unwrap();
    let empty = empty.unwrap();
    assert!(deleted.is_no_content());
    assert!(!empty.is_no_content());
    assert_eq!(empty.body(), Some(&json!({})));
    assert_ne!(deleted, empty);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_statuses_always_fail_with_response_error() {
    let server = MockServer::start().await;
    for code in [400_u16, 401, 404, 422, 500] {
        Mock::given(method("GET"))
            .and(path(format!("/status/{code}")))
            .respond_with(
                ResponseTemplate::new(code)
                    .set_body_json(json!({"error": {"code": code, "message": "failed"}})),
            )
            .mount(&server)
            .await;
    }

    let uri = server.uri();
    let results = blocking(move || {
        let client = create_client(&uri);
        [400_u16, 401, 404, 422, 500]
            .into_iter()
            .map(|code| (code, client.get(&format!("status/{code}"))))
            .collect::<Vec<_>>()
    })
    .await;

    for (code, result) in results {
        match result {
            Err(HttpError::Response(error)) => {
                assert_eq!(error.code, code);
                assert!(error.message.contains("failed"));
            }
            other => panic!("Expected a response error for {code}, got {other:?}"),
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_is_a_plain_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/webhooks/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = blocking(move || create_client(&uri).get("webhooks/99")).await;

    let error = result.unwrap_err();
    assert_eq!(error.status(), Some(404));
    assert!(matches!(error, HttpError::Response(ref e) if e.is_not_found() && e.message == "Not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_success_body_decodes_to_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/campaigns/1/actions/cancel"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let uri = server.uri();
    let response = blocking(move || create_client(&uri).post("campaigns/1/actions/cancel", None))
        .await
        .unwrap();

    assert_eq!(response.code(), 200);
    assert_eq!(response.body(), Some(&serde_json::Value::Null));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_undecodable_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = blocking(move || create_client(&uri).get("stats")).await;

    assert!(matches!(result, Err(HttpError::Decode(_))));
}

// ============================================================================
// Request construction
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_credential_headers_and_body_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/groups/5"))
        .and(header("x-mailerlite-apikey", "test-key"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let response = blocking(move || create_client(&uri).put("groups/5", &json!({"name": "Renamed"})))
        .await
        .unwrap();

    assert_eq!(response.into_body(), json!({"id": 5}));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_custom_headers_are_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("x-mailerlite-apikey", "from-json"))
        .and(header("x-mailerlite-apidocs", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"account": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let response = blocking(move || {
        let headers = Headers::from_json(&json!({
            "Content-Type": "application/json",
            "X-MailerLite-ApiKey": "from-json",
            "X-MailerLite-ApiDocs": "true",
        }))
        .unwrap();
        let config = MailerLiteConfig::builder()
            .api_key(ApiKey::new("unused").unwrap())
            .base_url(BaseUrl::new(uri).unwrap())
            .build()
            .unwrap();
        HttpClient::new(headers, Some(&config)).unwrap().get("me")
    })
    .await;

    assert!(response.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_request_raw_accepts_lowercase_methods() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/fields/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let response = blocking(move || {
        create_client(&uri).request_raw("patch", "/fields/3", Some(&json!({"title": "T"})))
    })
    .await
    .unwrap();

    assert_eq!(response.code(), 200);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_method_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = blocking(move || create_client(&uri).request_raw("HEAD", "groups", None)).await;

    assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    assert_eq!(HttpMethod::ALL.len(), 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_transport_failure_is_a_network_error() {
    // Nothing listens on port 1.
    let result = blocking(|| create_client("http://127.0.0.1:1").get("groups")).await;

    assert!(matches!(result, Err(HttpError::Network(_))));
}
