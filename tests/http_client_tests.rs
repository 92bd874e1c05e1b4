//! Integration tests for the HTTP layer: credential attachment and
//! response classification against a mock server.

use hubspot_contacts::clients::{HttpClient, HttpMethod, HttpRequest};
use hubspot_contacts::{ApiKey, BaseUrl, BearerToken, HttpError, HubspotConfig};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_key_config(server: &MockServer) -> HubspotConfig {
    HubspotConfig::builder()
        .api_key(ApiKey::new("demo").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn bearer_config(server: &MockServer) -> HubspotConfig {
    HubspotConfig::builder()
        .bearer_token(BearerToken::new("my-access-token").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_api_key_mode_sends_hapikey_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/v1/contact/vid/1/profile"))
        .and(query_param("hapikey", "demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"vid": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&api_key_config(&server));
    let request = HttpRequest::builder(HttpMethod::Get, "/contacts/v1/contact/vid/1/profile")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_bearer_mode_sends_authorization_header_and_no_hapikey() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/v1/contact/vid/1/profile"))
        .and(header("Authorization", "Bearer my-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"vid": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&bearer_config(&server));
    let request = HttpRequest::builder(HttpMethod::Get, "/contacts/v1/contact/vid/1/profile")
        .build()
        .unwrap();

    client.request(request).await.unwrap();

    let received = server.received_requests().await.unwrap();
    let query = received[0].url.query().unwrap_or_default();
    assert!(!query.contains("hapikey"));
}

#[tokio::test]
async fn test_non_2xx_response_is_a_request_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/v1/contact/vid/9999999/profile"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "error",
            "message": "contact does not exist",
        })))
        .mount(&server)
        .await;

    let client = HttpClient::new(&api_key_config(&server));
    let request = HttpRequest::builder(HttpMethod::Get, "/contacts/v1/contact/vid/9999999/profile")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    match error {
        HttpError::Response(e) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.body["message"], json!("contact does not exist"));
        }
        other => panic!("expected RequestError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_envelope_inside_200_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/v1/contact/vids/batch/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "batch lookup failed",
            "correlationId": "6d2a8c28-6322-4c37-bbbb-9b52f9e17f92",
        })))
        .mount(&server)
        .await;

    let client = HttpClient::new(&api_key_config(&server));
    let request = HttpRequest::builder(HttpMethod::Get, "/contacts/v1/contact/vids/batch/")
        .query_param("vid", "82325")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    match error {
        HttpError::Api(e) => {
            assert_eq!(e.code, 200);
            assert_eq!(e.message.as_deref(), Some("batch lookup failed"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_repeated_query_params_reach_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/v1/contact/vids/batch/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = HttpClient::new(&api_key_config(&server));
    let request = HttpRequest::builder(HttpMethod::Get, "/contacts/v1/contact/vids/batch/")
        .query_param("vid", "1")
        .query_param("vid", "2")
        .build()
        .unwrap();

    client.request(request).await.unwrap();

    let received = server.received_requests().await.unwrap();
    let query = received[0].url.query().unwrap_or_default();
    assert!(query.contains("vid=1"));
    assert!(query.contains("vid=2"));
}

#[tokio::test]
async fn test_non_json_error_body_is_preserved_as_raw_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/v1/contact/vid/1/profile"))
        .respond_with(
            ResponseTemplate::new(502)
                .set_body_string("<html>Bad Gateway: upstream timed out</html>"),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&api_key_config(&server));
    let request = HttpRequest::builder(HttpMethod::Get, "/contacts/v1/contact/vid/1/profile")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    match error {
        HttpError::Response(e) => {
            assert_eq!(e.code, 502);
            assert_eq!(
                e.body["raw_body"],
                json!("<html>Bad Gateway: upstream timed out</html>")
            );
        }
        other => panic!("expected RequestError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_response_body_parses_to_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/contacts/v1/contact/vid/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = HttpClient::new(&api_key_config(&server));
    let request = HttpRequest::builder(HttpMethod::Delete, "/contacts/v1/contact/vid/1")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_post_request_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contacts/v1/contact"))
        .and(wiremock::matchers::body_json(json!({
            "properties": [{"property": "email", "value": "a@b.com"}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"vid": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&api_key_config(&server));
    let request = HttpRequest::builder(HttpMethod::Post, "/contacts/v1/contact")
        .body(json!({"properties": [{"property": "email", "value": "a@b.com"}]}))
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}
