// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use xsrf_fetch::http::{DEFAULT_XSRF_COOKIE, DEFAULT_XSRF_HEADER};
use xsrf_fetch::{
    extract_token, get, post, put, Body, CookieSource, Error, Expect, HttpClient, Method, Payload,
    RequestSpec,
};

#[tokio::test]
async fn get_carries_token_from_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/me"))
        .and(header("x-xsrf-token", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "ada" })))
        .expect(1)
        .mount(&server)
        .await;

    let cookies = CookieSource::from("A=1;XSRF-TOKEN=abc123;B=2");
    let token = extract_token(DEFAULT_XSRF_COOKIE, &cookies);
    let request = get(
        format!("{}/api/me", server.uri()),
        Expect::Json,
        DEFAULT_XSRF_HEADER,
        token,
    );

    let client = HttpClient::new().unwrap();
    let payload = client.send(request).await.unwrap();
    assert_eq!(payload, Payload::Json(json!({ "name": "ada" })));
}

#[tokio::test]
async fn missing_token_still_sends_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_exists("x-xsrf-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let cookies = CookieSource::from(json!({ "other": "field" }));
    let token = extract_token(DEFAULT_XSRF_COOKIE, &cookies);
    assert_eq!(token, None);

    let client = HttpClient::new().unwrap();
    let payload = client
        .send(get(server.uri(), Expect::Whatever, DEFAULT_XSRF_HEADER, token))
        .await
        .unwrap();
    assert_eq!(payload, Payload::Empty);
}

#[tokio::test]
async fn post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .and(header("x-xsrf-token", "t0k"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "title": "draft" })))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap();
    let request = post(
        format!("{}/posts", server.uri()),
        Body::json(&json!({ "title": "draft" })).unwrap(),
        Expect::Text,
        DEFAULT_XSRF_HEADER,
        Some("t0k".to_string()),
    );

    let payload = client.send(request).await.unwrap();
    assert_eq!(payload.as_text(), Some("created"));
}

#[tokio::test]
async fn put_with_extra_headers() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/posts/1"))
        .and(header("x-xsrf-token", "t0k"))
        .and(header("x-request-id", "42"))
        .and(header("content-type", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap();
    let request = RequestSpec::new(
        Method::PUT,
        format!("{}/posts/1", server.uri()),
        DEFAULT_XSRF_HEADER,
        Some("t0k".to_string()),
    )
    .header("x-request-id", "42")
    .body(Body::text("text/plain", "hello"))
    .expect(Expect::Json)
    .build();

    #[derive(serde::Deserialize)]
    struct Created {
        id: u32,
    }

    let created: Created = client.send(request).await.unwrap().decode().unwrap();
    assert_eq!(created.id, 1);

    let plain = put(
        format!("{}/posts/1", server.uri()),
        Body::Empty,
        Expect::Whatever,
        DEFAULT_XSRF_HEADER,
        None,
    );
    assert!(plain.body.is_empty());
}

#[tokio::test]
async fn bad_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("invalid xsrf token"))
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap();
    let request = get(server.uri(), Expect::Text, DEFAULT_XSRF_HEADER, None);

    let err = client.send(request.clone()).await.unwrap_err();
    assert_eq!(err.status_code(), Some(403));
    assert!(err.is_client_error());

    // The raw response stays available through execute
    let response = client.execute(request).await.unwrap();
    assert_eq!(response.status_code(), 403);
    assert_eq!(response.text().unwrap(), "invalid xsrf token");
}

#[tokio::test]
async fn request_timeout_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap();
    let request = RequestSpec::new(Method::GET, server.uri(), DEFAULT_XSRF_HEADER, None)
        .timeout(Duration::from_millis(100))
        .build();

    let err = client.send(request).await.unwrap_err();
    assert!(err.is_timeout(), "unexpected error: {err}");
    assert!(matches!(err, Error::Timeout { duration_ms: 100, .. }));
}

#[tokio::test]
async fn tracker_cancels_in_flight_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap();
    let request = RequestSpec::new(Method::GET, server.uri(), DEFAULT_XSRF_HEADER, None)
        .tracker("slow")
        .build();

    let (result, cancelled) = tokio::join!(client.send(request), async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(client.in_flight(), 1);
        client.cancel("slow")
    });

    assert!(cancelled);
    let err = result.unwrap_err();
    assert!(err.is_cancelled());
    assert_eq!(client.in_flight(), 0);
}

#[tokio::test]
async fn finished_requests_leave_no_tracker() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap();
    let request = RequestSpec::new(Method::GET, server.uri(), DEFAULT_XSRF_HEADER, None)
        .tracker("quick")
        .build();

    client.send(request).await.unwrap();
    assert_eq!(client.in_flight(), 0);
    assert!(!client.cancel("quick"));
}

#[tokio::test]
async fn dropped_requests_leave_no_tracker() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap();
    for _ in 0..3 {
        let request = RequestSpec::new(Method::GET, server.uri(), DEFAULT_XSRF_HEADER, None)
            .tracker("abandoned")
            .build();

        let outcome = tokio::time::timeout(Duration::from_millis(100), client.send(request)).await;
        assert!(outcome.is_err());
    }

    assert_eq!(client.in_flight(), 0);
    assert!(!client.cancel("abandoned"));
}
