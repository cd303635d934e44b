// ABOUTME: Integration tests for the reqwest-backed OAuth 1.0a client against a mock provider
// ABOUTME: Covers token parsing, signed headers, form bodies and HTTP error mapping
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bodymedia_auth::oauth1::{OAuth1Client, OAuth1Config, OAuthClient, OAuthError, TokenParams};
use common::{mock_client, mock_options, CONSUMER_KEY};
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authorization_header(request: &wiremock::Request) -> String {
    request
        .headers
        .get("authorization")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned()
}

/// Test the request token call posts extra params as a form body
#[tokio::test]
async fn test_request_token_posts_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/request_token"))
        .and(body_string("api_key=123-456-789"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "oauth_token=rt&oauth_token_secret=rts&oauth_callback_confirmed=true",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server.uri());
    let params: TokenParams = [("api_key".to_owned(), CONSUMER_KEY.to_owned())].into();
    let creds = client.request_token(&params).await.unwrap();

    assert_eq!(creds.token, "rt");
    assert_eq!(creds.token_secret, "rts");
    assert!(creds.callback_confirmed());
}

/// Test the out-of-band callback is used when no callback URL is configured
#[tokio::test]
async fn test_request_token_out_of_band() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/request_token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("oauth_token=rt&oauth_token_secret=rts"),
        )
        .mount(&server)
        .await;

    let mut config = OAuth1Config::from(&mock_options(&server.uri()));
    config.callback_url = None;
    let client = OAuth1Client::new(config).unwrap();
    let creds = client.request_token(&TokenParams::new()).await.unwrap();
    assert!(!creds.callback_confirmed());

    let requests = server.received_requests().await.unwrap();
    assert!(authorization_header(&requests[0]).contains("oauth_callback=\"oob\""));
}

/// Test a token response without credentials is an invalid response
#[tokio::test]
async fn test_request_token_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/request_token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"error\":\"nope\"}"))
        .mount(&server)
        .await;

    let err = mock_client(&server.uri())
        .request_token(&TokenParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, OAuthError::InvalidResponse(_)));
}

/// Test the access token exchange keeps extra response parameters
#[tokio::test]
async fn test_access_token_extra_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "oauth_token=at&oauth_token_secret=ats&xoauth_token_expiration=3600",
        ))
        .mount(&server)
        .await;

    let creds = mock_client(&server.uri())
        .access_token("rt", "rts", "verifier")
        .await
        .unwrap();

    assert_eq!(creds.token, "at");
    assert_eq!(creds.token_secret, "ats");
    assert_eq!(
        creds.params.get("xoauth_token_expiration").map(String::as_str),
        Some("3600")
    );

    let requests = server.received_requests().await.unwrap();
    let header = authorization_header(&requests[0]);
    assert!(header.contains("oauth_token=\"rt\""));
    assert!(header.contains("oauth_verifier=\"verifier\""));
    assert!(header.contains("oauth_signature=\""));
}

/// Test a non-2xx token endpoint reply keeps status and body
#[tokio::test]
async fn test_access_token_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("oauth_problem=token_rejected"))
        .mount(&server)
        .await;

    let err = mock_client(&server.uri())
        .access_token("rt", "rts", "verifier")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(matches!(err, OAuthError::Http { body, .. } if body == "oauth_problem=token_rejected"));
}

/// Test signed resource requests return the body verbatim
#[tokio::test]
async fn test_get_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/user/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string("  raw body \n"))
        .mount(&server)
        .await;

    let body = mock_client(&server.uri())
        .get(&format!("{}/v2/user/info?api_key=k", server.uri()), "at", "ats")
        .await
        .unwrap();
    assert_eq!(body, "  raw body \n");
}

/// Test endpoint URLs with surrounding whitespace are accepted
#[test]
fn test_endpoint_whitespace_trimmed() {
    let config = OAuth1Config {
        access_token_url: " https://api.bodymedia.com/oauth/access_token".to_owned(),
        ..OAuth1Config::from(&mock_options("https://api.bodymedia.com"))
    };
    assert!(OAuth1Client::new(config).is_ok());
}
