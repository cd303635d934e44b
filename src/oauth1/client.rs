// ABOUTME: Reqwest-backed OAuth 1.0a client for request, access and signed resource calls
// ABOUTME: Parses form-encoded token responses and maps HTTP failures to OAuthError
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::signer::{OAuthSigner, SigningContext};
use super::{OAuthClient, OAuthError, TokenCredentials, TokenParams};
use crate::http_client::shared_client;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

/// Callback value for out-of-band (no redirect) flows
pub const OUT_OF_BAND_CALLBACK: &str = "oob";

/// OAuth 1.0a client configuration
#[derive(Clone)]
pub struct OAuth1Config {
    /// Consumer key issued by the provider
    pub consumer_key: String,
    /// Consumer secret issued by the provider
    pub consumer_secret: String,
    /// Temporary credential request endpoint
    pub request_token_url: String,
    /// Token credential request endpoint
    pub access_token_url: String,
    /// Resource owner authorization endpoint
    pub user_authorization_url: String,
    /// Absolute callback URL sent as `oauth_callback`; `oob` when absent
    pub callback_url: Option<String>,
}

impl std::fmt::Debug for OAuth1Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth1Config")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("request_token_url", &self.request_token_url)
            .field("access_token_url", &self.access_token_url)
            .field("user_authorization_url", &self.user_authorization_url)
            .field("callback_url", &self.callback_url)
            .finish()
    }
}

/// OAuth 1.0a client using the shared reqwest connection pool
pub struct OAuth1Client {
    config: OAuth1Config,
    signer: OAuthSigner,
    client: Client,
}

impl OAuth1Client {
    /// Create a new client, validating the consumer credentials and endpoints
    ///
    /// # Errors
    ///
    /// Returns `OAuthError::Configuration` if the consumer key or secret is
    /// empty, or if any endpoint URL is missing or unparseable
    pub fn new(config: OAuth1Config) -> Result<Self, OAuthError> {
        Self::with_http_client(config, shared_client().clone())
    }

    /// Create a new client on top of a caller-provided HTTP client
    ///
    /// # Errors
    ///
    /// Same validation as [`OAuth1Client::new`]
    pub fn with_http_client(config: OAuth1Config, client: Client) -> Result<Self, OAuthError> {
        if config.consumer_key.trim().is_empty() {
            return Err(OAuthError::Configuration(
                "OAuth 1.0a client requires a consumer key".to_owned(),
            ));
        }
        if config.consumer_secret.is_empty() {
            return Err(OAuthError::Configuration(
                "OAuth 1.0a client requires a consumer secret".to_owned(),
            ));
        }
        for (name, url) in [
            ("request token URL", &config.request_token_url),
            ("access token URL", &config.access_token_url),
            ("user authorization URL", &config.user_authorization_url),
        ] {
            if url.trim().is_empty() {
                return Err(OAuthError::Configuration(format!(
                    "OAuth 1.0a client requires a {name}"
                )));
            }
            Url::parse(url.trim())
                .map_err(|e| OAuthError::Configuration(format!("Invalid {name} '{url}': {e}")))?;
        }

        let signer = OAuthSigner::new(config.consumer_key.clone(), config.consumer_secret.clone());
        Ok(Self {
            config,
            signer,
            client,
        })
    }

    /// Get the client configuration
    #[must_use]
    pub const fn config(&self) -> &OAuth1Config {
        &self.config
    }

    /// Signed form `POST` to a token endpoint, parsing the form-encoded reply
    async fn token_request(
        &self,
        url: &str,
        ctx: &SigningContext<'_>,
    ) -> Result<TokenCredentials, OAuthError> {
        let url = url.trim();
        let header = self.signer.authorization_header("POST", url, ctx)?;

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, header)
            .form(ctx.body_params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), endpoint = %url, "OAuth token endpoint rejected request");
            return Err(OAuthError::Http {
                status: status.as_u16(),
                body,
            });
        }

        parse_token_response(&body)
    }
}

/// Parse an `application/x-www-form-urlencoded` token response
///
/// # Errors
///
/// Returns `OAuthError::InvalidResponse` when `oauth_token` or
/// `oauth_token_secret` is missing
pub fn parse_token_response(body: &str) -> Result<TokenCredentials, OAuthError> {
    let mut params: TokenParams = url::form_urlencoded::parse(body.trim().as_bytes())
        .into_owned()
        .collect();

    let token = params
        .remove("oauth_token")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| OAuthError::InvalidResponse("missing oauth_token".to_owned()))?;
    let token_secret = params
        .remove("oauth_token_secret")
        .ok_or_else(|| OAuthError::InvalidResponse("missing oauth_token_secret".to_owned()))?;

    Ok(TokenCredentials {
        token,
        token_secret,
        params,
    })
}

#[async_trait]
impl OAuthClient for OAuth1Client {
    async fn request_token(&self, params: &TokenParams) -> Result<TokenCredentials, OAuthError> {
        let callback = self
            .config
            .callback_url
            .as_deref()
            .unwrap_or(OUT_OF_BAND_CALLBACK);
        let body: Vec<(String, String)> =
            params.iter().map(|(k, v)| (k.clone(), v.clone())).collect();

        let ctx = SigningContext {
            token: None,
            token_secret: "",
            protocol_params: &[("oauth_callback", callback)],
            body_params: &body,
        };
        let credentials = self
            .token_request(&self.config.request_token_url, &ctx)
            .await?;

        if !credentials.callback_confirmed() {
            debug!("Provider did not confirm oauth_callback");
        }
        Ok(credentials)
    }

    fn authorization_url(&self, token: &str, params: &TokenParams) -> Result<String, OAuthError> {
        let mut url = Url::parse(self.config.user_authorization_url.trim())?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("oauth_token", token);
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        Ok(url.to_string())
    }

    async fn access_token(
        &self,
        token: &str,
        token_secret: &str,
        verifier: &str,
    ) -> Result<TokenCredentials, OAuthError> {
        let ctx = SigningContext {
            token: Some(token),
            token_secret,
            protocol_params: &[("oauth_verifier", verifier)],
            body_params: &[],
        };
        self.token_request(&self.config.access_token_url, &ctx)
            .await
    }

    async fn get(&self, url: &str, token: &str, token_secret: &str) -> Result<String, OAuthError> {
        let ctx = SigningContext {
            token: Some(token),
            token_secret,
            protocol_params: &[],
            body_params: &[],
        };
        let header = self.signer.authorization_header("GET", url, &ctx)?;

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, header)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(OAuthError::Http {
                status: status.as_u16(),
                body,
            })
        }
    }
}
