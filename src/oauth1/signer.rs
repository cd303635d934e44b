// ABOUTME: OAuth 1.0a request signing with HMAC-SHA1 per RFC 5849
// ABOUTME: Builds signature base strings and the Authorization header value
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # OAuth 1.0a Signer
//!
//! Implements the `HMAC-SHA1` signature method from RFC 5849 section 3.4:
//!
//! 1. Collect the protocol parameters, the URL query parameters and any
//!    form-encoded body parameters.
//! 2. Percent-encode every name and value, sort by name then value and join
//!    them into the normalized parameter string.
//! 3. Sign `METHOD&encode(base_url)&encode(params)` with the key
//!    `encode(consumer_secret)&encode(token_secret)`.

use super::OAuthError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::{distributions::Alphanumeric, Rng};
use ring::hmac;
use url::Url;

/// Signature method advertised in `oauth_signature_method`
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// Protocol version advertised in `oauth_version`
pub const OAUTH_VERSION: &str = "1.0";

const NONCE_LENGTH: usize = 32;

/// Percent-encode a value using the RFC 3986 unreserved set
#[must_use]
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Protocol values that change per request
#[derive(Debug, Clone)]
pub struct SigningContext<'a> {
    /// Token credentials, if the request is made on behalf of a user
    pub token: Option<&'a str>,
    /// Token secret paired with `token` (empty for the request-token call)
    pub token_secret: &'a str,
    /// Extra `oauth_*` protocol parameters (`oauth_callback`, `oauth_verifier`)
    pub protocol_params: &'a [(&'a str, &'a str)],
    /// Form-encoded body parameters included in the signature
    pub body_params: &'a [(String, String)],
}

/// Signs requests with the consumer credentials
#[derive(Clone)]
pub struct OAuthSigner {
    consumer_key: String,
    consumer_secret: String,
}

impl std::fmt::Debug for OAuthSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthSigner")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .finish()
    }
}

impl OAuthSigner {
    /// Create a signer for the given consumer credentials
    #[must_use]
    pub const fn new(consumer_key: String, consumer_secret: String) -> Self {
        Self {
            consumer_key,
            consumer_secret,
        }
    }

    /// Consumer key sent as `oauth_consumer_key`
    #[must_use]
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// Build the `Authorization` header value with a fresh nonce and timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if `url` cannot be parsed
    pub fn authorization_header(
        &self,
        method: &str,
        url: &str,
        ctx: &SigningContext<'_>,
    ) -> Result<String, OAuthError> {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LENGTH)
            .map(char::from)
            .collect();
        let timestamp = chrono::Utc::now().timestamp().to_string();

        self.authorization_header_with(method, url, ctx, &nonce, &timestamp)
    }

    /// Build the `Authorization` header value with a caller-supplied nonce and timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if `url` cannot be parsed
    pub fn authorization_header_with(
        &self,
        method: &str,
        url: &str,
        ctx: &SigningContext<'_>,
        nonce: &str,
        timestamp: &str,
    ) -> Result<String, OAuthError> {
        let mut oauth_params: Vec<(&str, &str)> = vec![
            ("oauth_consumer_key", self.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp),
            ("oauth_version", OAUTH_VERSION),
        ];
        if let Some(token) = ctx.token {
            oauth_params.push(("oauth_token", token));
        }
        oauth_params.extend_from_slice(ctx.protocol_params);

        let base_string = signature_base_string(method, url, &oauth_params, ctx.body_params)?;
        let signature = self.sign(&base_string, ctx.token_secret);

        let mut header_params: Vec<(&str, &str)> = oauth_params;
        header_params.push(("oauth_signature", signature.as_str()));
        header_params.sort_unstable();

        let fields: Vec<String> = header_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect();

        Ok(format!("OAuth {}", fields.join(", ")))
    }

    /// Compute the base64 `HMAC-SHA1` signature of a base string
    #[must_use]
    pub fn sign(&self, base_string: &str, token_secret: &str) -> String {
        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.consumer_secret),
            percent_encode(token_secret)
        );
        let key = hmac::Key::new(
            hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            signing_key.as_bytes(),
        );
        STANDARD.encode(hmac::sign(&key, base_string.as_bytes()).as_ref())
    }
}

/// Build the RFC 5849 signature base string
///
/// Query parameters of `url` are folded into the normalized parameter set;
/// the fragment is dropped.
///
/// # Errors
///
/// Returns an error if `url` cannot be parsed or has no host
pub fn signature_base_string(
    method: &str,
    url: &str,
    oauth_params: &[(&str, &str)],
    body_params: &[(String, String)],
) -> Result<String, OAuthError> {
    let parsed = Url::parse(url)?;
    let base_url = normalized_base_url(&parsed)?;

    let mut params: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
        .collect();
    params.extend(
        oauth_params
            .iter()
            .map(|(k, v)| (percent_encode(k), percent_encode(v))),
    );
    params.extend(
        body_params
            .iter()
            .map(|(k, v)| (percent_encode(k), percent_encode(v))),
    );
    params.sort_unstable();

    let normalized: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();

    Ok(format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(&base_url),
        percent_encode(&normalized.join("&"))
    ))
}

/// Scheme, host, non-default port and path, lowercased where RFC 5849 requires
fn normalized_base_url(url: &Url) -> Result<String, OAuthError> {
    let host = url
        .host_str()
        .ok_or_else(|| OAuthError::Configuration(format!("URL has no host: {url}")))?;
    let scheme = url.scheme().to_ascii_lowercase();
    let host = host.to_ascii_lowercase();

    Ok(url.port().map_or_else(
        || format!("{scheme}://{host}{}", url.path()),
        |port| format!("{scheme}://{host}:{port}{}", url.path()),
    ))
}
