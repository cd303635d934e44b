// ABOUTME: Authentication strategy contracts shared with the host framework
// ABOUTME: Strategy trait, provider hooks, verify callback, callback params and registry
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Authentication Strategies
//!
//! A strategy authenticates a request in two legs:
//!
//! - [`Strategy::begin`] starts the handshake and tells the host where to
//!   redirect the user.
//! - [`Strategy::complete`] handles the provider's callback and yields the
//!   application user produced by the [`VerifyCallback`].
//!
//! [`OAuthStrategy`] implements both legs for any OAuth 1.0a provider. Providers
//! only supply [`ProviderHooks`]: extra request parameters and the profile fetch.

/// Generic OAuth 1.0a handshake driver
pub mod oauth;
/// Session storage seam
pub mod session;

pub use oauth::OAuthStrategy;
pub use session::{RequestTokenState, SessionStore};

use crate::config::StrategyOptions;
use crate::errors::AuthError;
use crate::models::Profile;
use crate::oauth1::{OAuthClient, TokenParams};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

/// Outcome of a strategy leg, acted on by the host framework
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction<U> {
    /// Send the user to this URL
    Redirect(String),
    /// Authentication succeeded
    Success(U),
    /// Authentication was refused; the string says why
    Fail(String),
}

/// Query parameters the provider sends to the callback URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CallbackParams {
    /// Authorized request token
    pub oauth_token: Option<String>,
    /// Verifier proving the user authorized the token
    pub oauth_verifier: Option<String>,
    /// Present when the user declined
    pub denied: Option<String>,
}

impl CallbackParams {
    /// Parse a raw callback query string; a leading `?` is ignored
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        {
            match key.as_ref() {
                "oauth_token" => params.oauth_token = Some(value.into_owned()),
                "oauth_verifier" => params.oauth_verifier = Some(value.into_owned()),
                "denied" => params.denied = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }
}

/// Application callback mapping token credentials and a profile to a user
///
/// Return `Ok(None)` to refuse the login without raising an error.
#[async_trait]
pub trait VerifyCallback<U>: Send + Sync {
    /// Resolve the application user
    async fn verify(
        &self,
        token: &str,
        token_secret: &str,
        profile: Profile,
    ) -> Result<Option<U>, AuthError>;
}

#[async_trait]
impl<U, F> VerifyCallback<U> for F
where
    U: Send + 'static,
    F: Fn(&str, &str, Profile) -> Result<Option<U>, AuthError> + Send + Sync,
{
    async fn verify(
        &self,
        token: &str,
        token_secret: &str,
        profile: Profile,
    ) -> Result<Option<U>, AuthError> {
        self(token, token_secret, profile)
    }
}

/// Provider-specific behavior plugged into [`OAuthStrategy`]
#[async_trait]
pub trait ProviderHooks: Send + Sync {
    /// Name the strategy registers under
    fn name(&self) -> &'static str;

    /// Extra parameters for the request-token call
    fn request_token_params(&self, _options: &StrategyOptions) -> TokenParams {
        TokenParams::new()
    }

    /// Extra parameters for the user authorization redirect
    fn user_authorization_params(&self, _options: &StrategyOptions) -> TokenParams {
        TokenParams::new()
    }

    /// Fetch and normalize the authenticated user's profile
    ///
    /// `params` carries the parameters collected during the handshake.
    async fn user_profile(
        &self,
        client: &dyn OAuthClient,
        options: &StrategyOptions,
        token: &str,
        token_secret: &str,
        params: &TokenParams,
    ) -> Result<Profile, AuthError>;
}

/// A strategy the host framework can dispatch to by name
#[async_trait]
pub trait Strategy<U: Send + 'static>: Send + Sync {
    /// Dispatch name
    fn name(&self) -> &'static str;

    /// Start the handshake and return where to send the user
    async fn begin(&self, session: &mut dyn SessionStore) -> Result<AuthAction<U>, AuthError>;

    /// Finish the handshake from the provider's callback
    async fn complete(
        &self,
        session: &mut dyn SessionStore,
        callback: &CallbackParams,
    ) -> Result<AuthAction<U>, AuthError>;
}

/// Strategies keyed by their dispatch name
pub struct StrategyRegistry<U: Send + 'static> {
    strategies: HashMap<&'static str, Box<dyn Strategy<U>>>,
}

impl<U: Send + 'static> StrategyRegistry<U> {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Register a strategy under its own name, returning any strategy it replaced
    pub fn register(&mut self, strategy: Box<dyn Strategy<U>>) -> Option<Box<dyn Strategy<U>>> {
        self.strategies.insert(strategy.name(), strategy)
    }

    /// Look up a strategy by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Strategy<U>> {
        self.strategies.get(name).map(AsRef::as_ref)
    }

    /// Names of all registered strategies
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.strategies.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl<U: Send + 'static> Default for StrategyRegistry<U> {
    fn default() -> Self {
        Self::new()
    }
}
