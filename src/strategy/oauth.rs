// ABOUTME: Generic OAuth 1.0a handshake driver parameterized by provider hooks
// ABOUTME: Stores the request token in the session and hands the profile to the verify callback
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{
    AuthAction, CallbackParams, ProviderHooks, RequestTokenState, SessionStore, Strategy,
    VerifyCallback,
};
use crate::config::StrategyOptions;
use crate::errors::AuthError;
use crate::logging::AppLogger;
use crate::models::Profile;
use crate::oauth1::{OAuthClient, TokenParams};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// OAuth 1.0a strategy: the handshake is generic, `H` supplies the provider specifics
pub struct OAuthStrategy<H, V> {
    hooks: H,
    options: StrategyOptions,
    client: Arc<dyn OAuthClient>,
    verify: V,
}

impl<H: ProviderHooks, V> OAuthStrategy<H, V> {
    /// Assemble a strategy from its parts
    #[must_use]
    pub fn with_client(
        hooks: H,
        options: StrategyOptions,
        client: Arc<dyn OAuthClient>,
        verify: V,
    ) -> Self {
        Self {
            hooks,
            options,
            client,
            verify,
        }
    }

    /// Options the strategy was built with, defaults applied
    #[must_use]
    pub const fn options(&self) -> &StrategyOptions {
        &self.options
    }

    /// Provider hooks
    #[must_use]
    pub const fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Extra parameters sent with the request-token call
    #[must_use]
    pub fn request_token_params(&self) -> TokenParams {
        self.hooks.request_token_params(&self.options)
    }

    /// Extra parameters appended to the user authorization URL
    #[must_use]
    pub fn user_authorization_params(&self) -> TokenParams {
        self.hooks.user_authorization_params(&self.options)
    }

    /// Fetch the normalized profile with the given token credentials
    pub async fn user_profile(
        &self,
        token: &str,
        token_secret: &str,
        params: &TokenParams,
    ) -> Result<Profile, AuthError> {
        self.hooks
            .user_profile(
                self.client.as_ref(),
                &self.options,
                token,
                token_secret,
                params,
            )
            .await
    }

    fn session_state(&self, session: &dyn SessionStore) -> Result<RequestTokenState, AuthError> {
        let value = session
            .get(&self.options.session_key)
            .cloned()
            .ok_or(AuthError::MissingRequestToken)?;
        serde_json::from_value(value).map_err(AuthError::Session)
    }
}

#[async_trait]
impl<U, H, V> Strategy<U> for OAuthStrategy<H, V>
where
    U: Send + 'static,
    H: ProviderHooks,
    V: VerifyCallback<U>,
{
    fn name(&self) -> &'static str {
        self.hooks.name()
    }

    async fn begin(&self, session: &mut dyn SessionStore) -> Result<AuthAction<U>, AuthError> {
        let params = self.request_token_params();
        let request = self
            .client
            .request_token(&params)
            .await
            .map_err(|e| AuthError::internal_oauth("failed to obtain request token", e))?;

        let state = RequestTokenState {
            oauth_token: request.token.clone(),
            oauth_token_secret: request.token_secret,
        };
        session.insert(
            &self.options.session_key,
            serde_json::to_value(&state).map_err(AuthError::Session)?,
        );

        let url = self
            .client
            .authorization_url(&request.token, &self.user_authorization_params())
            .map_err(|e| AuthError::internal_oauth("failed to build authorization URL", e))?;

        info!(
            provider = self.hooks.name(),
            session_key = %self.options.session_key,
            "Redirecting user to provider authorization"
        );
        Ok(AuthAction::Redirect(url))
    }

    async fn complete(
        &self,
        session: &mut dyn SessionStore,
        callback: &CallbackParams,
    ) -> Result<AuthAction<U>, AuthError> {
        let provider = self.hooks.name();

        if callback.denied.is_some() {
            session.remove(&self.options.session_key);
            AppLogger::log_oauth_event("anonymous", provider, "authorization_denied", false);
            return Ok(AuthAction::Fail("user denied authorization".to_owned()));
        }

        let Some(token) = callback.oauth_token.as_deref() else {
            return Ok(AuthAction::Fail("missing oauth_token in callback".to_owned()));
        };

        let state = self.session_state(session)?;
        if state.oauth_token != token {
            warn!(provider, "Callback oauth_token does not match the session request token");
            return Err(AuthError::MissingRequestToken);
        }

        let verifier = callback.oauth_verifier.as_deref().unwrap_or_default();
        let access = self
            .client
            .access_token(token, &state.oauth_token_secret, verifier)
            .await
            .map_err(|e| AuthError::internal_oauth("failed to obtain access token", e))?;
        session.remove(&self.options.session_key);
        debug!(provider, "Obtained OAuth access token");

        let mut params = self.request_token_params();
        params.extend(access.params.clone());

        let profile = self
            .user_profile(&access.token, &access.token_secret, &params)
            .await?;
        let profile_id = profile.id.clone();

        match self
            .verify
            .verify(&access.token, &access.token_secret, profile)
            .await?
        {
            Some(user) => {
                AppLogger::log_oauth_event(&profile_id, provider, "login", true);
                Ok(AuthAction::Success(user))
            }
            None => {
                AppLogger::log_oauth_event(&profile_id, provider, "login", false);
                Ok(AuthAction::Fail("verify callback rejected the user".to_owned()))
            }
        }
    }
}
