//! Authorization state and the token lifecycle.
//!
//! The account token is valid for 24 hours from the instant the authorize
//! call returned. [`B2Client::confirm_authorization`] is the single gate
//! every authenticated operation passes through: it serves the cached state
//! while fresh and re-authorizes when it is not.

use crate::client::B2Client;
use crate::error::{Error, Result};
use b2_core::account::AuthorizeAccountResponse;
use b2_core::AUTH_TOKEN_TTL;
use reqwest::Url;
use time::OffsetDateTime;
use tracing::instrument;

/// The account authorization produced by `b2_authorize_account`.
///
/// Replaced wholesale on every successful (re)authorization. The only field
/// ever mutated in place is `expires_at`, which is forced to "now" when a
/// refresh fails so the next confirm retries instead of serving stale state.
#[derive(Clone, Debug)]
pub struct AuthorizationState {
    /// Bearer token for authenticated API calls.
    pub token: String,
    /// Base URL for API operations.
    pub api_url: String,
    /// Base URL for file downloads.
    pub download_url: String,
    /// Wall-clock instant the token stops being served from cache.
    pub expires_at: OffsetDateTime,
}

impl AuthorizationState {
    fn from_response(response: AuthorizeAccountResponse, expires_at: OffsetDateTime) -> Self {
        Self {
            token: response.authorization_token,
            api_url: response.api_url,
            download_url: response.download_url,
            expires_at,
        }
    }

    /// Whether the token is still inside its 24-hour window.
    pub fn is_fresh(&self) -> bool {
        OffsetDateTime::now_utc() < self.expires_at
    }
}

impl B2Client {
    /// Perform the account handshake against `b2_authorize_account`.
    ///
    /// Exactly one round trip per call; never retried internally. On success
    /// the new state replaces the stored one wholesale and is returned. On
    /// failure the stored state's expiry is forced to "now" (token and URL
    /// fields are left untouched) and the failure propagates.
    #[instrument(skip(self))]
    pub async fn authorize_account(&self) -> Result<AuthorizationState> {
        let url = self
            .auth_base
            .join(&format!("{}/b2_authorize_account", crate::client::API_PREFIX))
            .map_err(|e| Error::Config(format!("invalid authorize URL: {e}")))?;

        match self.authorize_round_trip(url).await {
            Ok(state) => {
                let mut slot = self.auth.write().await;
                *slot = Some(state.clone());
                Ok(state)
            }
            Err(err) => {
                tracing::warn!(error = %err, "account authorization failed");
                let mut slot = self.auth.write().await;
                if let Some(state) = slot.as_mut() {
                    state.expires_at = OffsetDateTime::now_utc();
                }
                Err(err)
            }
        }
    }

    async fn authorize_round_trip(&self, url: Url) -> Result<AuthorizationState> {
        let response = self
            .http
            .post(url)
            .basic_auth(
                &self.credentials.account_id,
                Some(&self.credentials.application_key),
            )
            .send()
            .await
            .map_err(|e| Error::Authentication(e.to_string()))?;

        // Expiry counts from the instant the response arrived, not from when
        // the request was issued.
        let received_at = OffsetDateTime::now_utc();

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(Error::Authentication(format!("{status}: {body}")));
        }

        let parsed: AuthorizeAccountResponse = serde_json::from_str(&body)?;
        Ok(AuthorizationState::from_response(
            parsed,
            received_at + AUTH_TOKEN_TTL,
        ))
    }

    /// Return a fresh authorization, re-authorizing if the cached one expired.
    ///
    /// Fails with [`Error::Unauthenticated`] if the account was never
    /// explicitly authorized on this client. Cache hits make no network call
    /// and leave the state untouched; an expired state triggers exactly one
    /// `authorize_account` call whose failure propagates unchanged.
    ///
    /// Concurrent callers that both observe an expired token each trigger
    /// their own refresh; the last writer wins. The read lock is dropped
    /// before the refresh round trip, so the check-then-refresh sequence is
    /// deliberately not atomic.
    #[instrument(skip(self))]
    pub async fn confirm_authorization(&self) -> Result<AuthorizationState> {
        {
            let slot = self.auth.read().await;
            match slot.as_ref() {
                None => return Err(Error::Unauthenticated),
                Some(state) if state.is_fresh() => return Ok(state.clone()),
                Some(_) => {}
            }
        }
        tracing::debug!("authorization token expired, re-authorizing");
        self.authorize_account().await
    }

    /// Force the stored authorization to expire immediately.
    ///
    /// The next `confirm_authorization` call will re-authorize. This performs
    /// the same field-level reset the failure path does: only the expiry
    /// moves, the token and URL fields stay in place.
    pub async fn invalidate_authorization(&self) {
        let mut slot = self.auth.write().await;
        if let Some(state) = slot.as_mut() {
            state.expires_at = OffsetDateTime::now_utc();
        }
    }

    /// Peek at the stored authorization without confirming freshness.
    ///
    /// Returns whatever is in the slot, expired or not. Callers that want a
    /// usable token should go through `confirm_authorization` instead.
    pub async fn current_authorization(&self) -> Option<AuthorizationState> {
        self.auth.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_expiring_at(expires_at: OffsetDateTime) -> AuthorizationState {
        AuthorizationState {
            token: "tok".to_string(),
            api_url: "https://api000.example.com".to_string(),
            download_url: "https://f000.example.com".to_string(),
            expires_at,
        }
    }

    #[test]
    fn test_freshness_window() {
        let now = OffsetDateTime::now_utc();
        assert!(state_expiring_at(now + time::Duration::hours(1)).is_fresh());
        assert!(!state_expiring_at(now - time::Duration::seconds(1)).is_fresh());
        // An expiry of exactly "now" is already stale by the time it is checked.
        assert!(!state_expiring_at(now).is_fresh());
    }
}
