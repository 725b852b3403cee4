//! Client construction and request plumbing.

use crate::auth::AuthorizationState;
use crate::error::{Error, Result};
use b2_core::Credentials;
use reqwest::header::AUTHORIZATION;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

/// Default base URL for the account-authorize endpoint.
pub const DEFAULT_AUTH_BASE: &str = "https://api.backblazeb2.com";

/// Path prefix shared by all API operations.
pub(crate) const API_PREFIX: &str = "b2api/v2";

/// Asynchronous B2 API client.
///
/// Holds the account credentials and the single authorization slot shared by
/// all operations. The slot is replaced wholesale on each successful
/// (re)authorization; see [`B2Client::confirm_authorization`] for the
/// freshness contract.
pub struct B2Client {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) auth_base: Url,
    pub(crate) auth: RwLock<Option<AuthorizationState>>,
}

impl B2Client {
    /// Create a client against the production authorize endpoint.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_auth_base(credentials, DEFAULT_AUTH_BASE)
    }

    /// Create a client with an explicit authorize base URL.
    pub fn with_auth_base(credentials: Credentials, auth_base: &str) -> Result<Self> {
        let auth_base = Url::parse(auth_base)
            .map_err(|e| Error::Config(format!("invalid auth base URL {auth_base:?}: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            credentials,
            auth_base,
            auth: RwLock::new(None),
        })
    }

    /// The account these credentials belong to.
    pub fn account_id(&self) -> &str {
        &self.credentials.account_id
    }

    /// Build the URL for an API operation under the confirmed API base.
    pub(crate) fn api_endpoint(&self, api_url: &str, operation: &str) -> Result<Url> {
        let raw = format!("{}/{}/{}", api_url.trim_end_matches('/'), API_PREFIX, operation);
        Url::parse(&raw).map_err(|e| Error::Config(format!("invalid API URL {raw:?}: {e}")))
    }

    /// POST a JSON body to an authenticated endpoint and decode the response.
    ///
    /// Non-success responses become [`Error::RemoteApi`] with the service's
    /// error body carried verbatim.
    pub(crate) async fn post_json<B, T>(&self, url: Url, token: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, token)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(Error::RemoteApi {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Build a public download URL for a file from the confirmed state.
    pub async fn download_url_for(&self, bucket_name: &str, file_name: &str) -> Result<String> {
        let auth = self.confirm_authorization().await?;
        Ok(format!(
            "{}/file/{}/{}",
            auth.download_url.trim_end_matches('/'),
            bucket_name,
            crate::upload::encode_file_name(file_name)
        ))
    }
}
