//! Account credentials and the authorize-account wire contract.

use serde::Deserialize;
use std::fmt;

/// Account credentials supplied at client construction.
///
/// Owned exclusively by the client instance; never serialized or persisted.
#[derive(Clone)]
pub struct Credentials {
    /// The account identifier.
    pub account_id: String,
    /// The application key paired with the account.
    pub application_key: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(account_id: impl Into<String>, application_key: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            application_key: application_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The application key never appears in logs.
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .finish_non_exhaustive()
    }
}

/// Successful response from `b2_authorize_account`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeAccountResponse {
    /// The account the token was granted to.
    pub account_id: String,
    /// The bearer token for subsequent API calls.
    pub authorization_token: String,
    /// Base URL for API operations.
    pub api_url: String,
    /// Base URL for file downloads.
    pub download_url: String,
    /// Smallest part size the service accepts for large files.
    #[serde(default)]
    pub absolute_minimum_part_size: Option<u64>,
    /// Part size the service recommends for large files.
    #[serde(default)]
    pub recommended_part_size: Option<u64>,
}
