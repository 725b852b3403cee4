//! Asynchronous client for the B2 storage API.
//!
//! The entry point is [`B2Client`]: construct it with account credentials,
//! call [`B2Client::authorize_account`] once, and every subsequent operation
//! keeps the 24-hour authorization token fresh on its own. Bucket operations
//! and [`B2Client::upload_file`] all go through the same token guard,
//! [`B2Client::confirm_authorization`].

mod auth;
mod buckets;
mod client;
mod digest;
mod error;
mod upload;

pub use auth::AuthorizationState;
pub use client::B2Client;
pub use digest::digest_file;
pub use error::{Error, Result};

pub use b2_core::{
    AuthorizeAccountResponse, Bucket, BucketType, Credentials, Sha1Hash, UploadUrlGrant,
    UploadedFile,
};
