//! Core domain types for the B2 storage API client.
//!
//! This crate defines the canonical data model used by the client crate:
//! - Account credentials and the authorize-account wire contract
//! - Bucket wire models
//! - Upload URL grants and upload confirmations
//! - SHA-1 content hashes and incremental hashing

pub mod account;
pub mod bucket;
pub mod error;
pub mod file;
pub mod hash;

pub use account::{AuthorizeAccountResponse, Credentials};
pub use bucket::{Bucket, BucketType};
pub use error::{Error, Result};
pub use file::{UploadUrlGrant, UploadedFile};
pub use hash::{Sha1Hash, Sha1Hasher};

/// Lifetime of an account authorization token: 24 hours from the moment the
/// authorize call returned.
pub const AUTH_TOKEN_TTL: time::Duration = time::Duration::hours(24);

/// Content type that tells the service to derive the real type from the
/// file name.
pub const CONTENT_TYPE_AUTO: &str = "b2/x-auto";
