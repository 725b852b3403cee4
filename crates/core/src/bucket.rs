//! Bucket wire models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bucket visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BucketType {
    /// Anyone can download files.
    #[serde(rename = "allPublic")]
    AllPublic,
    /// Downloads require an authorization token.
    #[serde(rename = "allPrivate")]
    AllPrivate,
}

impl BucketType {
    /// The wire name of this bucket type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllPublic => "allPublic",
            Self::AllPrivate => "allPrivate",
        }
    }
}

impl fmt::Display for BucketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BucketType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allPublic" => Ok(Self::AllPublic),
            "allPrivate" => Ok(Self::AllPrivate),
            other => Err(crate::Error::InvalidBucketType(other.to_string())),
        }
    }
}

/// A bucket as reported by the service.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    /// Owning account.
    pub account_id: String,
    /// Service-assigned bucket identifier.
    pub bucket_id: String,
    /// Unique bucket name.
    pub bucket_name: String,
    /// Bucket visibility.
    pub bucket_type: BucketType,
}

/// Request body for `b2_create_bucket`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBucketRequest {
    pub account_id: String,
    pub bucket_name: String,
    pub bucket_type: BucketType,
}

/// Request body for `b2_delete_bucket`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBucketRequest {
    pub account_id: String,
    pub bucket_id: String,
}

/// Request body for `b2_list_buckets`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBucketsRequest {
    pub account_id: String,
}

/// Response body for `b2_list_buckets`.
#[derive(Clone, Debug, Deserialize)]
pub struct ListBucketsResponse {
    pub buckets: Vec<Bucket>,
}

/// Request body for `b2_update_bucket`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBucketRequest {
    pub account_id: String,
    pub bucket_id: String,
    pub bucket_type: BucketType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_type_wire_names() {
        assert_eq!(BucketType::AllPublic.to_string(), "allPublic");
        assert_eq!("allPrivate".parse::<BucketType>().unwrap(), BucketType::AllPrivate);
        assert!("allSecret".parse::<BucketType>().is_err());
    }

    #[test]
    fn test_create_request_wire_shape() {
        let request = CreateBucketRequest {
            account_id: "acct-1".to_string(),
            bucket_name: "photos".to_string(),
            bucket_type: BucketType::AllPrivate,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["accountId"], "acct-1");
        assert_eq!(json["bucketName"], "photos");
        assert_eq!(json["bucketType"], "allPrivate");
    }

    #[test]
    fn test_bucket_roundtrip() {
        let json = r#"{
            "accountId": "acct-1",
            "bucketId": "b-123",
            "bucketName": "photos",
            "bucketType": "allPublic"
        }"#;
        let bucket: Bucket = serde_json::from_str(json).unwrap();
        assert_eq!(bucket.bucket_id, "b-123");
        assert_eq!(bucket.bucket_type, BucketType::AllPublic);

        let back = serde_json::to_value(&bucket).unwrap();
        assert_eq!(back["bucketType"], "allPublic");
    }
}
