//! Upload URL grants and upload confirmations.

use serde::{Deserialize, Serialize};

/// Request body for `b2_get_upload_url`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUploadUrlRequest {
    pub bucket_id: String,
}

/// A short-lived upload endpoint plus its token.
///
/// Grants are intended for a single upload: the client fetches a fresh one
/// for every attempt and never caches or reuses them.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlGrant {
    /// The bucket this grant is scoped to.
    pub bucket_id: String,
    /// Where to POST the file bytes.
    pub upload_url: String,
    /// Token authorizing the upload request.
    pub authorization_token: String,
}

/// Upload confirmation returned by the service.
///
/// `content_sha1` is the digest the service verified server-side; the client
/// does not compare it to the locally computed one.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Service-assigned file identifier.
    pub file_id: String,
    /// The stored file name.
    pub file_name: String,
    /// Owning account.
    pub account_id: String,
    /// The bucket the file landed in.
    pub bucket_id: String,
    /// Stored content length in bytes.
    pub content_length: u64,
    /// Server-verified SHA-1 of the content, hex encoded.
    pub content_sha1: String,
    /// Resolved content type.
    pub content_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_grant_wire_shape() {
        let json = r#"{
            "bucketId": "b-123",
            "uploadUrl": "https://pod-000.example.com/b2api/v2/b2_upload_file/b-123/tok",
            "authorizationToken": "upload-tok"
        }"#;
        let grant: UploadUrlGrant = serde_json::from_str(json).unwrap();
        assert_eq!(grant.bucket_id, "b-123");
        assert!(grant.upload_url.starts_with("https://pod-000"));
        assert_eq!(grant.authorization_token, "upload-tok");
    }

    #[test]
    fn test_uploaded_file_wire_shape() {
        let json = r#"{
            "fileId": "4_z27c88f1d182b150646ff0b16_f1004ba650fe24e6b_d20150809",
            "fileName": "a%20b.txt",
            "accountId": "acct-1",
            "bucketId": "b-123",
            "contentLength": 100,
            "contentSha1": "a9993e364706816aba3e25717850c26c9cd0d89d",
            "contentType": "text/plain"
        }"#;
        let file: UploadedFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.content_length, 100);
        assert_eq!(file.content_sha1.len(), 40);
        assert_eq!(file.content_type, "text/plain");
    }

    #[test]
    fn test_get_upload_url_request_wire_shape() {
        let request = GetUploadUrlRequest {
            bucket_id: "b-123".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["bucketId"], "b-123");
    }
}
