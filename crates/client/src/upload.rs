//! The file-upload pipeline.
//!
//! One `upload_file` call runs five steps in strict sequence, each feeding
//! the next: size probe, streaming SHA-1, token confirmation, upload-URL
//! grant, streamed POST of the file body. The first failure short-circuits
//! the remainder; the first three steps are local and side-effect-free, only
//! the final POST touches the service.

use crate::client::B2Client;
use crate::error::{Error, Result};
use b2_core::file::{GetUploadUrlRequest, UploadUrlGrant, UploadedFile};
use b2_core::CONTENT_TYPE_AUTO;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use std::path::Path;
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tracing::instrument;

/// Characters percent-encoded in `X-Bz-File-Name` headers.
///
/// The service wants UTF-8 percent-encoding with `/` kept literal, so the
/// set covers whitespace and the characters that are unsafe inside a header
/// value, not every non-alphanumeric byte.
const FILE_NAME_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode a file name for the `X-Bz-File-Name` header.
pub(crate) fn encode_file_name(name: &str) -> String {
    utf8_percent_encode(name, FILE_NAME_ENCODE).to_string()
}

/// Find an `std::io::Error` on an error's source chain.
fn io_cause(err: &(dyn std::error::Error + 'static)) -> Option<std::io::Error> {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<std::io::Error>() {
            return Some(std::io::Error::new(io_err.kind(), io_err.to_string()));
        }
        source = cause.source();
    }
    None
}

/// Classify a failed upload send.
///
/// A read failure in the streamed file body comes back wrapped in a
/// `reqwest::Error` with the original `ReaderStream` I/O error still on the
/// source chain; that is a local file failure, not a transport one. Connect
/// failures also carry an I/O source, so they are ruled out first.
fn classify_send_error(err: reqwest::Error) -> Error {
    if err.is_connect() || err.is_timeout() {
        return Error::Network(err);
    }
    match io_cause(&err) {
        Some(io_err) => Error::FileAccess(io_err),
        None => Error::Network(err),
    }
}

impl B2Client {
    /// Request a fresh single-use upload URL scoped to a bucket.
    ///
    /// Grants are never cached; every upload attempt fetches its own.
    #[instrument(skip(self))]
    pub async fn get_upload_url(&self, bucket_id: &str) -> Result<UploadUrlGrant> {
        let auth = self.confirm_authorization().await?;
        let url = self.api_endpoint(&auth.api_url, "b2_get_upload_url")?;
        self.post_json(
            url,
            &auth.token,
            &GetUploadUrlRequest {
                bucket_id: bucket_id.to_string(),
            },
        )
        .await
    }

    /// Upload a local file into a bucket.
    ///
    /// The file's size and SHA-1 digest come from two independent read
    /// passes; nothing guarantees they observe the same file snapshot. The
    /// returned confirmation carries the hash the service verified
    /// server-side, which is not compared against the local digest here.
    #[instrument(skip(self))]
    pub async fn upload_file(&self, bucket_id: &str, path: &Path) -> Result<UploadedFile> {
        let size = tokio::fs::metadata(path).await?.len();
        let digest = crate::digest::digest_file(path).await?;
        let grant = self.get_upload_url(bucket_id).await?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::FileAccess(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("path has no UTF-8 file name: {}", path.display()),
                ))
            })?;

        let file = File::open(path).await?;
        let body = reqwest::Body::wrap_stream(ReaderStream::new(file));

        tracing::debug!(
            file_name,
            size,
            digest = %digest,
            "streaming file to upload URL"
        );

        let response = self
            .http
            .post(&grant.upload_url)
            .header(AUTHORIZATION, &grant.authorization_token)
            .header("X-Bz-File-Name", encode_file_name(file_name))
            .header(CONTENT_TYPE, CONTENT_TYPE_AUTO)
            .header(CONTENT_LENGTH, size)
            .header("X-Bz-Content-Sha1", digest.to_hex())
            .body(body)
            .send()
            .await
            .map_err(classify_send_error)?;

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
}
