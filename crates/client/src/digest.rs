//! Streaming file digests.

use crate::error::Result;
use b2_core::Sha1Hash;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Read buffer size for digesting (64 KiB).
const DIGEST_BUF_SIZE: usize = 64 * 1024;

/// Compute the SHA-1 digest of a file by streaming its contents.
///
/// The file is read in fixed-size chunks and never buffered whole in memory.
/// The byte length used alongside this digest comes from a separate metadata
/// probe, so the two may observe different contents if the file changes
/// between reads; the upload pipeline accepts that race.
pub async fn digest_file(path: &Path) -> Result<Sha1Hash> {
    let mut file = File::open(path).await?;
    let mut hasher = Sha1Hash::hasher();
    let mut buf = vec![0u8; DIGEST_BUF_SIZE];
    loop {
        let n = file.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[tokio::test]
    async fn test_digest_matches_oneshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let content = b"hello world".repeat(10_000);
        file.write_all(&content).unwrap();
        file.flush().unwrap();

        let digest = digest_file(file.path()).await.unwrap();
        assert_eq!(digest, Sha1Hash::compute(&content));
    }

    #[tokio::test]
    async fn test_digest_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let digest = digest_file(file.path()).await.unwrap();
        // SHA-1 of the empty string
        assert_eq!(digest.to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[tokio::test]
    async fn test_missing_file_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = digest_file(&dir.path().join("nope.bin")).await.unwrap_err();
        assert!(matches!(err, Error::FileAccess(_)));
    }
}
