//! Bucket CRUD operations.
//!
//! Each operation confirms the account authorization first and then issues a
//! single request against the confirmed API base URL. Failures from the
//! confirm step propagate unchanged; the operations add nothing on top.

use crate::client::B2Client;
use crate::error::{Error, Result};
use b2_core::bucket::{
    Bucket, BucketType, CreateBucketRequest, DeleteBucketRequest, ListBucketsRequest,
    ListBucketsResponse, UpdateBucketRequest,
};
use tracing::instrument;

impl B2Client {
    /// Create a bucket with the given name and visibility.
    #[instrument(skip(self))]
    pub async fn create_bucket(&self, bucket_name: &str, bucket_type: BucketType) -> Result<Bucket> {
        let auth = self.confirm_authorization().await?;
        let url = self.api_endpoint(&auth.api_url, "b2_create_bucket")?;
        self.post_json(
            url,
            &auth.token,
            &CreateBucketRequest {
                account_id: self.credentials.account_id.clone(),
                bucket_name: bucket_name.to_string(),
                bucket_type,
            },
        )
        .await
    }

    /// Delete a bucket; the service returns the deleted bucket.
    #[instrument(skip(self))]
    pub async fn delete_bucket(&self, bucket_id: &str) -> Result<Bucket> {
        let auth = self.confirm_authorization().await?;
        let url = self.api_endpoint(&auth.api_url, "b2_delete_bucket")?;
        self.post_json(
            url,
            &auth.token,
            &DeleteBucketRequest {
                account_id: self.credentials.account_id.clone(),
                bucket_id: bucket_id.to_string(),
            },
        )
        .await
    }

    /// List all buckets in the account.
    #[instrument(skip(self))]
    pub async fn list_buckets(&self) -> Result<Vec<Bucket>> {
        let auth = self.confirm_authorization().await?;
        let url = self.api_endpoint(&auth.api_url, "b2_list_buckets")?;
        let response: ListBucketsResponse = self
            .post_json(
                url,
                &auth.token,
                &ListBucketsRequest {
                    account_id: self.credentials.account_id.clone(),
                },
            )
            .await?;
        Ok(response.buckets)
    }

    /// Find a bucket by its unique name.
    pub async fn get_bucket_by_name(&self, bucket_name: &str) -> Result<Bucket> {
        let buckets = self.list_buckets().await?;
        buckets
            .into_iter()
            .find(|b| b.bucket_name == bucket_name)
            .ok_or_else(|| Error::NotFound(bucket_name.to_string()))
    }

    /// Change a bucket's visibility.
    #[instrument(skip(self))]
    pub async fn update_bucket(&self, bucket_id: &str, bucket_type: BucketType) -> Result<Bucket> {
        let auth = self.confirm_authorization().await?;
        let url = self.api_endpoint(&auth.api_url, "b2_update_bucket")?;
        self.post_json(
            url,
            &auth.token,
            &UpdateBucketRequest {
                account_id: self.credentials.account_id.clone(),
                bucket_id: bucket_id.to_string(),
                bucket_type,
            },
        )
        .await
    }
}
