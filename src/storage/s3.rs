use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use log::debug;

use super::{BatchRequest, KeyBatch, ObjectLister, StorageError};
use crate::models::AppConfig;

/// `ListObjectsV2` backed lister for one bucket.
#[derive(Debug, Clone)]
pub struct S3Lister {
    client: Client,
    bucket: String,
}

impl S3Lister {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Build a client from static credentials in the application config.
    pub fn from_config(config: &AppConfig) -> Self {
        let creds = Credentials::new(
            &config.aws_access_key,
            &config.aws_secret_key,
            None,
            None,
            "doclister-config",
        );

        let mut builder = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.get_region()))
            .credentials_provider(creds)
            .force_path_style(config.get_force_path_style());
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(Client::from_conf(builder.build()), &config.bucket_name)
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectLister for S3Lister {
    async fn list_batch(&self, request: BatchRequest) -> Result<KeyBatch, StorageError> {
        debug!(
            "ListObjectsV2 bucket='{}' max_keys={:?} continuation={}",
            self.bucket,
            request.max_keys,
            request.continuation_token.is_some()
        );

        let output = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .set_max_keys(
                request
                    .max_keys
                    .map(|n| i32::try_from(n).unwrap_or(i32::MAX)),
            )
            .set_continuation_token(request.continuation_token)
            .send()
            .await
            .map_err(|e| StorageError::new(DisplayErrorContext(&e).to_string()))?;

        let keys = output
            .contents()
            .iter()
            .filter_map(|object| object.key())
            .map(str::to_owned)
            .collect();

        Ok(KeyBatch {
            keys,
            is_truncated: output.is_truncated().unwrap_or(false),
            next_continuation_token: output.next_continuation_token().map(str::to_owned),
        })
    }
}
