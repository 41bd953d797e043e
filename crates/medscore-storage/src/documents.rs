use aws_sdk_s3::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::objects;

const JSON: Option<&str> = Some("application/json");

/// Load a JSON document. A missing key is `Ok(None)`.
pub async fn load_document<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match objects::get_object(client, bucket, key).await {
        Ok(output) => Ok(Some(serde_json::from_slice(&output.body)?)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write a JSON document, replacing any previous version.
pub async fn save_document<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(client, bucket, key, body, JSON).await?;
    Ok(())
}

/// Write a JSON document only if the key does not exist yet.
///
/// Fails with [`StorageError::PreconditionFailed`] when it does.
pub async fn create_document<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object_if_absent(client, bucket, key, body, JSON).await?;
    Ok(())
}
