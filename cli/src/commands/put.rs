use std::path::Path;

use anyhow::{Context, Result};
use portfolio_shared::{
    content_store::{FileKvStore, KvStore},
    Collection,
};

use crate::utils::validate_collection;

pub async fn run(kv_dir: &Path, collection: Collection, file: &Path) -> Result<()> {
    let store = FileKvStore::new(kv_dir);
    put_file(&store, collection, file).await
}

/// Validates `file` and stores it under the collection's key.
pub async fn put_file(store: &dyn KvStore, collection: Collection, file: &Path) -> Result<()> {
    let body = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let value = validate_collection(collection, &body)
        .with_context(|| format!("rejected {}", file.display()))?;
    let count = value.as_array().map_or(0, Vec::len);

    store
        .put(collection.key(), &value)
        .await
        .with_context(|| format!("failed to store {collection}"))?;

    tracing::info!("Stored {count} {collection} records from {}", file.display());
    Ok(())
}
