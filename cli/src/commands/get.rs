use std::path::Path;

use anyhow::{Context, Result};
use portfolio_shared::{
    content_store::{FileKvStore, KvStore},
    Collection,
};
use serde_json::Value;

pub async fn run(kv_dir: &Path, collection: Collection) -> Result<()> {
    let store = FileKvStore::new(kv_dir);
    let value = stored_or_empty(&store, collection).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// The stored document, or `[]` when nothing is stored under the key.
pub async fn stored_or_empty(store: &dyn KvStore, collection: Collection) -> Result<Value> {
    let stored = store
        .get(collection.key())
        .await
        .with_context(|| format!("failed to read {collection}"))?;
    Ok(match stored {
        None | Some(Value::Null) => Value::Array(Vec::new()),
        Some(value) => value,
    })
}
