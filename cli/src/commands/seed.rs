use std::path::Path;

use anyhow::{Context, Result};
use portfolio_shared::{content_store::FileKvStore, Collection};

use super::put::put_file;
use crate::utils::collection_file_name;

/// Stores every collection file present in `from`; returns the collections
/// written.
pub async fn run(kv_dir: &Path, from: &Path) -> Result<Vec<Collection>> {
    if !from.is_dir() {
        anyhow::bail!("{} is not a directory", from.display());
    }

    let store = FileKvStore::new(kv_dir);
    let mut written = Vec::new();
    for collection in Collection::ALL {
        let file = from.join(collection_file_name(collection));
        if !file.is_file() {
            tracing::warn!("Skipping {collection}: {} not found", file.display());
            continue;
        }
        put_file(&store, collection, &file)
            .await
            .with_context(|| format!("seeding {collection} failed"))?;
        written.push(collection);
    }

    tracing::info!("Seeded {} collections into {}", written.len(), kv_dir.display());
    Ok(written)
}
