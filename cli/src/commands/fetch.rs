use anyhow::{Context, Result};
use portfolio_shared::{Collection, ContentLoader, HttpSource, Lang, SystemClock};
use serde_json::Value;

pub async fn run(api_base: &str, collection: Collection, lang: Lang) -> Result<()> {
    let value = fetch_localized(api_base, collection, lang).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Loads `collection` from the content API and returns it localized.
pub async fn fetch_localized(api_base: &str, collection: Collection, lang: Lang) -> Result<Value> {
    let loader = ContentLoader::new(HttpSource::new(api_base), SystemClock);
    let items = loader
        .get_collection(collection, lang)
        .await
        .with_context(|| format!("failed to load {collection} from {api_base}"))?;

    tracing::info!("Fetched {} {collection} records ({lang})", items.len());
    Ok(items.into_json())
}
