use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use portfolio_shared::{Collection, RawArtItem, RawBlogPost, RawProject};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Fields every record must carry, whatever its collection.
trait RecordIdentity {
    fn id(&self) -> &str;
    fn title(&self) -> Option<&str>;
    fn title_en(&self) -> Option<&str>;
}

macro_rules! record_identity {
    ($($ty:ty),*) => {
        $(impl RecordIdentity for $ty {
            fn id(&self) -> &str {
                &self.id
            }

            fn title(&self) -> Option<&str> {
                self.title.as_deref()
            }

            fn title_en(&self) -> Option<&str> {
                self.title_en.as_deref()
            }
        })*
    };
}

record_identity!(RawProject, RawArtItem, RawBlogPost);

/// Parses and checks a collection file before it is stored.
///
/// The body must be a JSON array of records of the collection's shape, every
/// record needs a non-empty `id` and at least one of `title` / `titleEn`, and
/// ids must be unique. Returns the parsed document as written.
pub fn validate_collection(collection: Collection, body: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(body).context("collection file is not valid JSON")?;
    if !value.is_array() {
        bail!("{collection}: expected a JSON array of records");
    }

    match collection {
        Collection::Projects => check_records::<RawProject>(collection, &value)?,
        Collection::Photography | Collection::Calligraphy => {
            check_records::<RawArtItem>(collection, &value)?
        },
        Collection::Blog => check_records::<RawBlogPost>(collection, &value)?,
    };
    Ok(value)
}

fn check_records<R>(collection: Collection, value: &Value) -> Result<usize>
where
    R: DeserializeOwned + RecordIdentity,
{
    let records: Vec<R> = serde_json::from_value(value.clone())
        .with_context(|| format!("{collection}: records do not match the expected shape"))?;

    let mut seen = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        let id = record.id().trim();
        if id.is_empty() {
            bail!("{collection}[{index}]: `id` must not be empty");
        }
        if is_blank(record.title()) && is_blank(record.title_en()) {
            bail!("{collection}[{index}] ({id}): needs `title` or `titleEn`");
        }
        if !seen.insert(id.to_string()) {
            bail!("{collection}: duplicate id `{id}`");
        }
    }
    Ok(records.len())
}

fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |text| text.trim().is_empty())
}

/// File name a collection is seeded from.
pub fn collection_file_name(collection: Collection) -> String {
    format!("{}.json", collection.key())
}
