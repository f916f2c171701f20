//! Content loading with a per-collection memo.
//!
//! The cache keeps the raw bilingual records and applies language selection
//! on every read, so one entry serves both languages. Entries younger than
//! the TTL are served without touching the source; older entries are only
//! returned when a fresh retrieval fails.

use std::{cell::RefCell, collections::HashMap, fmt, str::FromStr, time::Duration};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{
    collection::Collection,
    lang::Lang,
    localize::Localize,
    models::{ArtItem, BlogPost, Project, RawArtItem, RawBlogPost, RawProject},
};

/// Freshness window of a cache entry.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("network error while fetching {collection}: {message}")]
    Network { collection: Collection, message: String },
    #[error("HTTP {status} while fetching {collection}")]
    Status { collection: Collection, status: u16 },
    #[error("failed to decode {collection}: {message}")]
    Decode { collection: Collection, message: String },
    #[error("{collection} is not available from the bundled content")]
    Missing { collection: Collection },
}

/// Where raw collection bodies come from.
#[async_trait(?Send)]
pub trait ContentSource {
    /// Returns the raw JSON array body of one collection.
    async fn fetch(&self, collection: Collection) -> Result<String, ContentError>;
}

/// Millisecond wall clock, injectable for tests.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// Which source a loader is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceMode {
    #[default]
    Remote,
    Bundled,
}

impl FromStr for SourceMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "remote" | "" => Ok(SourceMode::Remote),
            "bundled" | "static" => Ok(SourceMode::Bundled),
            other => Err(format!("unknown content source `{other}` (expected remote or bundled)")),
        }
    }
}

/// A collection after language selection.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalizedCollection {
    Projects(Vec<Project>),
    Photography(Vec<ArtItem>),
    Calligraphy(Vec<ArtItem>),
    Blog(Vec<BlogPost>),
}

impl LocalizedCollection {
    pub fn collection(&self) -> Collection {
        match self {
            LocalizedCollection::Projects(_) => Collection::Projects,
            LocalizedCollection::Photography(_) => Collection::Photography,
            LocalizedCollection::Calligraphy(_) => Collection::Calligraphy,
            LocalizedCollection::Blog(_) => Collection::Blog,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LocalizedCollection::Projects(items) => items.len(),
            LocalizedCollection::Photography(items) | LocalizedCollection::Calligraphy(items) => {
                items.len()
            },
            LocalizedCollection::Blog(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display titles in collection order.
    pub fn titles(&self) -> Vec<&str> {
        match self {
            LocalizedCollection::Projects(items) => items.iter().map(|i| i.title.as_str()).collect(),
            LocalizedCollection::Photography(items) | LocalizedCollection::Calligraphy(items) => {
                items.iter().map(|i| i.title.as_str()).collect()
            },
            LocalizedCollection::Blog(items) => items.iter().map(|i| i.title.as_str()).collect(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        match self {
            LocalizedCollection::Projects(items) => items,
            _ => &[],
        }
    }

    pub fn art_items(&self) -> &[ArtItem] {
        match self {
            LocalizedCollection::Photography(items) | LocalizedCollection::Calligraphy(items) => {
                items
            },
            _ => &[],
        }
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        match self {
            LocalizedCollection::Blog(items) => items,
            _ => &[],
        }
    }

    pub fn into_json(self) -> serde_json::Value {
        let value = match self {
            LocalizedCollection::Projects(items) => serde_json::to_value(items),
            LocalizedCollection::Photography(items) | LocalizedCollection::Calligraphy(items) => {
                serde_json::to_value(items)
            },
            LocalizedCollection::Blog(items) => serde_json::to_value(items),
        };
        value.unwrap_or(serde_json::Value::Null)
    }
}

/// Decoded raw records of one collection.
#[derive(Debug, Clone)]
enum RawEntries {
    Projects(Vec<RawProject>),
    Art(Vec<RawArtItem>),
    Blog(Vec<RawBlogPost>),
}

impl RawEntries {
    fn decode(collection: Collection, body: &str) -> Result<Self, ContentError> {
        match collection {
            Collection::Projects => decode_list(collection, body).map(RawEntries::Projects),
            Collection::Photography | Collection::Calligraphy => {
                decode_list(collection, body).map(RawEntries::Art)
            },
            Collection::Blog => decode_list(collection, body).map(RawEntries::Blog),
        }
    }

    fn localize(&self, collection: Collection, lang: Lang) -> LocalizedCollection {
        match self {
            RawEntries::Projects(records) => {
                LocalizedCollection::Projects(localize_all(records, lang))
            },
            RawEntries::Art(records) if collection == Collection::Calligraphy => {
                LocalizedCollection::Calligraphy(localize_all(records, lang))
            },
            RawEntries::Art(records) => LocalizedCollection::Photography(localize_all(records, lang)),
            RawEntries::Blog(records) => LocalizedCollection::Blog(localize_all(records, lang)),
        }
    }
}

fn decode_list<R: DeserializeOwned>(
    collection: Collection,
    body: &str,
) -> Result<Vec<R>, ContentError> {
    serde_json::from_str(body).map_err(|err| ContentError::Decode {
        collection,
        message: err.to_string(),
    })
}

fn localize_all<R: Localize>(records: &[R], lang: Lang) -> Vec<R::Output> {
    records.iter().map(|record| record.localize(lang)).collect()
}

struct CacheEntry {
    entries: RawEntries,
    fetched_at_ms: u64,
}

/// Loads collections from a [`ContentSource`] and memoizes them.
///
/// Only touched from one task; the cache borrow is never held across an
/// await point, so overlapping calls for the same collection may both hit
/// the source and the last successful one wins.
pub struct ContentLoader {
    source: Box<dyn ContentSource>,
    clock: Box<dyn Clock>,
    ttl: Duration,
    cache: RefCell<HashMap<Collection, CacheEntry>>,
}

impl fmt::Debug for ContentLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentLoader")
            .field("ttl", &self.ttl)
            .field("cached", &self.cache.borrow().keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl ContentLoader {
    pub fn new(source: impl ContentSource + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            source: Box::new(source),
            clock: Box::new(clock),
            ttl: CACHE_TTL,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns one collection in the requested language.
    ///
    /// A fresh entry is served from memory. Otherwise the source is asked; if
    /// that fails a stale entry is returned instead, and only a cold cache
    /// propagates the error.
    pub async fn get_collection(
        &self,
        collection: Collection,
        lang: Lang,
    ) -> Result<LocalizedCollection, ContentError> {
        if let Some(cached) = self.read_cache(collection, lang, true) {
            tracing::debug!(%collection, %lang, "content cache hit");
            return Ok(cached);
        }

        match self.retrieve(collection).await {
            Ok(entries) => {
                let localized = entries.localize(collection, lang);
                self.cache.borrow_mut().insert(collection, CacheEntry {
                    entries,
                    fetched_at_ms: self.clock.now_ms(),
                });
                tracing::debug!(%collection, items = localized.len(), "content cache refreshed");
                Ok(localized)
            },
            Err(err) => match self.read_cache(collection, lang, false) {
                Some(stale) => {
                    tracing::warn!(
                        %collection,
                        age_ms = self.entry_age_ms(collection).unwrap_or_default(),
                        error = %err,
                        "content retrieval failed; serving stale cache"
                    );
                    Ok(stale)
                },
                None => {
                    tracing::warn!(%collection, error = %err, "content retrieval failed");
                    Err(err)
                },
            },
        }
    }

    pub async fn projects(&self, lang: Lang) -> Result<Vec<Project>, ContentError> {
        let loaded = self.get_collection(Collection::Projects, lang).await?;
        Ok(loaded.projects().to_vec())
    }

    pub async fn photography(&self, lang: Lang) -> Result<Vec<ArtItem>, ContentError> {
        let loaded = self.get_collection(Collection::Photography, lang).await?;
        Ok(loaded.art_items().to_vec())
    }

    pub async fn calligraphy(&self, lang: Lang) -> Result<Vec<ArtItem>, ContentError> {
        let loaded = self.get_collection(Collection::Calligraphy, lang).await?;
        Ok(loaded.art_items().to_vec())
    }

    pub async fn blog_posts(&self, lang: Lang) -> Result<Vec<BlogPost>, ContentError> {
        let loaded = self.get_collection(Collection::Blog, lang).await?;
        Ok(loaded.blog_posts().to_vec())
    }

    /// Whether a fresh entry exists for `collection`.
    pub fn is_fresh(&self, collection: Collection) -> bool {
        self.entry_age_ms(collection)
            .is_some_and(|age| u128::from(age) < self.ttl.as_millis())
    }

    /// Drops every entry so the next read goes to the source.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    async fn retrieve(&self, collection: Collection) -> Result<RawEntries, ContentError> {
        let body = self.source.fetch(collection).await?;
        RawEntries::decode(collection, &body)
    }

    fn read_cache(
        &self,
        collection: Collection,
        lang: Lang,
        fresh_only: bool,
    ) -> Option<LocalizedCollection> {
        if fresh_only && !self.is_fresh(collection) {
            return None;
        }
        let cache = self.cache.borrow();
        let entry = cache.get(&collection)?;
        Some(entry.entries.localize(collection, lang))
    }

    fn entry_age_ms(&self, collection: Collection) -> Option<u64> {
        let cache = self.cache.borrow();
        let entry = cache.get(&collection)?;
        Some(self.clock.now_ms().saturating_sub(entry.fetched_at_ms))
    }
}

/// Collections held in memory, e.g. compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    bodies: HashMap<Collection, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, collection: Collection, body: impl Into<String>) -> Self {
        self.insert(collection, body);
        self
    }

    pub fn insert(&mut self, collection: Collection, body: impl Into<String>) {
        self.bodies.insert(collection, body.into());
    }

    /// Reads `<key>.json` for every collection present in `dir`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_dir(dir: &std::path::Path) -> std::io::Result<Self> {
        let mut source = Self::new();
        for collection in Collection::ALL {
            let path = dir.join(format!("{}.json", collection.key()));
            match std::fs::read_to_string(&path) {
                Ok(body) => source.insert(collection, body),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(source)
    }
}

#[async_trait(?Send)]
impl ContentSource for StaticSource {
    async fn fetch(&self, collection: Collection) -> Result<String, ContentError> {
        self.bodies
            .get(&collection)
            .cloned()
            .ok_or(ContentError::Missing {
                collection,
            })
    }
}

/// Reads collections from the content API over HTTP.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl ContentSource for HttpSource {
    async fn fetch(&self, collection: Collection) -> Result<String, ContentError> {
        let url = format!("{}{}", self.base_url, collection.api_path());
        let network = |err: reqwest::Error| ContentError::Network {
            collection,
            message: err.to_string(),
        };

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                collection,
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(network)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        collections::VecDeque,
        rc::Rc,
    };

    use super::*;

    #[derive(Clone, Default)]
    struct ManualClock(Rc<Cell<u64>>);

    impl ManualClock {
        fn advance(&self, by: Duration) {
            self.0.set(self.0.get() + by.as_millis() as u64);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            self.0.get()
        }
    }

    /// Replays scripted results and counts calls.
    #[derive(Clone, Default)]
    struct ScriptedSource {
        replies: Rc<RefCell<VecDeque<Result<String, ContentError>>>>,
        calls: Rc<Cell<usize>>,
    }

    impl ScriptedSource {
        fn reply(&self, reply: Result<&str, ContentError>) {
            self.replies
                .borrow_mut()
                .push_back(reply.map(str::to_string));
        }

        fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    #[async_trait(?Send)]
    impl ContentSource for ScriptedSource {
        async fn fetch(&self, collection: Collection) -> Result<String, ContentError> {
            self.calls.set(self.calls.get() + 1);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(ContentError::Missing {
                    collection,
                }))
        }
    }

    const PROJECTS: &str = r#"[
        {"id": "1", "title": "生态追踪", "titleEn": "EcoTrack", "tags": ["React"]},
        {"id": "2", "titleEn": "Verdant UI"}
    ]"#;

    const PROJECTS_V2: &str = r#"[{"id": "3", "title": "禅记", "titleEn": "Zen Notes"}]"#;

    fn offline(collection: Collection) -> ContentError {
        ContentError::Network {
            collection,
            message: "offline".to_string(),
        }
    }

    fn scripted_loader() -> (ContentLoader, ScriptedSource, ManualClock) {
        let source = ScriptedSource::default();
        let clock = ManualClock::default();
        clock.advance(Duration::from_secs(1_000));
        (ContentLoader::new(source.clone(), clock.clone()), source, clock)
    }

    #[tokio::test]
    async fn second_read_within_ttl_does_not_refetch() {
        let (loader, source, clock) = scripted_loader();
        source.reply(Ok(PROJECTS));

        let first = loader.projects(Lang::En).await.expect("first load");
        clock.advance(Duration::from_secs(299));
        let second = loader.projects(Lang::Zh).await.expect("cached load");

        assert_eq!(source.calls(), 1);
        assert_eq!(first[0].title, "EcoTrack");
        assert_eq!(second[0].title, "生态追踪");
        assert_eq!(second[1].title, "Verdant UI");
    }

    #[tokio::test]
    async fn entry_expires_at_exactly_the_ttl() {
        let (loader, source, clock) = scripted_loader();
        source.reply(Ok(PROJECTS));
        source.reply(Ok(PROJECTS_V2));

        loader.projects(Lang::En).await.expect("first load");
        clock.advance(CACHE_TTL);
        assert!(!loader.is_fresh(Collection::Projects));

        let refreshed = loader.projects(Lang::En).await.expect("refresh");
        assert_eq!(source.calls(), 2);
        assert_eq!(refreshed.len(), 1);
        assert_eq!(refreshed[0].title, "Zen Notes");
        assert!(loader.is_fresh(Collection::Projects));
    }

    #[tokio::test]
    async fn failed_refresh_returns_previous_data_unchanged() {
        let (loader, source, clock) = scripted_loader();
        source.reply(Ok(PROJECTS));
        source.reply(Err(offline(Collection::Projects)));

        let first = loader.projects(Lang::En).await.expect("first load");
        clock.advance(Duration::from_secs(600));
        let fallback = loader.projects(Lang::En).await.expect("stale fallback");

        assert_eq!(source.calls(), 2);
        assert_eq!(first, fallback);
    }

    #[tokio::test]
    async fn cold_cache_failure_propagates() {
        let (loader, source, _clock) = scripted_loader();
        source.reply(Err(offline(Collection::Blog)));

        let err = loader
            .get_collection(Collection::Blog, Lang::Zh)
            .await
            .expect_err("cold failure");
        assert_eq!(err, offline(Collection::Blog));
    }

    #[tokio::test]
    async fn undecodable_body_counts_as_retrieval_failure() {
        let (loader, source, clock) = scripted_loader();
        source.reply(Ok(PROJECTS));
        source.reply(Ok(r#"{"error": "oops"}"#));

        loader.projects(Lang::En).await.expect("first load");
        clock.advance(CACHE_TTL);
        let fallback = loader.projects(Lang::En).await.expect("stale fallback");
        assert_eq!(fallback.len(), 2);

        let (cold, cold_source, _) = scripted_loader();
        cold_source.reply(Ok("not json"));
        let err = cold.projects(Lang::En).await.expect_err("decode failure");
        assert!(matches!(err, ContentError::Decode { .. }));
    }

    #[tokio::test]
    async fn collections_are_cached_independently() {
        let (loader, source, _clock) = scripted_loader();
        source.reply(Ok(r#"[{"id": "p1", "titleEn": "Dawn", "url": "p1.jpg", "aspectRatio": "wide"}]"#));
        source.reply(Ok(r#"[{"id": "c1", "title": "静", "url": "c1.jpg", "content": "静水流深"}]"#));

        let photos = loader.photography(Lang::Zh).await.expect("photos");
        let ink = loader.calligraphy(Lang::En).await.expect("calligraphy");

        assert_eq!(source.calls(), 2);
        assert_eq!(photos[0].title, "Dawn");
        assert_eq!(ink[0].title, "静");
        assert_eq!(ink[0].content.as_deref(), Some("静水流深"));
        assert!(loader.is_fresh(Collection::Photography));
        assert!(!loader.is_fresh(Collection::Blog));
    }

    #[tokio::test]
    async fn every_title_is_filled_when_either_key_has_text() {
        let bodies = [
            (Collection::Projects, r#"[{"id":"1","title":"甲"},{"id":"2","titleEn":"B"}]"#),
            (Collection::Photography, r#"[{"id":"1","title":"甲"},{"id":"2","titleEn":"B"}]"#),
            (Collection::Calligraphy, r#"[{"id":"1","title":"甲"},{"id":"2","titleEn":"B"}]"#),
            (Collection::Blog, r#"[{"id":"1","title":"甲"},{"id":"2","titleEn":"B"}]"#),
        ];
        let source = bodies
            .into_iter()
            .fold(StaticSource::new(), |source, (collection, body)| source.with(collection, body));
        let loader = ContentLoader::new(source, ManualClock::default());

        for collection in Collection::ALL {
            for lang in [Lang::En, Lang::Zh] {
                let loaded = loader
                    .get_collection(collection, lang)
                    .await
                    .expect("static load");
                assert_eq!(loaded.collection(), collection);
                assert!(loaded.titles().iter().all(|title| !title.is_empty()));
            }
        }
    }

    #[tokio::test]
    async fn clear_forces_the_next_read_to_the_source() {
        let (loader, source, _clock) = scripted_loader();
        source.reply(Ok(PROJECTS));
        source.reply(Ok(PROJECTS_V2));

        loader.projects(Lang::En).await.expect("first load");
        loader.clear();
        let reloaded = loader.projects(Lang::En).await.expect("reload");

        assert_eq!(source.calls(), 2);
        assert_eq!(reloaded[0].id, "3");
    }

    #[tokio::test]
    async fn static_source_reports_missing_collections() {
        let source = StaticSource::new().with(Collection::Blog, "[]");
        assert_eq!(source.fetch(Collection::Blog).await, Ok("[]".to_string()));
        assert_eq!(
            source.fetch(Collection::Projects).await,
            Err(ContentError::Missing {
                collection: Collection::Projects
            })
        );
    }

    #[test]
    fn static_source_reads_collection_files_from_a_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("blog.json"), "[]").expect("write blog");
        let source = StaticSource::from_dir(dir.path()).expect("load dir");
        assert!(source.bodies.contains_key(&Collection::Blog));
        assert!(!source.bodies.contains_key(&Collection::Projects));
    }

    #[tokio::test]
    async fn repository_content_loads_in_both_languages() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../content");
        let source = StaticSource::from_dir(&dir).expect("read content dir");
        let loader = ContentLoader::new(source, ManualClock::default());

        for lang in [Lang::En, Lang::Zh] {
            for collection in Collection::ALL {
                let loaded = loader.get_collection(collection, lang).await.expect("decode");
                assert!(!loaded.is_empty(), "{collection} ({lang}) is empty");
                assert!(
                    loaded.titles().iter().all(|title| !title.is_empty()),
                    "{collection} ({lang}) has an untitled record"
                );
            }
        }

        let projects = loader.projects(Lang::En).await.expect("projects");
        assert!(projects[0].article().is_some());
    }

    #[test]
    fn source_mode_parses_configuration_values() {
        assert_eq!("bundled".parse(), Ok(SourceMode::Bundled));
        assert_eq!(" Remote ".parse(), Ok(SourceMode::Remote));
        assert_eq!("".parse(), Ok(SourceMode::Remote));
        assert!("ftp".parse::<SourceMode>().is_err());
    }

    mod http {
        use wiremock::{
            matchers::{method, path},
            Mock, MockServer, ResponseTemplate,
        };

        use super::*;

        #[tokio::test]
        async fn http_source_reads_the_collection_endpoint() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/api/projects"))
                .respond_with(ResponseTemplate::new(200).set_body_string(PROJECTS))
                .expect(1)
                .mount(&server)
                .await;

            let source = HttpSource::new(format!("{}/", server.uri()));
            let loader = ContentLoader::new(source, ManualClock::default());
            let projects = loader.projects(Lang::En).await.expect("http load");

            assert_eq!(projects.len(), 2);
            assert_eq!(projects[0].tags, vec!["React".to_string()]);
        }

        #[tokio::test]
        async fn http_source_maps_error_statuses() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/api/blog"))
                .respond_with(
                    ResponseTemplate::new(500).set_body_string(r#"{"error":"kv down"}"#),
                )
                .mount(&server)
                .await;

            let source = HttpSource::new(server.uri());
            let err = source
                .fetch(Collection::Blog)
                .await
                .expect_err("500 must fail");
            assert_eq!(err, ContentError::Status {
                collection: Collection::Blog,
                status: 500
            });
        }
    }
}
