#[cfg(test)]
mod tests {
    use portfolio_cli::{commands, utils};
    use portfolio_shared::{
        content_store::{FileKvStore, KvStore, MemoryKvStore},
        Collection, Lang,
    };
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn validate_accepts_bilingual_projects() {
        let body = r#"[
            {"id": "1", "title": "生态追踪", "titleEn": "EcoTrack", "tags": ["React"]},
            {"id": "2", "titleEn": "Only English"}
        ]"#;
        let value = utils::validate_collection(Collection::Projects, body).expect("valid");
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn validate_rejects_untitled_records() {
        let body = r#"[{"id": "1", "title": "  ", "descriptionEn": "no title"}]"#;
        let err = utils::validate_collection(Collection::Blog, body).expect_err("untitled");
        assert!(err.to_string().contains("titleEn"));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let body = r#"[{"id": "p1", "title": "山"}, {"id": "p1", "title": "水"}]"#;
        let err = utils::validate_collection(Collection::Photography, body).expect_err("dupes");
        assert!(err.to_string().contains("duplicate id `p1`"));
    }

    #[test]
    fn validate_rejects_non_arrays_and_wrong_shapes() {
        assert!(utils::validate_collection(Collection::Projects, r#"{"id": "1"}"#).is_err());
        assert!(utils::validate_collection(Collection::Projects, "not json").is_err());
        let wrong_shape = r#"[{"id": "1", "title": "x", "tags": "not-a-list"}]"#;
        assert!(utils::validate_collection(Collection::Projects, wrong_shape).is_err());
        let bad_ratio = r#"[{"id": "1", "title": "x", "aspectRatio": "round"}]"#;
        assert!(utils::validate_collection(Collection::Calligraphy, bad_ratio).is_err());
    }

    #[test]
    fn empty_collection_is_valid() {
        let value = utils::validate_collection(Collection::Calligraphy, "[]").expect("empty");
        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn seed_writes_present_collection_files() {
        let content = tempfile::tempdir().expect("content dir");
        let kv = tempfile::tempdir().expect("kv dir");
        std::fs::write(
            content.path().join("blog.json"),
            r#"[{"id": "b1", "title": "根", "titleEn": "Roots"}]"#,
        )
        .expect("write blog");
        std::fs::write(content.path().join("projects.json"), "[]").expect("write projects");

        let written = commands::seed::run(kv.path(), content.path())
            .await
            .expect("seed");
        assert_eq!(written, vec![Collection::Projects, Collection::Blog]);

        let store = FileKvStore::new(kv.path());
        assert_eq!(store.keys().await.expect("keys"), vec!["blog", "projects"]);
        let blog = commands::get::stored_or_empty(&store, Collection::Blog)
            .await
            .expect("get blog");
        assert_eq!(blog[0]["titleEn"], "Roots");
    }

    #[tokio::test]
    async fn seed_stops_on_invalid_file() {
        let content = tempfile::tempdir().expect("content dir");
        let kv = tempfile::tempdir().expect("kv dir");
        std::fs::write(content.path().join("photography.json"), r#"[{"id": ""}]"#)
            .expect("write photography");

        assert!(commands::seed::run(kv.path(), content.path()).await.is_err());
        let store = FileKvStore::new(kv.path());
        assert!(store.keys().await.expect("keys").is_empty());
    }

    #[tokio::test]
    async fn missing_collection_reads_as_empty_array() {
        let store = MemoryKvStore::new();
        let value = commands::get::stored_or_empty(&store, Collection::Calligraphy)
            .await
            .expect("get");
        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn fetch_localizes_remote_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "1", "title": "生态追踪", "titleEn": "EcoTrack",
                 "description": "追踪碳足迹", "descriptionEn": "Track carbon"}
            ])))
            .mount(&server)
            .await;

        let zh = commands::fetch::fetch_localized(&server.uri(), Collection::Projects, Lang::Zh)
            .await
            .expect("fetch zh");
        assert_eq!(zh[0]["title"], "生态追踪");

        let en = commands::fetch::fetch_localized(&server.uri(), Collection::Projects, Lang::En)
            .await
            .expect("fetch en");
        assert_eq!(en[0]["description"], "Track carbon");
    }

    #[tokio::test]
    async fn fetch_surfaces_cold_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(
            commands::fetch::fetch_localized(&server.uri(), Collection::Blog, Lang::En)
                .await
                .is_err()
        );
    }
}
