use serde::{Deserialize, Serialize};

// 原始记录：默认字段为中文，`*En` 字段为英文

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    pub id: String,
    pub title: Option<String>,
    pub title_en: Option<String>,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub full_description: Option<String>,
    pub full_description_en: Option<String>,
    pub category: Option<String>,
    pub category_en: Option<String>,
    pub tags: Option<Vec<String>>,
    pub tags_en: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub features_en: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub article_content: Option<String>,
    pub article_content_en: Option<String>,
}

/// Photography and calligraphy share this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArtItem {
    pub id: String,
    pub title: Option<String>,
    pub title_en: Option<String>,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    pub location: Option<String>,
    pub location_en: Option<String>,
    pub content: Option<String>,
    pub content_en: Option<String>,
    pub date: Option<String>,
    pub date_en: Option<String>,
    pub technical_details: Option<TechnicalDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlogPost {
    pub id: String,
    pub title: Option<String>,
    pub title_en: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_en: Option<String>,
    pub date: Option<String>,
    pub date_en: Option<String>,
    pub read_time: Option<String>,
    pub read_time_en: Option<String>,
    pub content: Option<String>,
    pub content_en: Option<String>,
    pub tags: Option<Vec<String>>,
    pub tags_en: Option<Vec<String>>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    #[default]
    Square,
    Wide,
    Tall,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnicalDetails {
    pub camera: String,
    pub lens: String,
    pub aperture: String,
    pub shutter_speed: String,
    pub iso: String,
}

// 按语言选择后的展示模型

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub image_url: String,
    pub demo_url: String,
    pub repo_url: Option<String>,
    pub article_content: Option<String>,
}

impl Project {
    /// The long-form article, if it has any visible text.
    pub fn article(&self) -> Option<&str> {
        self.article_content
            .as_deref()
            .filter(|article| !article.trim().is_empty())
    }

    /// Body text for the detail page when there is no article.
    pub fn long_description(&self) -> &str {
        self.full_description
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(&self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub aspect_ratio: AspectRatio,
    pub location: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
    pub technical_details: Option<TechnicalDetails>,
}

impl ArtItem {
    /// File name offered when the artwork is downloaded.
    pub fn download_name(&self) -> String {
        let slug: String = self
            .title
            .chars()
            .map(|ch| if ch.is_alphanumeric() { ch } else { '-' })
            .collect();
        let slug = slug.trim_matches('-');
        if slug.is_empty() {
            format!("artwork-{}.jpg", self.id)
        } else {
            format!("{slug}-{}.jpg", self.id)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub content: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_project_reads_camel_case_bilingual_keys() {
        let raw: RawProject = serde_json::from_str(
            r#"{
                "id": "1",
                "title": "生态追踪",
                "titleEn": "EcoTrack",
                "fullDescriptionEn": "Long text",
                "tagsEn": ["React"],
                "demoUrl": "https://example.com",
                "unknownKey": true
            }"#,
        )
        .expect("parse raw project");

        assert_eq!(raw.title.as_deref(), Some("生态追踪"));
        assert_eq!(raw.title_en.as_deref(), Some("EcoTrack"));
        assert_eq!(raw.full_description_en.as_deref(), Some("Long text"));
        assert_eq!(raw.tags_en, Some(vec!["React".to_string()]));
        assert!(raw.tags.is_none());
    }

    #[test]
    fn art_item_defaults_aspect_ratio_and_partial_details() {
        let raw: RawArtItem = serde_json::from_str(
            r#"{"id": "p1", "url": "a.jpg", "technicalDetails": {"camera": "X100V", "iso": "200"}}"#,
        )
        .expect("parse raw art item");

        assert_eq!(raw.aspect_ratio, AspectRatio::Square);
        let details = raw.technical_details.expect("details present");
        assert_eq!(details.camera, "X100V");
        assert_eq!(details.lens, "");
        assert_eq!(details.iso, "200");
    }

    #[test]
    fn download_name_slugifies_title() {
        let item = ArtItem {
            id: "7".to_string(),
            title: "Misty Peaks".to_string(),
            description: None,
            url: "https://example.com/7.jpg".to_string(),
            aspect_ratio: AspectRatio::Wide,
            location: None,
            content: None,
            date: None,
            technical_details: None,
        };
        assert_eq!(item.download_name(), "Misty-Peaks-7.jpg");

        let untitled = ArtItem {
            title: String::new(),
            ..item
        };
        assert_eq!(untitled.download_name(), "artwork-7.jpg");
    }
}
