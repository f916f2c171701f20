//! Language field selection for bilingual records.
//!
//! The unsuffixed key holds Chinese text and the `*En` key holds English.
//! `zh` prefers the unsuffixed key, `en` prefers the `*En` key, and either
//! falls back to the other when the preferred one is absent.

use crate::{
    lang::Lang,
    models::{ArtItem, BlogPost, Project, RawArtItem, RawBlogPost, RawProject},
};

/// Maps a raw bilingual record to its single-language display form.
pub trait Localize {
    type Output;

    fn localize(&self, lang: Lang) -> Self::Output;
}

/// Picks a text field. Empty strings count as absent.
pub fn pick_text(lang: Lang, default: &Option<String>, english: &Option<String>) -> Option<String> {
    let (preferred, fallback) = ordered(lang, default, english);
    non_empty(preferred).or_else(|| non_empty(fallback)).cloned()
}

/// Picks a list field. Presence decides; an empty list still counts.
pub fn pick_list(
    lang: Lang,
    default: &Option<Vec<String>>,
    english: &Option<Vec<String>>,
) -> Vec<String> {
    let (preferred, fallback) = ordered(lang, default, english);
    preferred
        .as_ref()
        .or(fallback.as_ref())
        .cloned()
        .unwrap_or_default()
}

fn ordered<'a, T>(lang: Lang, default: &'a T, english: &'a T) -> (&'a T, &'a T) {
    match lang {
        Lang::Zh => (default, english),
        Lang::En => (english, default),
    }
}

fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|text| !text.is_empty())
}

impl Localize for RawProject {
    type Output = Project;

    fn localize(&self, lang: Lang) -> Project {
        Project {
            id: self.id.clone(),
            title: pick_text(lang, &self.title, &self.title_en).unwrap_or_default(),
            description: pick_text(lang, &self.description, &self.description_en)
                .unwrap_or_default(),
            full_description: pick_text(lang, &self.full_description, &self.full_description_en),
            category: pick_text(lang, &self.category, &self.category_en).unwrap_or_default(),
            tags: pick_list(lang, &self.tags, &self.tags_en),
            features: pick_list(lang, &self.features, &self.features_en),
            image_url: self.image_url.clone().unwrap_or_default(),
            demo_url: self.demo_url.clone().unwrap_or_default(),
            repo_url: self.repo_url.clone().filter(|url| !url.is_empty()),
            article_content: pick_text(lang, &self.article_content, &self.article_content_en),
        }
    }
}

impl Localize for RawArtItem {
    type Output = ArtItem;

    fn localize(&self, lang: Lang) -> ArtItem {
        ArtItem {
            id: self.id.clone(),
            title: pick_text(lang, &self.title, &self.title_en).unwrap_or_default(),
            description: pick_text(lang, &self.description, &self.description_en),
            url: self.url.clone().unwrap_or_default(),
            aspect_ratio: self.aspect_ratio,
            location: pick_text(lang, &self.location, &self.location_en),
            content: pick_text(lang, &self.content, &self.content_en),
            date: pick_text(lang, &self.date, &self.date_en),
            technical_details: self.technical_details.clone(),
        }
    }
}

impl Localize for RawBlogPost {
    type Output = BlogPost;

    fn localize(&self, lang: Lang) -> BlogPost {
        BlogPost {
            id: self.id.clone(),
            title: pick_text(lang, &self.title, &self.title_en).unwrap_or_default(),
            excerpt: pick_text(lang, &self.excerpt, &self.excerpt_en).unwrap_or_default(),
            date: pick_text(lang, &self.date, &self.date_en).unwrap_or_default(),
            read_time: pick_text(lang, &self.read_time, &self.read_time_en).unwrap_or_default(),
            content: pick_text(lang, &self.content, &self.content_en).unwrap_or_default(),
            tags: pick_list(lang, &self.tags, &self.tags_en),
            image_url: self.image_url.clone().filter(|url| !url.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(text: &str) -> Option<String> {
        Some(text.to_string())
    }

    #[test]
    fn english_falls_back_to_default_field() {
        let raw = RawArtItem {
            id: "c1".to_string(),
            title: some("静"),
            title_en: None,
            ..RawArtItem::default()
        };
        assert_eq!(raw.localize(Lang::En).title, "静");
    }

    #[test]
    fn chinese_falls_back_to_english_field() {
        let raw = RawArtItem {
            id: "c1".to_string(),
            title: None,
            title_en: some("Silence"),
            ..RawArtItem::default()
        };
        assert_eq!(raw.localize(Lang::Zh).title, "Silence");
    }

    #[test]
    fn default_field_is_chinese_and_suffixed_field_is_english() {
        let raw = RawBlogPost {
            id: "b1".to_string(),
            title: some("数字花园"),
            title_en: some("Digital Garden"),
            read_time: some("5 分钟"),
            read_time_en: some("5 min read"),
            ..RawBlogPost::default()
        };

        let zh = raw.localize(Lang::Zh);
        assert_eq!(zh.title, "数字花园");
        assert_eq!(zh.read_time, "5 分钟");

        let en = raw.localize(Lang::En);
        assert_eq!(en.title, "Digital Garden");
        assert_eq!(en.read_time, "5 min read");
    }

    #[test]
    fn empty_text_never_wins_over_a_fallback() {
        assert_eq!(pick_text(Lang::En, &some("中文"), &some("")), some("中文"));
        assert_eq!(pick_text(Lang::Zh, &some(""), &some("English")), some("English"));
        assert_eq!(pick_text(Lang::Zh, &None, &None), None);
    }

    #[test]
    fn lists_are_chosen_by_presence() {
        let default = Some(vec!["中文".to_string()]);
        let english = Some(Vec::new());
        assert!(pick_list(Lang::En, &default, &english).is_empty());
        assert_eq!(pick_list(Lang::En, &default, &None), vec!["中文".to_string()]);
        assert!(pick_list(Lang::Zh, &None, &None).is_empty());
    }

    #[test]
    fn missing_fields_stay_absent() {
        let raw = RawProject {
            id: "9".to_string(),
            title_en: some("Only English"),
            ..RawProject::default()
        };
        let project = raw.localize(Lang::Zh);
        assert_eq!(project.title, "Only English");
        assert_eq!(project.description, "");
        assert_eq!(project.full_description, None);
        assert!(project.features.is_empty());
        assert_eq!(project.repo_url, None);
    }
}
