//! Interface strings for both display languages.

mod en;
mod zh_cn;

use portfolio_shared::Lang;

pub struct Texts {
    pub common: CommonTexts,
    pub nav: NavTexts,
    pub hero: HeroTexts,
    pub projects: ProjectTexts,
    pub photography: PhotographyTexts,
    pub calligraphy: CalligraphyTexts,
    pub blog: BlogTexts,
    pub muse: MuseTexts,
    pub footer: FooterTexts,
}

pub struct CommonTexts {
    pub loading: &'static str,
    pub no_data: &'static str,
    pub no_data_desc: &'static str,
    pub load_failed: &'static str,
    pub close: &'static str,
}

pub struct NavTexts {
    pub home: &'static str,
    pub projects: &'static str,
    pub photography: &'static str,
    pub calligraphy: &'static str,
    pub blog: &'static str,
    pub toggle_language: &'static str,
    pub toggle_menu: &'static str,
    pub switch_to_light: &'static str,
    pub switch_to_dark: &'static str,
}

pub struct HeroTexts {
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub intro: &'static str,
    pub intro_desc: &'static str,
    pub view_projects: &'static str,
    pub view_gallery: &'static str,
    pub card_code: &'static str,
    pub card_code_desc: &'static str,
    pub card_photo: &'static str,
    pub card_ink: &'static str,
}

pub struct ProjectTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub archive_title: &'static str,
    pub archive_subtitle: &'static str,
    pub view_all: &'static str,
    pub all: &'static str,
    pub demo: &'static str,
    pub source: &'static str,
    pub features: &'static str,
    pub tech: &'static str,
    pub back: &'static str,
    pub not_found: &'static str,
    pub not_found_desc: &'static str,
}

pub struct PhotographyTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub gallery_title: &'static str,
    pub gallery_subtitle: &'static str,
    pub view_gallery: &'static str,
    pub tech_details: &'static str,
    pub download: &'static str,
    pub camera: &'static str,
    pub lens: &'static str,
    pub aperture: &'static str,
    pub shutter: &'static str,
    pub iso: &'static str,
    pub license: &'static str,
}

pub struct CalligraphyTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub gallery_title: &'static str,
    pub gallery_subtitle: &'static str,
    pub view_collection: &'static str,
    pub original_text: &'static str,
    pub meaning: &'static str,
    pub download: &'static str,
    pub license: &'static str,
}

pub struct BlogTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub read_all: &'static str,
    pub read_full: &'static str,
    pub back: &'static str,
    pub close: &'static str,
    pub by: &'static str,
}

pub struct MuseTexts {
    pub title: &'static str,
    pub powered_by: &'static str,
    pub greeting: &'static str,
    pub placeholder: &'static str,
    pub send: &'static str,
    pub error: &'static str,
}

pub struct FooterTexts {
    pub made_with: &'static str,
    pub and: &'static str,
}

pub fn texts(lang: Lang) -> &'static Texts {
    match lang {
        Lang::En => &en::TEXTS,
        Lang::Zh => &zh_cn::TEXTS,
    }
}

pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}
