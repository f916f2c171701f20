pub mod art_grid;
pub mod art_modal;
pub mod art_tile;
pub mod blog_card;
pub mod blog_modal;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod language_toggle;
pub mod loading_spinner;
pub mod markup_view;
pub mod muse;
pub mod project_card;
pub mod section_heading;
pub mod theme_toggle;
