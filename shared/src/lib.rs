//! Data model, content loading and view routing shared by the portfolio
//! frontend, the content API and the CLI.

pub mod bus;
pub mod collection;
pub mod content;
#[cfg(not(target_arch = "wasm32"))]
pub mod content_store;
pub mod lang;
pub mod localize;
pub mod markup;
pub mod models;
pub mod router;

pub use collection::{Collection, UnknownCollection};
pub use content::{
    Clock, ContentError, ContentLoader, ContentSource, LocalizedCollection, SourceMode,
    StaticSource, CACHE_TTL,
};
#[cfg(not(target_arch = "wasm32"))]
pub use content::{HttpSource, SystemClock};
pub use lang::{Lang, UnknownLang};
pub use localize::Localize;
pub use models::{
    ArtItem, AspectRatio, BlogPost, Project, RawArtItem, RawBlogPost, RawProject,
    TechnicalDetails,
};
pub use router::{NavCommand, NavSignal, Origin, ScrollEffect, View, ViewRouter};
