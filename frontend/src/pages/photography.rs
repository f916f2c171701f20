use portfolio_shared::Collection;
use yew::prelude::*;

use super::pending_view;
use crate::{
    components::{art_grid::ArtGrid, art_modal::ArtKind, empty_state::EmptyState},
    hooks::use_collection,
    language_context::use_texts,
};

#[function_component(PhotographyPage)]
pub fn photography_page() -> Html {
    let texts = use_texts();
    let t = &texts.photography;
    let state = use_collection(Collection::Photography);

    let body = pending_view(&state, texts, texts.nav.photography).unwrap_or_else(|| {
        let items = state.items().map(|items| items.art_items()).unwrap_or_default();
        if items.is_empty() {
            html! { <EmptyState icon="fa-camera" /> }
        } else {
            html! { <ArtGrid items={items.to_vec()} kind={ArtKind::Photo} /> }
        }
    });

    html! {
        <section class="pt-32 pb-20 px-4 sm:px-6 min-h-screen">
            <div class="max-w-7xl mx-auto">
                <div class="mb-12 max-w-2xl">
                    <h1 class="text-4xl md:text-6xl font-bold text-slate-900 dark:text-white mb-4">{ t.gallery_title }</h1>
                    <p class="text-lg text-slate-600 dark:text-slate-400">{ t.gallery_subtitle }</p>
                </div>
                { body }
            </div>
        </section>
    }
}
