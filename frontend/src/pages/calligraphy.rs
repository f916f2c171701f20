use portfolio_shared::Collection;
use yew::prelude::*;

use super::pending_view;
use crate::{
    components::{art_grid::ArtGrid, art_modal::ArtKind, empty_state::EmptyState},
    hooks::use_collection,
    language_context::use_texts,
};

#[function_component(CalligraphyPage)]
pub fn calligraphy_page() -> Html {
    let texts = use_texts();
    let t = &texts.calligraphy;
    let state = use_collection(Collection::Calligraphy);

    let body = pending_view(&state, texts, texts.nav.calligraphy).unwrap_or_else(|| {
        let items = state.items().map(|items| items.art_items()).unwrap_or_default();
        if items.is_empty() {
            html! { <EmptyState icon="fa-pen-nib" /> }
        } else {
            html! { <ArtGrid items={items.to_vec()} kind={ArtKind::Calligraphy} /> }
        }
    });

    html! {
        <section class="pt-32 pb-20 px-4 sm:px-6 min-h-screen bg-[#faf7f0] dark:bg-transparent">
            <div class="max-w-7xl mx-auto">
                <div class="mb-12 max-w-2xl">
                    <h1 class="text-4xl md:text-6xl font-serif font-bold text-slate-900 dark:text-white mb-4">{ t.gallery_title }</h1>
                    <p class="text-lg text-slate-600 dark:text-slate-400">{ t.gallery_subtitle }</p>
                </div>
                { body }
            </div>
        </section>
    }
}
