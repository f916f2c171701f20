use portfolio_shared::{ArtItem, AspectRatio};
use yew::prelude::*;

use super::art_modal::ArtKind;

#[derive(Properties, PartialEq)]
pub struct ArtTileProps {
    pub item: ArtItem,
    pub kind: ArtKind,
    pub on_open: Callback<ArtItem>,
}

/// Thumbnail in a photography or calligraphy grid.
#[function_component(ArtTile)]
pub fn art_tile(props: &ArtTileProps) -> Html {
    let item = &props.item;
    let onclick = {
        let item = item.clone();
        props.on_open.reform(move |_: MouseEvent| item.clone())
    };

    let frame = match item.aspect_ratio {
        AspectRatio::Square => "aspect-square",
        AspectRatio::Wide => "aspect-[4/3]",
        AspectRatio::Tall => "aspect-[3/4]",
    };
    let fit = match props.kind {
        ArtKind::Photo => "object-cover",
        ArtKind::Calligraphy => "object-contain bg-[#f5f0e6] p-4",
    };

    html! {
        <button
            type="button"
            {onclick}
            class="group relative block w-full mb-6 break-inside-avoid rounded-2xl overflow-hidden shadow-lg hover:shadow-2xl transition-all duration-300 text-left"
        >
            <div class={classes!("w-full", "overflow-hidden", frame)}>
                <img
                    src={item.url.clone()}
                    alt={item.title.clone()}
                    loading="lazy"
                    class={classes!("w-full", "h-full", "transition-transform", "duration-700", "group-hover:scale-105", fit)}
                />
            </div>
            <div class="absolute inset-0 bg-gradient-to-t from-black/70 via-transparent opacity-0 group-hover:opacity-100 transition-opacity flex items-end p-5">
                <div>
                    <h3 class="text-white font-bold text-lg">{ item.title.clone() }</h3>
                    if let Some(location) = &item.location {
                        <p class="text-white/80 text-xs mt-1">
                            <i class="fas fa-location-dot mr-1" aria-hidden="true"></i>
                            { location.clone() }
                        </p>
                    }
                </div>
            </div>
        </button>
    }
}
