use portfolio_shared::ArtItem;
use yew::prelude::*;

use super::{
    art_modal::{ArtKind, ArtModal},
    art_tile::ArtTile,
};

#[derive(Properties, PartialEq)]
pub struct ArtGridProps {
    pub items: Vec<ArtItem>,
    pub kind: ArtKind,
}

/// Masonry grid of artworks; clicking one opens it in [`ArtModal`].
#[function_component(ArtGrid)]
pub fn art_grid(props: &ArtGridProps) -> Html {
    let selected = use_state(|| None::<ArtItem>);

    let on_open = {
        let selected = selected.clone();
        Callback::from(move |item: ArtItem| selected.set(Some(item)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    html! {
        <>
            <div class="columns-1 sm:columns-2 lg:columns-3 gap-6">
                { for props.items.iter().map(|item| html! {
                    <ArtTile
                        key={item.id.clone()}
                        item={item.clone()}
                        kind={props.kind}
                        on_open={on_open.clone()}
                    />
                }) }
            </div>
            if let Some(item) = (*selected).clone() {
                <ArtModal {item} kind={props.kind} {on_close} />
            }
        </>
    }
}
