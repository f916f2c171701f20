use gloo_timers::callback::Timeout;
use portfolio_shared::ArtItem;
use yew::prelude::*;

use crate::{language_context::use_texts, utils};

/// Length of the modal's closing animation.
pub const CLOSE_ANIMATION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtKind {
    Photo,
    Calligraphy,
}

/// Locks page scrolling while mounted and plays the close animation before
/// handing control back.
#[hook]
pub fn use_modal_close(on_close: Callback<()>) -> (bool, Callback<()>) {
    let closing = use_state(|| false);

    use_effect_with((), |_| {
        utils::set_body_scroll_locked(true);
        || utils::set_body_scroll_locked(false)
    });

    let close = {
        let closing = closing.clone();
        Callback::from(move |()| {
            if *closing {
                return;
            }
            closing.set(true);
            let on_close = on_close.clone();
            Timeout::new(CLOSE_ANIMATION_MS, move || on_close.emit(())).forget();
        })
    };

    (*closing, close)
}

#[derive(Properties, PartialEq)]
pub struct ArtModalProps {
    pub item: ArtItem,
    pub kind: ArtKind,
    pub on_close: Callback<()>,
}

#[function_component(ArtModal)]
pub fn art_modal(props: &ArtModalProps) -> Html {
    let texts = use_texts();
    let downloading = use_state(|| false);
    let (closing, close) = use_modal_close(props.on_close.clone());
    let item = &props.item;

    let on_download = {
        let downloading = downloading.clone();
        let url = item.url.clone();
        let file_name = item.download_name();
        Callback::from(move |_: MouseEvent| {
            if *downloading {
                return;
            }
            downloading.set(true);
            let downloading = downloading.clone();
            let url = url.clone();
            let file_name = file_name.clone();
            wasm_bindgen_futures::spawn_local(async move {
                utils::download_artwork(&url, &file_name).await;
                downloading.set(false);
            });
        })
    };

    let on_backdrop = close.reform(|_: MouseEvent| ());
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    let (download_label, license) = match props.kind {
        ArtKind::Photo => (texts.photography.download, texts.photography.license),
        ArtKind::Calligraphy => (texts.calligraphy.download, texts.calligraphy.license),
    };

    let details = match props.kind {
        ArtKind::Photo => photo_details(item, texts),
        ArtKind::Calligraphy => calligraphy_details(item, texts),
    };

    let animation = if closing { "animate-fade-out" } else { "animate-fade-in" };

    html! {
        <div
            class={classes!("fixed", "inset-0", "z-[60]", "flex", "items-center", "justify-center", "bg-black/80", "backdrop-blur-sm", "p-4", animation)}
            onclick={on_backdrop}
            role="dialog"
            aria-modal="true"
        >
            <div
                class="relative w-full max-w-6xl max-h-[90vh] overflow-y-auto bg-white dark:bg-slate-900 rounded-3xl shadow-2xl flex flex-col lg:flex-row"
                onclick={stop}
            >
                <button
                    type="button"
                    class="absolute top-4 right-4 z-10 p-2 rounded-full bg-black/50 text-white hover:bg-black/70"
                    onclick={close.reform(|_: MouseEvent| ())}
                    aria-label={texts.common.close}
                >
                    <i class="fas fa-xmark" aria-hidden="true"></i>
                </button>

                <div class="lg:w-2/3 bg-black flex items-center justify-center">
                    <img src={item.url.clone()} alt={item.title.clone()} class="max-h-[80vh] w-auto object-contain" />
                </div>

                <div class="lg:w-1/3 p-8 flex flex-col">
                    <h3 class="text-3xl font-bold text-slate-900 dark:text-white mb-4">{ item.title.clone() }</h3>
                    { details }
                    <div class="mt-auto pt-6">
                        <button
                            type="button"
                            class="w-full inline-flex items-center justify-center gap-2 px-5 py-3 rounded-xl bg-slate-900 dark:bg-white text-white dark:text-slate-900 font-semibold disabled:opacity-60"
                            onclick={on_download}
                            disabled={*downloading}
                        >
                            <i class={classes!("fas", if *downloading { "fa-spinner fa-spin" } else { "fa-download" })} aria-hidden="true"></i>
                            { download_label }
                        </button>
                        <p class="mt-3 text-xs text-center text-slate-500">{ license }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn photo_details(item: &ArtItem, texts: &crate::i18n::Texts) -> Html {
    let t = &texts.photography;
    let meta = [
        item.location.as_ref().map(|location| ("fa-location-dot", location.clone())),
        item.date.as_ref().map(|date| ("fa-calendar", date.clone())),
    ];

    html! {
        <>
            <div class="flex flex-wrap gap-4 text-sm text-slate-500 dark:text-slate-400 mb-4">
                { for meta.into_iter().flatten().map(|(icon, text)| html! {
                    <span class="inline-flex items-center gap-1.5">
                        <i class={classes!("fas", icon)} aria-hidden="true"></i>{ text }
                    </span>
                }) }
            </div>
            if let Some(description) = &item.description {
                <p class="text-slate-600 dark:text-slate-300 leading-relaxed mb-6">{ description.clone() }</p>
            }
            if let Some(details) = &item.technical_details {
                <div class="rounded-2xl bg-slate-50 dark:bg-slate-800/60 p-4">
                    <h4 class="text-xs font-bold uppercase tracking-wider text-slate-500 mb-3">{ t.tech_details }</h4>
                    <dl class="grid grid-cols-2 gap-3 text-sm">
                        { for [
                            (t.camera, &details.camera),
                            (t.lens, &details.lens),
                            (t.aperture, &details.aperture),
                            (t.shutter, &details.shutter_speed),
                            (t.iso, &details.iso),
                        ]
                        .into_iter()
                        .filter(|(_, value)| !value.is_empty())
                        .map(|(label, value)| html! {
                            <div>
                                <dt class="text-slate-500">{ label }</dt>
                                <dd class="font-medium text-slate-900 dark:text-white">{ value.clone() }</dd>
                            </div>
                        }) }
                    </dl>
                </div>
            }
        </>
    }
}

fn calligraphy_details(item: &ArtItem, texts: &crate::i18n::Texts) -> Html {
    let t = &texts.calligraphy;

    html! {
        <>
            if let Some(content) = &item.content {
                <div class="mb-6">
                    <div class="text-sm text-slate-400 uppercase tracking-wider mb-4">{ t.original_text }</div>
                    <p class="text-4xl font-serif text-slate-900 dark:text-white tracking-widest">{ content.clone() }</p>
                </div>
            }
            if let Some(description) = &item.description {
                <div>
                    <h4 class="text-xs font-bold uppercase tracking-wider text-slate-500 mb-2">{ t.meaning }</h4>
                    <p class="text-slate-600 dark:text-slate-300 leading-relaxed">{ description.clone() }</p>
                </div>
            }
        </>
    }
}
