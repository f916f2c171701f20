use portfolio_shared::{markup, BlogPost};
use yew::prelude::*;

use crate::{
    components::{art_modal::use_modal_close, markup_view::MarkupView},
    language_context::use_texts,
};

#[derive(Properties, PartialEq)]
pub struct BlogModalProps {
    pub post: BlogPost,
    pub on_close: Callback<()>,
}

/// Full-screen reader for one journal entry.
#[function_component(BlogModal)]
pub fn blog_modal(props: &BlogModalProps) -> Html {
    let t = &use_texts().blog;
    let (closing, close) = use_modal_close(props.on_close.clone());
    let post = &props.post;
    let blocks = use_memo(post.content.clone(), |content| markup::parse_blog(content));

    let animation = if closing { "animate-slide-out" } else { "animate-slide-in" };

    html! {
        <div
            class={classes!("fixed", "inset-0", "z-[60]", "overflow-y-auto", "bg-white", "dark:bg-slate-950", animation)}
            role="dialog"
            aria-modal="true"
        >
            <div class="sticky top-0 z-10 flex items-center justify-between px-4 sm:px-8 py-4 bg-white/80 dark:bg-slate-950/80 backdrop-blur-md border-b border-slate-200 dark:border-slate-800">
                <button
                    type="button"
                    class="inline-flex items-center gap-2 text-slate-700 dark:text-slate-200 hover:text-emerald-600"
                    onclick={close.reform(|_: MouseEvent| ())}
                >
                    <i class="fas fa-chevron-left" aria-hidden="true"></i>
                    <span class="text-sm font-bold hidden sm:inline">{ t.back }</span>
                </button>
            </div>

            if let Some(image_url) = &post.image_url {
                <div class="h-[40vh] overflow-hidden">
                    <img src={image_url.clone()} alt={post.title.clone()} class="w-full h-full object-cover" />
                </div>
            }

            <article class="max-w-3xl mx-auto px-4 sm:px-6 py-12">
                <div class="flex flex-wrap items-center gap-3 text-sm text-slate-500 dark:text-slate-400 mb-4">
                    <span>{ post.date.clone() }</span>
                    <span>{ "·" }</span>
                    <span>{ post.read_time.clone() }</span>
                </div>
                <h1 class="text-3xl md:text-5xl font-bold text-slate-900 dark:text-white mb-4 leading-tight">
                    { post.title.clone() }
                </h1>
                <p class="text-sm text-slate-500 mb-8">{ format!("{} Eververdants", t.by) }</p>
                <div class="flex flex-wrap gap-2 mb-10">
                    { for post.tags.iter().map(|tag| html! {
                        <span class="px-3 py-1 rounded-full text-xs font-semibold bg-emerald-50 text-emerald-700 dark:bg-emerald-900/30 dark:text-emerald-300">
                            { tag.clone() }
                        </span>
                    }) }
                </div>
                <MarkupView blocks={(*blocks).clone()} />
                <div class="mt-12 text-center">
                    <button
                        type="button"
                        class="px-6 py-3 rounded-full bg-slate-900 dark:bg-white text-white dark:text-slate-900 font-semibold"
                        onclick={close.reform(|_: MouseEvent| ())}
                    >
                        { t.close }
                    </button>
                </div>
            </article>
        </div>
    }
}
