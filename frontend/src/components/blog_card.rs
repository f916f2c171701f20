use portfolio_shared::BlogPost;
use yew::prelude::*;

use crate::language_context::use_texts;

#[derive(Properties, PartialEq)]
pub struct BlogCardProps {
    pub post: BlogPost,
    pub on_open: Callback<BlogPost>,
}

#[function_component(BlogCard)]
pub fn blog_card(props: &BlogCardProps) -> Html {
    let t = &use_texts().blog;
    let post = &props.post;
    let onclick = {
        let post = post.clone();
        props.on_open.reform(move |_: MouseEvent| post.clone())
    };

    html! {
        <article
            {onclick}
            class="group glass-card rounded-3xl overflow-hidden cursor-pointer hover:-translate-y-1 hover:shadow-2xl transition-all duration-300 flex flex-col"
        >
            if let Some(image_url) = &post.image_url {
                <div class="h-52 overflow-hidden">
                    <img
                        src={image_url.clone()}
                        alt={post.title.clone()}
                        loading="lazy"
                        class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105"
                    />
                </div>
            }
            <div class="p-6 flex-1 flex flex-col">
                <div class="flex items-center gap-3 text-xs text-slate-500 dark:text-slate-400 mb-3">
                    <span>{ post.date.clone() }</span>
                    <span>{ "·" }</span>
                    <span>{ post.read_time.clone() }</span>
                </div>
                <h3 class="text-xl font-bold text-slate-900 dark:text-white mb-3 group-hover:text-emerald-600 dark:group-hover:text-emerald-400 transition-colors">
                    { post.title.clone() }
                </h3>
                <p class="text-slate-600 dark:text-slate-400 text-sm leading-relaxed flex-1 line-clamp-3">
                    { post.excerpt.clone() }
                </p>
                <span class="mt-5 inline-flex items-center gap-2 text-sm font-semibold text-emerald-600 dark:text-emerald-400">
                    { t.read_full }
                    <i class="fas fa-arrow-right text-xs transition-transform group-hover:translate-x-1" aria-hidden="true"></i>
                </span>
            </div>
        </article>
    }
}
