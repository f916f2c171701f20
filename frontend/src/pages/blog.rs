use portfolio_shared::{BlogPost, Collection};
use yew::prelude::*;

use super::pending_view;
use crate::{
    components::{blog_card::BlogCard, blog_modal::BlogModal, empty_state::EmptyState},
    hooks::use_collection,
    language_context::use_texts,
};

#[derive(Properties, PartialEq)]
pub struct BlogListProps {
    pub posts: Vec<BlogPost>,
}

/// Cards for a list of posts plus the reading modal.
#[function_component(BlogList)]
pub fn blog_list(props: &BlogListProps) -> Html {
    let open_post = use_state(|| None::<BlogPost>);

    let on_open = {
        let open_post = open_post.clone();
        Callback::from(move |post: BlogPost| open_post.set(Some(post)))
    };
    let on_close = {
        let open_post = open_post.clone();
        Callback::from(move |()| open_post.set(None))
    };

    html! {
        <>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for props.posts.iter().map(|post| html! {
                    <BlogCard key={post.id.clone()} post={post.clone()} on_open={on_open.clone()} />
                }) }
            </div>
            if let Some(post) = (*open_post).clone() {
                <BlogModal {post} {on_close} />
            }
        </>
    }
}

#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    let texts = use_texts();
    let t = &texts.blog;
    let state = use_collection(Collection::Blog);

    let body = pending_view(&state, texts, texts.nav.blog).unwrap_or_else(|| {
        let posts = state.items().map(|items| items.blog_posts()).unwrap_or_default();
        if posts.is_empty() {
            html! { <EmptyState icon="fa-book-open" /> }
        } else {
            html! { <BlogList posts={posts.to_vec()} /> }
        }
    });

    html! {
        <section class="pt-32 pb-20 px-4 sm:px-6 min-h-screen">
            <div class="max-w-7xl mx-auto">
                <div class="mb-12 max-w-2xl">
                    <h1 class="text-4xl md:text-6xl font-bold text-slate-900 dark:text-white mb-4">{ t.title }</h1>
                    <p class="text-lg text-slate-600 dark:text-slate-400">{ t.subtitle }</p>
                </div>
                { body }
            </div>
        </section>
    }
}
