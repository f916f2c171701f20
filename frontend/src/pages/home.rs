use portfolio_shared::{Collection, Origin, View};
use yew::prelude::*;

use super::{blog::BlogList, pending_view};
use crate::{
    components::{
        art_grid::ArtGrid, art_modal::ArtKind, muse::CreativeMuse, project_card::ProjectCard,
        section_heading::SectionHeading,
    },
    hooks::use_collection,
    language_context::use_texts,
    navigation_context::use_navigator,
};

/// Number of items each featured section shows.
const FEATURED_COUNT: usize = 3;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <Hero />
            <FeaturedProjects />
            <FeaturedArt
                collection={Collection::Photography}
                kind={ArtKind::Photo}
                anchor="featured-photography"
            />
            <FeaturedArt
                collection={Collection::Calligraphy}
                kind={ArtKind::Calligraphy}
                anchor="featured-calligraphy"
            />
            <FeaturedBlog />
            <CreativeMuse />
        </>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let t = &use_texts().hero;
    let navigator = use_navigator();

    html! {
        <section class="relative min-h-screen flex items-center pt-24 pb-16 px-4 sm:px-6 overflow-hidden">
            <div class="absolute -top-24 -left-24 w-96 h-96 bg-emerald-300/30 dark:bg-emerald-600/20 rounded-full blur-3xl"></div>
            <div class="absolute bottom-0 right-0 w-[28rem] h-[28rem] bg-purple-300/30 dark:bg-purple-700/20 rounded-full blur-3xl"></div>

            <div class="relative max-w-7xl mx-auto w-full grid lg:grid-cols-2 gap-12 items-center">
                <div>
                    <p class="text-sm font-semibold tracking-widest uppercase text-emerald-600 dark:text-emerald-400 mb-4">
                        { format!("{} Eververdants", t.intro) }
                    </p>
                    <h1 class="text-5xl sm:text-6xl md:text-7xl font-bold text-slate-900 dark:text-white leading-tight mb-6">
                        { t.title }
                        <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-emerald-500 to-purple-500">
                            { t.title_highlight }
                        </span>
                    </h1>
                    <p class="text-lg text-slate-600 dark:text-slate-400 max-w-xl mb-10">{ t.intro_desc }</p>
                    <div class="flex flex-wrap gap-4">
                        <button
                            type="button"
                            onclick={navigator.go_callback(View::Projects)}
                            class="px-7 py-3.5 rounded-full bg-slate-900 dark:bg-white text-white dark:text-slate-900 font-semibold shadow-xl hover:-translate-y-0.5 transition-transform"
                        >
                            { t.view_projects }
                        </button>
                        <button
                            type="button"
                            onclick={navigator.go_callback(View::Calligraphy)}
                            class="px-7 py-3.5 rounded-full border border-slate-300 dark:border-slate-700 text-slate-800 dark:text-slate-100 font-semibold hover:bg-white/60 dark:hover:bg-slate-800/60 transition-colors"
                        >
                            { t.view_gallery }
                        </button>
                    </div>
                </div>

                <div class="hidden lg:grid grid-cols-2 gap-5">
                    <div class="glass-card rounded-3xl p-6 row-span-2 flex flex-col justify-end min-h-[18rem]">
                        <i class="fas fa-code fa-2x text-emerald-500 mb-4" aria-hidden="true"></i>
                        <h3 class="text-2xl font-bold text-slate-900 dark:text-white">{ t.card_code }</h3>
                        <p class="text-sm text-slate-600 dark:text-slate-400">{ t.card_code_desc }</p>
                    </div>
                    <div class="glass-card rounded-3xl p-6 flex items-center gap-4">
                        <i class="fas fa-camera fa-lg text-sky-500" aria-hidden="true"></i>
                        <span class="font-bold text-slate-900 dark:text-white">{ t.card_photo }</span>
                    </div>
                    <div class="glass-card rounded-3xl p-6 flex items-center gap-4">
                        <i class="fas fa-pen-nib fa-lg text-purple-500" aria-hidden="true"></i>
                        <span class="font-bold text-slate-900 dark:text-white">{ t.card_ink }</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(FeaturedProjects)]
fn featured_projects() -> Html {
    let texts = use_texts();
    let t = &texts.projects;
    let navigator = use_navigator();
    let state = use_collection(Collection::Projects);

    let body = pending_view(&state, texts, texts.nav.projects).unwrap_or_else(|| {
        let projects = state.items().map(|items| items.projects()).unwrap_or_default();
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for projects.iter().take(FEATURED_COUNT).map(|project| html! {
                    <ProjectCard key={project.id.clone()} project={project.clone()} origin={Origin::Home} />
                }) }
            </div>
        }
    });

    html! {
        <section id="featured-projects" class="py-20 px-4 sm:px-6 scroll-mt-24">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    title={t.title}
                    subtitle={t.subtitle}
                    action={Some((AttrValue::from(t.view_all), navigator.go_callback(View::Projects)))}
                />
                { body }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FeaturedArtProps {
    collection: Collection,
    kind: ArtKind,
    anchor: AttrValue,
}

#[function_component(FeaturedArt)]
fn featured_art(props: &FeaturedArtProps) -> Html {
    let texts = use_texts();
    let navigator = use_navigator();
    let state = use_collection(props.collection);

    let (title, subtitle, action, view, label) = match props.kind {
        ArtKind::Photo => (
            texts.photography.title,
            texts.photography.subtitle,
            texts.photography.view_gallery,
            View::Photography,
            texts.nav.photography,
        ),
        ArtKind::Calligraphy => (
            texts.calligraphy.title,
            texts.calligraphy.subtitle,
            texts.calligraphy.view_collection,
            View::Calligraphy,
            texts.nav.calligraphy,
        ),
    };

    let body = pending_view(&state, texts, label).unwrap_or_else(|| {
        let items = state.items().map(|items| items.art_items()).unwrap_or_default();
        let featured = items.iter().take(FEATURED_COUNT).cloned().collect::<Vec<_>>();
        html! { <ArtGrid items={featured} kind={props.kind} /> }
    });

    html! {
        <section id={props.anchor.clone()} class="py-20 px-4 sm:px-6 scroll-mt-24">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    {title}
                    {subtitle}
                    action={Some((AttrValue::from(action), navigator.go_callback(view)))}
                />
                { body }
            </div>
        </section>
    }
}

#[function_component(FeaturedBlog)]
fn featured_blog() -> Html {
    let texts = use_texts();
    let t = &texts.blog;
    let navigator = use_navigator();
    let state = use_collection(Collection::Blog);

    let body = pending_view(&state, texts, texts.nav.blog).unwrap_or_else(|| {
        let posts = state.items().map(|items| items.blog_posts()).unwrap_or_default();
        let featured = posts.iter().take(FEATURED_COUNT).cloned().collect::<Vec<_>>();
        html! { <BlogList posts={featured} /> }
    });

    html! {
        <section id="featured-blog" class="py-20 px-4 sm:px-6 scroll-mt-24">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    title={t.title}
                    subtitle={t.subtitle}
                    action={Some((AttrValue::from(t.read_all), navigator.go_callback(View::Blog)))}
                />
                { body }
            </div>
        </section>
    }
}
