use portfolio_shared::{markup, Collection, Project};
use yew::prelude::*;

use super::pending_view;
use crate::{
    components::markup_view::MarkupView,
    hooks::use_collection,
    i18n::ProjectTexts,
    language_context::use_texts,
};

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub project_id: String,
    pub on_back: Callback<()>,
}

#[function_component(ProjectDetailPage)]
pub fn project_detail_page(props: &ProjectDetailProps) -> Html {
    let texts = use_texts();
    let t = &texts.projects;
    let state = use_collection(Collection::Projects);

    let back_button = html! {
        <button
            type="button"
            onclick={props.on_back.reform(|_: MouseEvent| ())}
            class="inline-flex items-center gap-2 mb-8 text-sm font-semibold text-slate-600 dark:text-slate-300 hover:text-emerald-600 dark:hover:text-emerald-400 transition-colors"
        >
            <i class="fas fa-arrow-left" aria-hidden="true"></i>
            { t.back }
        </button>
    };

    let body = match pending_view(&state, texts, texts.nav.projects) {
        Some(pending) => pending,
        None => {
            let project = state
                .items()
                .and_then(|items| items.projects().iter().find(|project| project.id == props.project_id));
            match project {
                Some(project) => render_project(project, t),
                None => html! {
                    <div class="text-center py-24">
                        <i class="fas fa-circle-question fa-3x text-slate-400 mb-6" aria-hidden="true"></i>
                        <h1 class="text-3xl font-bold text-slate-900 dark:text-white mb-3">{ t.not_found }</h1>
                        <p class="text-slate-600 dark:text-slate-400 mb-8">{ t.not_found_desc }</p>
                        <button
                            type="button"
                            onclick={props.on_back.reform(|_: MouseEvent| ())}
                            class="px-6 py-3 rounded-full bg-slate-900 dark:bg-white text-white dark:text-slate-900 font-semibold"
                        >
                            { t.back }
                        </button>
                    </div>
                },
            }
        },
    };

    html! {
        <section class="pt-28 pb-20 px-4 sm:px-6 min-h-screen">
            <div class="max-w-4xl mx-auto">
                { back_button }
                { body }
            </div>
        </section>
    }
}

fn render_project(project: &Project, t: &ProjectTexts) -> Html {
    let body = match project.article() {
        Some(article) => html! {
            <MarkupView blocks={markup::parse_article(article)} />
        },
        None => html! {
            <>
                <p class="text-lg text-slate-700 dark:text-slate-300 leading-relaxed mb-10 whitespace-pre-line">
                    { project.long_description().to_string() }
                </p>
                if !project.features.is_empty() {
                    <h2 class="text-2xl font-bold text-slate-900 dark:text-white mb-4">{ t.features }</h2>
                    <ul class="space-y-3">
                        { for project.features.iter().map(|feature| html! {
                            <li class="flex items-start gap-3 text-slate-700 dark:text-slate-300">
                                <i class="fas fa-check text-emerald-500 mt-1" aria-hidden="true"></i>
                                <span>{ feature.clone() }</span>
                            </li>
                        }) }
                    </ul>
                }
            </>
        },
    };

    html! {
        <article>
            <span class="inline-block px-3 py-1 mb-4 rounded-lg text-xs font-bold bg-emerald-50 text-emerald-700 dark:bg-emerald-900/30 dark:text-emerald-300">
                { project.category.clone() }
            </span>
            <h1 class="text-4xl md:text-5xl font-bold text-slate-900 dark:text-white mb-6 leading-tight">
                { project.title.clone() }
            </h1>
            <p class="text-xl text-slate-600 dark:text-slate-400 mb-8">{ project.description.clone() }</p>

            <div class="flex flex-wrap gap-3 mb-10">
                if !project.demo_url.is_empty() {
                    <a
                        href={project.demo_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-5 py-2.5 rounded-full bg-slate-900 dark:bg-white text-white dark:text-slate-900 text-sm font-semibold"
                    >
                        <i class="fas fa-arrow-up-right-from-square" aria-hidden="true"></i>
                        { t.demo }
                    </a>
                }
                if let Some(repo_url) = &project.repo_url {
                    <a
                        href={repo_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-5 py-2.5 rounded-full border border-slate-300 dark:border-slate-700 text-slate-700 dark:text-slate-200 text-sm font-semibold"
                    >
                        <i class="fab fa-github" aria-hidden="true"></i>
                        { t.source }
                    </a>
                }
            </div>

            <div class="rounded-3xl overflow-hidden shadow-2xl mb-12">
                <img src={project.image_url.clone()} alt={project.title.clone()} class="w-full object-cover" />
            </div>

            { body }

            if !project.tags.is_empty() {
                <div class="mt-12 pt-8 border-t border-slate-200 dark:border-slate-800">
                    <h2 class="text-sm font-bold uppercase tracking-wider text-slate-500 mb-4">{ t.tech }</h2>
                    <div class="flex flex-wrap gap-2">
                        { for project.tags.iter().map(|tag| html! {
                            <span class="px-3 py-1 rounded-lg text-sm bg-slate-100 dark:bg-slate-800 text-slate-700 dark:text-slate-300">
                                { tag.clone() }
                            </span>
                        }) }
                    </div>
                </div>
            }
        </article>
    }
}
