use portfolio_shared::{Origin, Project};
use yew::prelude::*;

use crate::navigation_context::use_navigator;

const VISIBLE_TAGS: usize = 3;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    /// Where the detail page's back button should return to.
    pub origin: Origin,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let navigator = use_navigator();
    let project = &props.project;

    let onclick = {
        let id = project.id.clone();
        let origin = props.origin;
        Callback::from(move |_| navigator.open_project(&id, origin))
    };

    let hidden_tags = project.tags.len().saturating_sub(VISIBLE_TAGS);

    html! {
        <div
            {onclick}
            class="group glass-card rounded-3xl overflow-hidden cursor-pointer hover:shadow-2xl transition-all duration-300 flex flex-col hover:-translate-y-2"
        >
            <div class="relative h-64 overflow-hidden">
                <img
                    src={project.image_url.clone()}
                    alt={project.title.clone()}
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-black/20 group-hover:bg-black/40 transition-colors"></div>
                <div class="absolute bottom-4 left-4">
                    <span class="px-3 py-1 bg-black/50 backdrop-blur-md rounded-lg text-xs font-bold text-white border border-white/20">
                        { project.category.clone() }
                    </span>
                </div>
            </div>

            <div class="p-6 flex-1 flex flex-col">
                <h3 class="text-2xl font-bold text-slate-900 dark:text-white mb-2 group-hover:text-emerald-600 dark:group-hover:text-emerald-400 transition-colors">
                    { project.title.clone() }
                </h3>
                <p class="text-slate-600 dark:text-slate-400 text-sm leading-relaxed mb-6 flex-1 line-clamp-3">
                    { project.description.clone() }
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    { for project.tags.iter().take(VISIBLE_TAGS).map(|tag| html! {
                        <span class="px-2.5 py-1 rounded-lg text-xs font-semibold bg-emerald-50 text-emerald-700 dark:bg-emerald-900/30 dark:text-emerald-300">
                            { tag.clone() }
                        </span>
                    }) }
                    if hidden_tags > 0 {
                        <span class="px-2.5 py-1 rounded-lg text-xs font-semibold bg-slate-100 text-slate-600 dark:bg-slate-800 dark:text-slate-400">
                            { format!("+{hidden_tags}") }
                        </span>
                    }
                </div>
            </div>
        </div>
    }
}
