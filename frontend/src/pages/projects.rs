use portfolio_shared::{Collection, Origin, Project};
use yew::prelude::*;

use super::pending_view;
use crate::{
    components::{empty_state::EmptyState, project_card::ProjectCard},
    hooks::use_collection,
    language_context::use_texts,
};

/// Distinct categories in order of first appearance.
fn categories(projects: &[Project]) -> Vec<String> {
    let mut seen = Vec::new();
    for project in projects {
        if !project.category.is_empty() && !seen.contains(&project.category) {
            seen.push(project.category.clone());
        }
    }
    seen
}

fn in_category<'a>(
    projects: &'a [Project],
    category: Option<&'a str>,
) -> impl Iterator<Item = &'a Project> {
    projects
        .iter()
        .filter(move |project| category.map_or(true, |category| project.category == category))
}

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let texts = use_texts();
    let t = &texts.projects;
    let state = use_collection(Collection::Projects);
    let selected = use_state(|| None::<String>);

    let chip = |label: String, value: Option<String>| {
        let active = *selected == value;
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(value.clone()))
        };
        let class = if active {
            classes!("bg-slate-900", "text-white", "dark:bg-white", "dark:text-slate-900", "shadow-lg")
        } else {
            classes!("bg-white/60", "dark:bg-slate-800/60", "text-slate-600", "dark:text-slate-300", "hover:bg-white", "dark:hover:bg-slate-700")
        };
        html! {
            <button
                type="button"
                {onclick}
                class={classes!("px-5", "py-2", "rounded-full", "text-sm", "font-semibold", "transition-all", class)}
            >
                { label }
            </button>
        }
    };

    let body = match pending_view(&state, texts, texts.nav.projects) {
        Some(pending) => pending,
        None => {
            let projects = state.items().map(|items| items.projects()).unwrap_or_default();
            if projects.is_empty() {
                html! { <EmptyState icon="fa-folder-open" /> }
            } else {
                html! {
                    <>
                        <div class="flex flex-wrap gap-3 mb-12">
                            { chip(t.all.to_string(), None) }
                            { for categories(projects).into_iter().map(|category| chip(category.clone(), Some(category))) }
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            { for in_category(projects, selected.as_deref()).map(|project| html! {
                                <ProjectCard key={project.id.clone()} project={project.clone()} origin={Origin::Projects} />
                            }) }
                        </div>
                    </>
                }
            }
        },
    };

    html! {
        <section class="pt-32 pb-20 px-4 sm:px-6 min-h-screen">
            <div class="max-w-7xl mx-auto">
                <div class="mb-12 max-w-2xl">
                    <h1 class="text-4xl md:text-6xl font-bold text-slate-900 dark:text-white mb-4">{ t.archive_title }</h1>
                    <p class="text-lg text-slate-600 dark:text-slate-400">{ t.archive_subtitle }</p>
                </div>
                { body }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: &str) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: String::new(),
            full_description: None,
            category: category.to_string(),
            tags: Vec::new(),
            features: Vec::new(),
            image_url: String::new(),
            demo_url: String::new(),
            repo_url: None,
            article_content: None,
        }
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let projects = [project("1", "Web"), project("2", "AI"), project("3", "Web"), project("4", "")];
        assert_eq!(categories(&projects), ["Web", "AI"]);
    }

    #[test]
    fn no_selection_shows_everything() {
        let projects = [project("1", "Web"), project("2", "AI"), project("3", "Web")];
        let ids = |category| {
            in_category(&projects, category)
                .map(|project| project.id.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(None), ["1", "2", "3"]);
        assert_eq!(ids(Some("Web")), ["1", "3"]);
        assert!(ids(Some("Games")).is_empty());
    }
}
