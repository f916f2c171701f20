use portfolio_shared::View;
use yew::prelude::*;

use crate::{
    components::{language_toggle::LanguageToggle, theme_toggle::ThemeToggle},
    i18n::NavTexts,
    language_context::use_texts,
    navigation_context::use_navigator,
};

const NAV_VIEWS: [View; 4] = [View::Projects, View::Photography, View::Calligraphy, View::Blog];

fn nav_label(t: &NavTexts, view: View) -> &'static str {
    match view {
        View::Home => t.home,
        View::Projects | View::ProjectDetail => t.projects,
        View::Photography => t.photography,
        View::Calligraphy => t.calligraphy,
        View::Blog => t.blog,
    }
}

/// The detail page belongs to the projects section.
fn is_active(current: View, link: View) -> bool {
    current == link || (current == View::ProjectDetail && link == View::Projects)
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: View,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let mobile_menu_open = use_state(|| false);
    let navigator = use_navigator();
    let t = &use_texts().nav;
    let current = props.current;

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    let nav_click = |view: View| {
        let navigator = navigator.clone();
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            mobile_menu_open.set(false);
            navigator.go(view);
        })
    };

    let solid = current != View::Home;
    let nav_class = classes!(
        "fixed",
        "top-2",
        "left-2",
        "right-2",
        "sm:top-4",
        "sm:left-4",
        "sm:right-4",
        "md:left-8",
        "md:right-8",
        "z-50",
        "rounded-xl",
        "sm:rounded-2xl",
        "transition-all",
        "duration-300",
        if solid { "glass-panel shadow-lg py-2 px-4 sm:py-3 sm:px-6" } else { "bg-transparent py-3 px-3 sm:py-4 sm:px-4" }
    );

    let desktop_links = NAV_VIEWS.iter().map(|&view| {
        let link_class = if is_active(current, view) {
            "bg-slate-900 text-white dark:bg-white dark:text-slate-900"
        } else {
            "text-slate-700 dark:text-slate-300 hover:bg-white/50 dark:hover:bg-white/10 hover:text-emerald-700 dark:hover:text-emerald-400"
        };
        html! {
            <button
                key={view.as_str()}
                type="button"
                class={classes!("px-3", "lg:px-4", "py-2", "rounded-full", "text-xs", "lg:text-sm", "font-medium", "transition-all", link_class)}
                aria-current={is_active(current, view).then_some("page")}
                onclick={nav_click(view)}
            >
                { nav_label(t, view) }
            </button>
        }
    });

    let mobile_links = NAV_VIEWS.iter().map(|&view| {
        html! {
            <button
                key={view.as_str()}
                type="button"
                class="px-4 py-3 rounded-xl hover:bg-white/40 dark:hover:bg-white/10 text-slate-800 dark:text-slate-100 font-medium transition-colors text-left"
                onclick={nav_click(view)}
            >
                { nav_label(t, view) }
            </button>
        }
    });

    html! {
        <nav class={nav_class}>
            <div class="max-w-7xl mx-auto">
                <div class="flex justify-between items-center">
                    <button
                        type="button"
                        class="flex items-center space-x-1.5 sm:space-x-2 group focus:outline-none"
                        onclick={nav_click(View::Home)}
                        aria-label={t.home}
                    >
                        <span class="text-base sm:text-xl font-bold tracking-tight text-slate-900 dark:text-white">
                            { "Eververdants" }
                        </span>
                    </button>

                    <div class="hidden md:flex items-center space-x-2">
                        <div class="flex items-center space-x-1">
                            { for desktop_links }
                        </div>
                        <div class="h-6 w-px bg-slate-300 dark:bg-slate-700 mx-2"></div>
                        <LanguageToggle />
                        <ThemeToggle />
                    </div>

                    <div class="flex items-center gap-2 md:hidden">
                        <LanguageToggle />
                        <ThemeToggle />
                        <button
                            type="button"
                            class="p-2 rounded-full bg-white/20 backdrop-blur-md text-slate-800 dark:text-slate-200"
                            onclick={toggle_mobile_menu}
                            aria-label={t.toggle_menu}
                            aria-expanded={(*mobile_menu_open).to_string()}
                        >
                            <i class={classes!("fas", if *mobile_menu_open { "fa-xmark" } else { "fa-bars" }, "fa-lg")} aria-hidden="true"></i>
                        </button>
                    </div>
                </div>
            </div>

            if *mobile_menu_open {
                <div class="md:hidden mt-4 glass-card rounded-2xl p-4">
                    <div class="flex flex-col space-y-2">
                        { for mobile_links }
                    </div>
                </div>
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_view_highlights_projects_link() {
        assert!(is_active(View::ProjectDetail, View::Projects));
        assert!(is_active(View::Blog, View::Blog));
        assert!(!is_active(View::Home, View::Projects));
        assert!(!is_active(View::ProjectDetail, View::Blog));
    }
}
