use yew::prelude::*;

use crate::{language_context::use_texts, utils};

const THEME_KEY: &str = "theme";

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ThemeToggleProps {
        class,
    } = props;
    let t = &use_texts().nav;
    let theme_state = use_state(utils::has_dark_class);

    let onclick = {
        let theme_state = theme_state.clone();
        Callback::from(move |_| {
            let dark = !*theme_state;
            utils::set_dark_class(dark);
            utils::write_storage(THEME_KEY, if dark { "dark" } else { "light" });
            theme_state.set(dark);
        })
    };

    let label = if *theme_state { t.switch_to_light } else { t.switch_to_dark };
    let icon_class = if *theme_state { "fa-sun" } else { "fa-moon" };

    let button_class = classes!(
        "p-2.5",
        "rounded-full",
        "hover:bg-white/40",
        "dark:hover:bg-black/40",
        "text-slate-700",
        "dark:text-slate-300",
        "transition-colors",
        class.clone()
    );

    html! {
        <button
            type="button"
            class={button_class}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={(*theme_state).to_string()}
        >
            <i class={classes!("fas", icon_class, "fa-lg")} aria-hidden="true"></i>
            <span class="sr-only">{ label }</span>
        </button>
    }
}

/// Restores the saved theme before the first render.
pub fn apply_stored_theme() {
    if let Some(theme) = utils::read_storage(THEME_KEY) {
        utils::set_dark_class(theme == "dark");
    }
}
