use yew::prelude::*;

use crate::language_context::{use_texts, LanguageAction, LanguageContext};

#[derive(Properties, PartialEq)]
pub struct LanguageToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LanguageToggle)]
pub fn language_toggle(props: &LanguageToggleProps) -> Html {
    let language = use_context::<LanguageContext>();
    let t = &use_texts().nav;

    let onclick = Callback::from(move |_| {
        if let Some(language) = &language {
            language.dispatch(LanguageAction::Toggle);
        }
    });

    html! {
        <button
            type="button"
            class={classes!(
                "p-2.5",
                "rounded-full",
                "hover:bg-white/40",
                "dark:hover:bg-black/40",
                "text-slate-700",
                "dark:text-slate-300",
                "transition-colors",
                props.class.clone()
            )}
            {onclick}
            aria-label={t.toggle_language}
            title={t.toggle_language}
        >
            <i class="fas fa-language fa-lg" aria-hidden="true"></i>
        </button>
    }
}
