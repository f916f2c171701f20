use yew::prelude::*;

use crate::language_context::use_texts;

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    /// Font Awesome icon class shown above the message.
    pub icon: &'static str,
    /// Replaces the generic "no data" description.
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    let t = &use_texts().common;

    html! {
        <div class="text-center py-20">
            <div class="inline-flex items-center justify-center p-4 bg-slate-100 dark:bg-slate-800 rounded-full mb-4">
                <i class={classes!("fas", props.icon, "fa-3x", "text-slate-400")} aria-hidden="true"></i>
            </div>
            <h3 class="text-xl font-bold text-slate-900 dark:text-white mb-2">{ t.no_data }</h3>
            <p class="text-slate-600 dark:text-slate-400">
                { props.message.clone().unwrap_or_else(|| t.no_data_desc.to_string()) }
            </p>
        </div>
    }
}
