use yew::prelude::*;

use crate::language_context::use_texts;

#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    let t = &use_texts().common;

    html! {
        <div class="text-center py-20" role="status" aria-live="polite" aria-busy="true">
            <div class="inline-block animate-spin rounded-full h-12 w-12 border-4 border-emerald-500 border-t-transparent"></div>
            <p class="mt-4 text-slate-600 dark:text-slate-400">{ t.loading }</p>
        </div>
    }
}
