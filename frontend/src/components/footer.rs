use yew::prelude::*;

use crate::language_context::use_texts;

#[function_component(Footer)]
pub fn footer() -> Html {
    let t = &use_texts().footer;

    html! {
        <footer class="mt-12 py-8 glass-panel border-t border-white/20 dark:border-white/5">
            <div class="max-w-7xl mx-auto px-4 text-center">
                <div class="flex justify-center items-center gap-1.5 text-slate-500 dark:text-slate-400 text-sm font-medium">
                    <span>{ format!("© 2025 Eververdants. {}", t.made_with) }</span>
                    <i class="fas fa-heart text-rose-500 animate-pulse" aria-hidden="true"></i>
                    <span>{ format!("{} Rust.", t.and) }</span>
                </div>
            </div>
        </footer>
    }
}
