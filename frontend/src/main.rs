mod api;
mod components;
mod config;
mod content_context;
pub mod hooks;
mod i18n;
mod language_context;
mod navigation_context;
mod pages;
mod router;
mod utils;

use yew::prelude::*;

use crate::{
    content_context::ContentProvider, language_context::LanguageProvider,
    navigation_context::NavigationProvider,
};

#[function_component(App)]
fn app() -> Html {
    html! {
        <LanguageProvider>
            <ContentProvider>
                <NavigationProvider>
                    <router::AppRouter />
                </NavigationProvider>
            </ContentProvider>
        </LanguageProvider>
    }
}

fn main() {
    components::theme_toggle::apply_stored_theme();
    yew::Renderer::<App>::new().render();
}
