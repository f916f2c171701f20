use std::rc::Rc;

use portfolio_shared::Lang;
use yew::prelude::*;

use crate::{
    i18n::{self, Texts},
    utils,
};

const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageState {
    pub lang: Lang,
}

pub enum LanguageAction {
    Toggle,
}

impl LanguageState {
    /// Stored choice first, then the browser's preferred language.
    fn initial() -> Self {
        let stored = utils::read_storage(LANGUAGE_KEY).and_then(|raw| raw.parse::<Lang>().ok());
        let lang = stored.unwrap_or_else(|| {
            if utils::browser_prefers_chinese() {
                Lang::Zh
            } else {
                Lang::En
            }
        });
        Self {
            lang,
        }
    }
}

impl Reducible for LanguageState {
    type Action = LanguageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LanguageAction::Toggle => Rc::new(Self {
                lang: self.lang.toggle(),
            }),
        }
    }
}

pub type LanguageContext = UseReducerHandle<LanguageState>;

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let state = use_reducer(LanguageState::initial);

    use_effect_with(state.lang, |lang| {
        utils::write_storage(LANGUAGE_KEY, lang.as_str());
        utils::set_document_lang(*lang);
        || ()
    });

    html! {
        <ContextProvider<LanguageContext> context={state}>
            { props.children.clone() }
        </ContextProvider<LanguageContext>>
    }
}

/// Current display language, `en` outside a provider.
#[hook]
pub fn use_lang() -> Lang {
    use_context::<LanguageContext>()
        .map(|ctx| ctx.lang)
        .unwrap_or_default()
}

#[hook]
pub fn use_texts() -> &'static Texts {
    i18n::texts(use_lang())
}
