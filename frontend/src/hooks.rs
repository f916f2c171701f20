use std::{cell::Cell, rc::Rc};

use portfolio_shared::{Collection, LocalizedCollection};
use yew::prelude::*;

use crate::{content_context::ContentContext, language_context::use_lang};

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionState {
    Loading,
    Ready(Rc<LocalizedCollection>),
    Failed(String),
}

impl CollectionState {
    pub fn items(&self) -> Option<&LocalizedCollection> {
        match self {
            CollectionState::Ready(items) => Some(items),
            _ => None,
        }
    }
}

/// Loads `collection` in the current language through the shared loader.
///
/// Refetches when the language changes. A result that arrives after the
/// component unmounted, or after a newer request started, is dropped.
#[hook]
pub fn use_collection(collection: Collection) -> CollectionState {
    let lang = use_lang();
    let content = use_context::<ContentContext>();
    let state = use_state(|| CollectionState::Loading);

    {
        let state = state.clone();
        use_effect_with((collection, lang), move |(collection, lang)| {
            let active = Rc::new(Cell::new(true));
            let (collection, lang) = (*collection, *lang);

            match content {
                Some(content) => {
                    let loader = content.loader();
                    let active = Rc::clone(&active);
                    state.set(CollectionState::Loading);
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = loader.get_collection(collection, lang).await;
                        if !active.get() {
                            return;
                        }
                        match result {
                            Ok(items) => state.set(CollectionState::Ready(Rc::new(items))),
                            Err(err) => {
                                web_sys::console::error_1(
                                    &format!("Failed to load {collection}: {err}").into(),
                                );
                                state.set(CollectionState::Failed(err.to_string()));
                            },
                        }
                    });
                },
                None => state.set(CollectionState::Failed("no content loader".to_string())),
            }

            move || active.set(false)
        });
    }

    (*state).clone()
}
