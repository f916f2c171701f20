use std::rc::Rc;

use portfolio_shared::ContentLoader;
use yew::prelude::*;

use crate::{api, config};

/// Shared handle to the one content loader of the page.
#[derive(Clone, Debug)]
pub struct ContentContext(Rc<ContentLoader>);

impl ContentContext {
    pub fn loader(&self) -> Rc<ContentLoader> {
        Rc::clone(&self.0)
    }
}

impl PartialEq for ContentContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentProviderProps {
    pub children: Children,
}

#[function_component(ContentProvider)]
pub fn content_provider(props: &ContentProviderProps) -> Html {
    let context = use_memo((), |_| {
        ContentContext(Rc::new(api::build_loader(config::content_source_mode())))
    });

    html! {
        <ContextProvider<ContentContext> context={(*context).clone()}>
            { props.children.clone() }
        </ContextProvider<ContentContext>>
    }
}
