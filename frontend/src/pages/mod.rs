pub mod blog;
pub mod calligraphy;
pub mod home;
pub mod photography;
pub mod project_detail;
pub mod projects;

use yew::prelude::*;

use crate::{
    components::{empty_state::EmptyState, loading_spinner::LoadingSpinner},
    hooks::CollectionState,
    i18n::{fill_one, Texts},
};

/// Spinner while loading, an error notice on failure, `None` once ready.
pub(crate) fn pending_view(state: &CollectionState, texts: &Texts, label: &str) -> Option<Html> {
    match state {
        CollectionState::Loading => Some(html! { <LoadingSpinner /> }),
        CollectionState::Failed(_) => Some(html! {
            <EmptyState
                icon="fa-triangle-exclamation"
                message={fill_one(texts.common.load_failed, label)}
            />
        }),
        CollectionState::Ready(_) => None,
    }
}
