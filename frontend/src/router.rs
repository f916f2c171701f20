use std::rc::Rc;

use portfolio_shared::{NavSignal, ScrollEffect, View, ViewRouter};
use yew::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    navigation_context::use_navigator,
    pages, utils,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouterState {
    router: ViewRouter,
    /// Scroll effect of the latest navigation, tagged so repeated effects
    /// are still applied.
    pending_scroll: Option<(u64, ScrollEffect)>,
    navigations: u64,
}

pub enum RouterAction {
    Signal(NavSignal),
    Back,
}

impl Reducible for RouterState {
    type Action = RouterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut router = self.router.clone();
        let effect = match action {
            RouterAction::Signal(signal) => router.handle_signal(&signal),
            RouterAction::Back => router.back(),
        };
        let Some(effect) = effect else {
            return self;
        };

        let navigations = self.navigations + 1;
        Rc::new(Self {
            router,
            pending_scroll: Some((navigations, effect)),
            navigations,
        })
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    let state = use_reducer(RouterState::default);
    let navigator = use_navigator();

    {
        let dispatcher = state.dispatcher();
        use_effect_with(navigator.clone(), move |navigator| {
            let subscription = navigator
                .bus()
                .subscribe(move |signal: &NavSignal| {
                    dispatcher.dispatch(RouterAction::Signal(signal.clone()))
                });
            move || drop(subscription)
        });
    }

    {
        let pending = state.pending_scroll.clone();
        use_effect_with(pending.as_ref().map(|(seq, _)| *seq), move |_| {
            if let Some((_, effect)) = pending {
                utils::apply_scroll(&effect);
            }
            || ()
        });
    }

    let on_back = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(RouterAction::Back))
    };

    let view = state.router.view();
    let content = match view {
        View::Home => html! { <pages::home::HomePage /> },
        View::Projects => html! { <pages::projects::ProjectsPage /> },
        View::ProjectDetail => match state.router.project_id() {
            Some(project_id) => html! {
                <pages::project_detail::ProjectDetailPage
                    project_id={project_id.to_string()}
                    on_back={on_back}
                />
            },
            None => html! { <pages::projects::ProjectsPage /> },
        },
        View::Photography => html! { <pages::photography::PhotographyPage /> },
        View::Calligraphy => html! { <pages::calligraphy::CalligraphyPage /> },
        View::Blog => html! { <pages::blog::BlogPage /> },
    };

    html! {
        <div class="min-h-screen relative flex flex-col">
            <Header current={view} />
            <main class="flex-grow">
                { content }
            </main>
            <Footer />
        </div>
    }
}
