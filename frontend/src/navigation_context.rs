//! Navigation requests from anywhere in the tree.
//!
//! Views publish [`NavSignal`]s on the bus held here; the app router is the
//! only subscriber. Scripts outside yew can do the same by dispatching a
//! `navigate-to` `CustomEvent` on `window`, whose `detail` is either a view
//! tag or an object `{ view, hash?, projectId?, from? }`.

use portfolio_shared::{bus::SignalBus, NavSignal, Origin, View};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CustomEvent};
use yew::prelude::*;

pub const NAVIGATE_EVENT: &str = "navigate-to";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Navigator {
    bus: SignalBus<NavSignal>,
}

impl Navigator {
    pub fn bus(&self) -> &SignalBus<NavSignal> {
        &self.bus
    }

    pub fn publish(&self, signal: NavSignal) {
        if self.bus.publish(&signal) == 0 {
            web_sys::console::warn_1(&"navigation signal dropped: no router listening".into());
        }
    }

    pub fn go(&self, view: View) {
        self.publish(NavSignal::view(view));
    }

    pub fn open_project(&self, project_id: &str, origin: Origin) {
        self.publish(NavSignal::project_detail(project_id, origin));
    }

    pub fn go_callback<E>(&self, view: View) -> Callback<E> {
        let navigator = self.clone();
        Callback::from(move |_| navigator.go(view))
    }
}

/// Reads the `detail` of a `navigate-to` event.
fn signal_from_detail(detail: &JsValue) -> Option<NavSignal> {
    if let Some(tag) = detail.as_string() {
        return Some(NavSignal::Bare(tag));
    }
    let json: String = js_sys::JSON::stringify(detail).ok()?.into();
    let value: serde_json::Value = serde_json::from_str(&json).ok()?;
    NavSignal::from_json(&value)
}

#[derive(Properties, PartialEq)]
pub struct NavigationProviderProps {
    pub children: Children,
}

#[function_component(NavigationProvider)]
pub fn navigation_provider(props: &NavigationProviderProps) -> Html {
    let navigator = use_memo((), |_| Navigator::default());

    {
        let navigator = (*navigator).clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
                let Some(event) = event.dyn_ref::<CustomEvent>() else {
                    return;
                };
                match signal_from_detail(&event.detail()) {
                    Some(signal) => navigator.publish(signal),
                    None => web_sys::console::warn_1(
                        &format!("ignored {NAVIGATE_EVENT} event with unreadable detail").into(),
                    ),
                }
            });

            let win = window();
            if let Some(win) = &win {
                let _ = win.add_event_listener_with_callback(
                    NAVIGATE_EVENT,
                    listener.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(win) = win {
                    let _ = win.remove_event_listener_with_callback(
                        NAVIGATE_EVENT,
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    html! {
        <ContextProvider<Navigator> context={(*navigator).clone()}>
            { props.children.clone() }
        </ContextProvider<Navigator>>
    }
}

#[hook]
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_default()
}
