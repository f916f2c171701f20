use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{api, language_context::use_texts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Speaker {
    User,
    Muse,
}

#[derive(Debug, Clone, PartialEq)]
struct Message {
    speaker: Speaker,
    text: String,
}

/// A small chat box that turns a topic into a short thought.
#[function_component(CreativeMuse)]
pub fn creative_muse() -> Html {
    let t = &use_texts().muse;
    let prompt = use_state(String::new);
    let history = use_state(Vec::<Message>::new);
    let loading = use_state(|| false);

    let on_input = {
        let prompt = prompt.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                prompt.set(input.value());
            }
        })
    };

    let inspire = {
        let prompt = prompt.clone();
        let history = history.clone();
        let loading = loading.clone();
        let error_text = t.error;
        Callback::from(move |()| {
            let topic = prompt.trim().to_string();
            if topic.is_empty() || *loading {
                return;
            }
            prompt.set(String::new());
            loading.set(true);

            let mut messages = (*history).clone();
            messages.push(Message {
                speaker: Speaker::User,
                text: topic.clone(),
            });
            history.set(messages.clone());

            let history = history.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let text = match api::fetch_muse(&topic).await {
                    Ok(text) => text,
                    Err(err) => {
                        web_sys::console::error_1(&format!("Muse request failed: {err}").into());
                        error_text.to_string()
                    },
                };
                messages.push(Message {
                    speaker: Speaker::Muse,
                    text,
                });
                history.set(messages);
                loading.set(false);
            });
        })
    };

    let on_keydown = {
        let inspire = inspire.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                inspire.emit(());
            }
        })
    };

    let greeting = Message {
        speaker: Speaker::Muse,
        text: t.greeting.to_string(),
    };

    html! {
        <section id="muse" class="py-12 sm:py-16 md:py-20 px-4 sm:px-6">
            <div class="max-w-4xl mx-auto glass-card rounded-2xl sm:rounded-[2rem] p-4 sm:p-6 md:p-10 shadow-2xl">
                <div class="flex items-center gap-3 sm:gap-4 mb-6 sm:mb-8">
                    <div class="p-3 bg-white dark:bg-slate-800 rounded-2xl shadow-lg text-purple-500">
                        <i class="fas fa-wand-magic-sparkles fa-lg" aria-hidden="true"></i>
                    </div>
                    <div>
                        <h2 class="text-xl sm:text-2xl md:text-3xl font-bold text-slate-900 dark:text-white">{ t.title }</h2>
                        <p class="text-slate-600 dark:text-slate-400 text-xs sm:text-sm">{ t.powered_by }</p>
                    </div>
                </div>

                <div class="bg-white/50 dark:bg-black/20 rounded-2xl p-4 md:p-6 h-[320px] md:h-[400px] overflow-y-auto mb-4 flex flex-col gap-4">
                    { for std::iter::once(&greeting).chain(history.iter()).map(render_message) }
                    if *loading {
                        <div class="flex gap-1 items-center py-3 px-5">
                            <span class="w-2 h-2 bg-slate-400 rounded-full animate-bounce"></span>
                            <span class="w-2 h-2 bg-slate-400 rounded-full animate-bounce delay-75"></span>
                            <span class="w-2 h-2 bg-slate-400 rounded-full animate-bounce delay-150"></span>
                        </div>
                    }
                </div>

                <div class="relative">
                    <input
                        type="text"
                        value={(*prompt).clone()}
                        oninput={on_input}
                        onkeydown={on_keydown}
                        placeholder={t.placeholder}
                        class="w-full bg-white/70 dark:bg-slate-800/70 border border-slate-200 dark:border-slate-700 rounded-xl py-4 pl-5 pr-14 text-slate-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-purple-400/50"
                    />
                    <button
                        type="button"
                        class="absolute right-2 top-2 bottom-2 px-3 bg-slate-900 dark:bg-white text-white dark:text-slate-900 rounded-lg disabled:opacity-50"
                        onclick={inspire.reform(|_: MouseEvent| ())}
                        disabled={*loading || prompt.trim().is_empty()}
                        aria-label={t.send}
                    >
                        <i class="fas fa-paper-plane" aria-hidden="true"></i>
                    </button>
                </div>
            </div>
        </section>
    }
}

fn render_message(message: &Message) -> Html {
    let (row, bubble) = match message.speaker {
        Speaker::User => (
            "flex-row-reverse",
            "bg-slate-200 dark:bg-slate-700 text-slate-900 dark:text-slate-100 rounded-tr-none",
        ),
        Speaker::Muse => (
            "flex-row",
            "glass-panel text-slate-800 dark:text-slate-100 rounded-tl-none",
        ),
    };

    html! {
        <div class={classes!("flex", "gap-3", row)}>
            <div class={classes!("py-3", "px-5", "rounded-2xl", "max-w-[80%]", "text-sm", "md:text-base", "leading-relaxed", bubble)}>
                { message.text.clone() }
            </div>
        </div>
    }
}
