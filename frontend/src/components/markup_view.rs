use portfolio_shared::markup::{Block, Inline};
use yew::prelude::*;

fn render_inlines(spans: &[Inline]) -> Html {
    spans
        .iter()
        .map(|span| match span {
            Inline::Text(text) => html! { { text.clone() } },
            Inline::Link(url) => html! {
                <a
                    href={url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-emerald-600 dark:text-emerald-400 hover:underline break-all"
                >
                    { url.clone() }
                </a>
            },
        })
        .collect()
}

fn render_block(block: &Block) -> Html {
    match block {
        Block::Heading {
            level: 3,
            text,
        } => html! {
            <h3 class="text-xl md:text-2xl font-bold text-slate-900 dark:text-white mt-8 mb-4">{ text.clone() }</h3>
        },
        Block::Heading {
            text, ..
        } => html! {
            <h2 class="text-2xl md:text-3xl font-bold text-slate-900 dark:text-white mt-10 mb-5">{ text.clone() }</h2>
        },
        Block::Paragraph(spans) => html! {
            <p class="mb-5 text-slate-700 dark:text-slate-300 leading-8 text-base md:text-lg">{ render_inlines(spans) }</p>
        },
        Block::List(items) => html! {
            <ul class="mb-6 space-y-2 list-disc list-inside text-slate-700 dark:text-slate-300 leading-relaxed">
                { for items.iter().map(|item| html! { <li>{ render_inlines(item) }</li> }) }
            </ul>
        },
        Block::Code(code) => html! {
            <pre class="mb-6 mt-4 overflow-x-auto rounded-xl bg-slate-950 text-slate-100 p-4 text-sm">
                <code>{ code.clone() }</code>
            </pre>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct MarkupViewProps {
    pub blocks: Vec<Block>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MarkupView)]
pub fn markup_view(props: &MarkupViewProps) -> Html {
    html! {
        <div class={props.class.clone()}>
            { for props.blocks.iter().map(render_block) }
        </div>
    }
}
