use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    /// Optional "view all" style button rendered on the right.
    #[prop_or_default]
    pub action: Option<(AttrValue, Callback<MouseEvent>)>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="flex flex-col md:flex-row md:items-end md:justify-between gap-4 mb-10 md:mb-12">
            <div>
                <h2 class="text-3xl md:text-4xl font-bold text-slate-900 dark:text-white mb-3">
                    { props.title.clone() }
                </h2>
                <p class="text-slate-600 dark:text-slate-400 max-w-xl">{ props.subtitle.clone() }</p>
            </div>
            if let Some((label, onclick)) = props.action.clone() {
                <button
                    type="button"
                    {onclick}
                    class="inline-flex items-center gap-2 self-start md:self-auto px-5 py-2.5 rounded-full border border-slate-300 dark:border-slate-700 text-sm font-semibold text-slate-700 dark:text-slate-200 hover:bg-slate-900 hover:text-white dark:hover:bg-white dark:hover:text-slate-900 transition-colors"
                >
                    { label }
                    <i class="fas fa-arrow-right text-xs" aria-hidden="true"></i>
                </button>
            }
        </div>
    }
}
