use yew::prelude::*;

use crate::hooks::use_title;

#[derive(Properties, PartialEq)]
pub struct SectionPageProps {
    pub title: AttrValue,
    /// Record id for detail views, e.g. `/referralReport/42`.
    #[prop_or_default]
    pub detail: Option<AttrValue>,
}

/// Frame for dashboard screens whose content is served by other crates.
#[function_component]
pub fn SectionPage(props: &SectionPageProps) -> Html {
    use_title(&props.title);

    html! {
        <section>
            <h2 class="text-2xl font-semibold text-neutral-900 dark:text-white mb-4">
                {&props.title}
                if let Some(detail) = &props.detail {
                    <span class="text-neutral-500 dark:text-neutral-400">
                        {" / "}{detail}
                    </span>
                }
            </h2>
            <div class="rounded-lg border border-dashed border-neutral-300 \
                        dark:border-neutral-700 p-8 text-sm \
                        text-neutral-500 dark:text-neutral-400">
                {"Nothing to show yet."}
            </div>
        </section>
    }
}
