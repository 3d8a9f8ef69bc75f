use yew::prelude::*;

#[function_component]
pub fn Header() -> Html {
    html! {
        <header class="bg-white dark:bg-neutral-900 border-b \
                       border-neutral-200 dark:border-neutral-700">
            // left padding leaves room for the mobile drawer button
            <div class="flex items-center h-16 pl-16 lg:pl-8 pr-4">
                <h1 class="text-xl font-semibold text-neutral-900 dark:text-white">
                    {"Admin Dashboard"}
                </h1>
            </div>
        </header>
    }
}
