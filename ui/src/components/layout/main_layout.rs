use yew::prelude::*;

use crate::{
    components::layout::{Header, Sidebar},
    config,
};

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    let sidebar_config = use_memo((), |_| config::sidebar_config());

    html! {
        <div class="flex min-h-screen bg-white dark:bg-neutral-900 \
                    text-neutral-900 dark:text-neutral-100">
            <Sidebar config={(*sidebar_config).clone()} />
            <div class="flex-1 min-w-0 flex flex-col">
                <Header />
                <main class="flex-1 px-4 sm:px-6 lg:px-8 py-8">
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}
