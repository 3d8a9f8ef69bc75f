use sidebar::{MenuEntry, MenuGroup, SidebarConfig};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{
    Route,
    hooks::{
        SidebarAction, use_logout, use_push_route, use_route_expansion,
        use_sidebar, use_viewport_width,
    },
    state::MenuStore,
};

const LINK_BASE_CLASSES: &str =
    "flex items-center gap-3 w-full px-4 py-2 text-sm text-left \
     transition-colors cursor-pointer";
const LINK_INACTIVE_CLASSES: &str = "text-neutral-600 dark:text-neutral-400 \
    hover:text-neutral-900 dark:hover:text-white \
    hover:bg-neutral-100 dark:hover:bg-neutral-800";
const LINK_ACTIVE_CLASSES: &str = "text-neutral-900 dark:text-white \
    bg-neutral-100 dark:bg-neutral-800 font-medium";

fn link_classes(active: bool) -> String {
    format!(
        "{} {}",
        LINK_BASE_CLASSES,
        if active {
            LINK_ACTIVE_CLASSES
        } else {
            LINK_INACTIVE_CLASSES
        }
    )
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub config: SidebarConfig,
}

/// Dashboard navigation. A slide-in drawer below the mobile breakpoint, a
/// fixed column above it.
#[function_component]
pub fn Sidebar(props: &SidebarProps) -> Html {
    let sidebar = use_sidebar(&props.config);
    let (menu_store, menu_dispatch) = use_store::<MenuStore>();
    let push_route = use_push_route();
    let logout = use_logout(&props.config.logout_prompt);
    let current_path = use_route::<Route>()
        .map(|route| route.to_path())
        .unwrap_or_default();

    use_viewport_width({
        let dispatcher = sidebar.dispatcher();
        Callback::from(move |width: u32| {
            dispatcher.dispatch(SidebarAction::Resize(width))
        })
    });
    use_route_expansion(&sidebar.controller);

    let toggle = {
        let dispatcher = sidebar.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(SidebarAction::Toggle)
        })
    };

    let close = {
        let dispatcher = sidebar.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(SidebarAction::Close))
    };

    let on_navigate = {
        let close = close.clone();
        Callback::from(move |href: AttrValue| {
            push_route.emit(href);
            close.emit(());
        })
    };

    let on_toggle_submenu = menu_dispatch.reduce_mut_callback_with(
        |store, index: usize| store.menu.toggle_submenu(index),
    );

    let ui = sidebar.controller.state();
    let drawer_classes = if !ui.is_mobile {
        "sticky top-0 h-screen w-64 flex-shrink-0"
    } else if ui.is_sidebar_open {
        "fixed inset-y-0 left-0 z-50 w-64 translate-x-0 shadow-xl"
    } else {
        "fixed inset-y-0 left-0 z-50 w-64 -translate-x-full"
    };

    html! {
        <>
            if ui.is_mobile {
                <button
                    onclick={toggle.clone()}
                    class="fixed top-4 left-4 z-40 p-2 rounded-md \
                           bg-white dark:bg-neutral-900 shadow \
                           text-neutral-700 dark:text-neutral-200"
                    aria-label="Toggle navigation"
                    aria-expanded={ui.is_sidebar_open.to_string()}
                >
                    <MenuIcon />
                </button>
            }

            // Tap outside to close
            if ui.is_mobile && ui.is_sidebar_open {
                <div
                    onclick={close.reform(|_: MouseEvent| ())}
                    class="fixed inset-0 z-40 bg-black bg-opacity-50"
                />
            }

            <aside class={format!(
                "{} flex flex-col bg-white dark:bg-neutral-900 \
                 border-r border-neutral-200 dark:border-neutral-700 \
                 transition-transform",
                drawer_classes
            )}>
                <nav class="flex-1 overflow-y-auto py-4">
                    { for menu_store.menu.groups.iter().enumerate().map(|(group_index, group)| html! {
                        <MenuGroupView
                            key={group_index}
                            group={group.clone()}
                            primary={group_index == 0}
                            active_submenu_index={menu_store.menu.active_submenu_index}
                            current_path={current_path.clone()}
                            on_navigate={on_navigate.clone()}
                            on_toggle_submenu={on_toggle_submenu.clone()}
                        />
                    })}
                </nav>

                <div class="border-t border-neutral-200 dark:border-neutral-700 p-4">
                    <button
                        onclick={logout}
                        class="w-full px-4 py-2 text-sm font-medium text-left \
                               text-red-600 dark:text-red-400 rounded-md \
                               hover:bg-red-50 dark:hover:bg-neutral-800"
                    >
                        {"Logout"}
                    </button>
                </div>
            </aside>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct MenuGroupViewProps {
    group: MenuGroup,
    /// Only the first group's sections follow the shared expanded index.
    primary: bool,
    active_submenu_index: Option<usize>,
    current_path: String,
    on_navigate: Callback<AttrValue>,
    on_toggle_submenu: Callback<usize>,
}

#[function_component]
fn MenuGroupView(props: &MenuGroupViewProps) -> Html {
    html! {
        <div class="mb-4">
            if let Some(title) = &props.group.title {
                <div class="px-4 pb-2 text-xs font-semibold uppercase \
                            tracking-wider text-neutral-500 dark:text-neutral-400">
                    {title}
                </div>
            }
            <ul>
                { for props.group.menus.iter().enumerate().map(|(index, entry)| {
                    let expanded = !props.primary
                        || props.active_submenu_index == Some(index);
                    html! {
                        <li key={index}>
                            { render_entry(props, index, entry, expanded) }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

fn render_entry(
    props: &MenuGroupViewProps,
    index: usize,
    entry: &MenuEntry,
    expanded: bool,
) -> Html {
    let icon = entry.icon.as_deref().map(|icon| {
        html! { <span class="w-5 text-center" aria-hidden="true">{icon}</span> }
    });

    if !entry.has_submenu {
        let Some(link) = entry.link.clone() else {
            return html! {};
        };
        let active = props.current_path == link;
        let onclick = props
            .on_navigate
            .reform(move |_: MouseEvent| AttrValue::from(link.clone()));
        return html! {
            <button class={link_classes(active)} {onclick}>
                {for icon}
                <span>{&entry.title}</span>
            </button>
        };
    }

    // Sections outside the first group stay open.
    let on_header_click = props.primary.then(|| {
        props
            .on_toggle_submenu
            .reform(move |_: MouseEvent| index)
    });

    html! {
        <>
            <button
                class={link_classes(false)}
                onclick={on_header_click}
                aria-expanded={expanded.to_string()}
            >
                {for icon}
                <span class="flex-1">{&entry.title}</span>
                <Chevron open={expanded} />
            </button>
            if expanded {
                <ul class="ml-8 border-l border-neutral-200 dark:border-neutral-700">
                    { for entry.submenu.iter().map(|item| {
                        let active = props.current_path == item.link;
                        let link = item.link.clone();
                        let onclick = props
                            .on_navigate
                            .reform(move |_: MouseEvent| AttrValue::from(link.clone()));
                        html! {
                            <li key={item.link.clone()}>
                                <button class={link_classes(active)} {onclick}>
                                    {&item.title}
                                </button>
                            </li>
                        }
                    })}
                </ul>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ChevronProps {
    open: bool,
}

#[function_component]
fn Chevron(props: &ChevronProps) -> Html {
    let rotation = if props.open { "rotate-90" } else { "" };
    html! {
        <svg
            class={classes!("w-4", "h-4", "transition-transform", rotation)}
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M9 5l7 7-7 7"
            />
        </svg>
    }
}

/// Hamburger menu icon for the drawer button.
#[function_component]
fn MenuIcon() -> Html {
    html! {
        <svg class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M4 6h16M4 12h16M4 18h16"
            />
        </svg>
    }
}
