//! Sidebar settings and menu definition, bundled at compile time.

use sidebar::{MenuModel, SidebarConfig};

const SIDEBAR_JSON: &str = include_str!("../sidebar.json");
const MENU_JSON: &str = include_str!("../menu.json");

/// Sidebar settings from `sidebar.json`. The breakpoint can be overridden at
/// build time with `SIDEBAR_BREAKPOINT`.
pub fn sidebar_config() -> SidebarConfig {
    let mut config =
        SidebarConfig::from_json(SIDEBAR_JSON).unwrap_or_else(|e| {
            tracing::warn!("falling back to default sidebar config: {e}");
            SidebarConfig::default()
        });

    if let Some(breakpoint) = option_env!("SIDEBAR_BREAKPOINT")
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| *value > 0)
    {
        config.mobile_breakpoint = breakpoint;
    }

    config
}

/// Menu entries from `menu.json`; an empty menu if it does not parse.
pub fn menu_model() -> MenuModel {
    MenuModel::from_json(MENU_JSON).unwrap_or_else(|e| {
        tracing::warn!("menu definition is invalid, sidebar will be empty: {e}");
        MenuModel::default()
    })
}
