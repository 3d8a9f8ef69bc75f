use sidebar::MenuModel;
use yewdux::prelude::*;

use crate::config;

/// Shared menu state. The sidebar is the only writer of
/// `menu.active_submenu_index`; everything else reads.
#[derive(Clone, PartialEq, Store)]
pub struct MenuStore {
    pub menu: MenuModel,
}

impl Default for MenuStore {
    fn default() -> Self {
        Self {
            menu: config::menu_model(),
        }
    }
}
