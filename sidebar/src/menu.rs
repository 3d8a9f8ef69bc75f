use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A leaf link inside an expandable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub title: String,
    #[serde(default)]
    pub has_submenu: bool,
    /// Target for plain entries. Expandable entries usually have none.
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub submenu: Vec<MenuLink>,
}

impl MenuEntry {
    pub fn link(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            has_submenu: false,
            link: Some(link.into()),
            icon: None,
            submenu: Vec::new(),
        }
    }

    pub fn section(title: impl Into<String>, submenu: Vec<MenuLink>) -> Self {
        Self {
            title: title.into(),
            has_submenu: true,
            link: None,
            icon: None,
            submenu,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuGroup {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub menus: Vec<MenuEntry>,
}

/// The sidebar's menu and which expandable entry is open.
///
/// Only the first group takes part in route driven expansion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuModel {
    pub groups: Vec<MenuGroup>,
    #[serde(default)]
    pub active_submenu_index: Option<usize>,
}

impl MenuModel {
    pub fn new(groups: Vec<MenuGroup>) -> Self {
        Self {
            groups,
            active_submenu_index: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Entries of the first group, empty when there is no group.
    pub fn primary_entries(&self) -> &[MenuEntry] {
        self.groups
            .first()
            .map(|group| group.menus.as_slice())
            .unwrap_or_default()
    }

    /// Position of the expandable entry titled exactly `title`.
    pub fn find_expandable(&self, title: &str) -> Option<usize> {
        self.primary_entries()
            .iter()
            .position(|entry| entry.title == title && entry.has_submenu)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.active_submenu_index == Some(index)
    }

    /// Open the entry at `index`, or collapse it when it is already open.
    pub fn toggle_submenu(&mut self, index: usize) {
        let expandable = self
            .primary_entries()
            .get(index)
            .is_some_and(|entry| entry.has_submenu);
        if !expandable {
            tracing::debug!(index, "ignoring toggle of non-expandable entry");
            return;
        }

        self.active_submenu_index = if self.is_expanded(index) {
            None
        } else {
            Some(index)
        };
    }
}
