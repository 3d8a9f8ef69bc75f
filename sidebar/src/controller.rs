use crate::{
    MenuModel, RouteSection, SidebarConfig, ViewportClass,
    route::clean_path,
};

/// Open/closed and viewport state of one mounted sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub is_sidebar_open: bool,
    pub is_mobile: bool,
}

/// Drives [`UiState`] from viewport and route changes and opens the menu
/// section that owns the current route.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarController {
    state: UiState,
    breakpoint: u32,
    sections: Vec<RouteSection>,
}

impl Default for SidebarController {
    fn default() -> Self {
        Self::new(&SidebarConfig::default())
    }
}

impl SidebarController {
    pub fn new(config: &SidebarConfig) -> Self {
        Self {
            state: UiState::default(),
            breakpoint: config.mobile_breakpoint,
            sections: config.sections.clone(),
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_sidebar_open
    }

    pub fn is_mobile(&self) -> bool {
        self.state.is_mobile
    }

    pub fn sections(&self) -> &[RouteSection] {
        &self.sections
    }

    /// Initial measurement plus expansion for the route we landed on.
    pub fn mount(
        &mut self,
        viewport_width: u32,
        current_url: &str,
        menu: &mut MenuModel,
    ) {
        self.on_resize(viewport_width);
        self.on_navigation_end(current_url, menu);
    }

    /// Reclassify the viewport. Crossing the breakpoint in either direction
    /// closes the sidebar. Returns whether the classification flipped.
    pub fn on_resize(&mut self, viewport_width: u32) -> bool {
        let was_mobile = self.state.is_mobile;
        let class = ViewportClass::from_width(viewport_width, self.breakpoint);
        self.state.is_mobile = class.is_mobile();

        let flipped = was_mobile != self.state.is_mobile;
        if flipped {
            tracing::debug!(viewport_width, %class, "viewport class changed");
            self.state.is_sidebar_open = false;
        }
        flipped
    }

    /// Open the section owning `url`. Every matching section is applied in
    /// table order, so the last one found wins. Returns the index written, if
    /// any.
    pub fn on_navigation_end(
        &self,
        url: &str,
        menu: &mut MenuModel,
    ) -> Option<usize> {
        let path = clean_path(url);
        let mut opened = None;

        for section in self.sections.iter().filter(|s| s.matches(path)) {
            match menu.find_expandable(&section.section_title) {
                Some(index) => {
                    tracing::debug!(
                        path,
                        section = %section.section_title,
                        index,
                        "auto-expanding menu section"
                    );
                    menu.active_submenu_index = Some(index);
                    opened = Some(index);
                }
                None => tracing::debug!(
                    path,
                    section = %section.section_title,
                    "route matched a section missing from the menu"
                ),
            }
        }
        opened
    }

    pub fn toggle(&mut self) {
        self.state.is_sidebar_open = !self.state.is_sidebar_open;
    }

    /// Tap-outside close. Only meaningful on mobile, ignored on desktop.
    pub fn close(&mut self) {
        if self.state.is_mobile {
            self.state.is_sidebar_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MenuEntry, MenuGroup};

    fn menu() -> MenuModel {
        MenuModel::new(vec![MenuGroup {
            title: None,
            menus: vec![
                MenuEntry::link("Dashboard", "/dashboard"),
                MenuEntry::link("Members", "/members"),
                MenuEntry::section("Reports Section", Vec::new()),
                MenuEntry::section("Master Section", Vec::new()),
            ],
        }])
    }

    #[test]
    fn test_resize_only_closes_on_flip() {
        let mut controller = SidebarController::default();
        controller.on_resize(1280);
        controller.toggle();
        assert!(controller.is_open());

        assert!(!controller.on_resize(1000));
        assert!(controller.is_open());

        assert!(controller.on_resize(800));
        assert!(controller.is_mobile());
        assert!(!controller.is_open());

        controller.toggle();
        assert!(!controller.on_resize(500));
        assert!(controller.is_open());

        assert!(controller.on_resize(992));
        assert!(!controller.is_mobile());
        assert!(!controller.is_open());
    }

    #[test]
    fn test_close_is_mobile_only() {
        let mut controller = SidebarController::default();
        controller.on_resize(1440);
        controller.toggle();
        controller.close();
        assert!(controller.is_open());

        controller.on_resize(375);
        controller.toggle();
        controller.close();
        assert!(!controller.is_open());
    }

    #[test]
    fn test_navigation_expands_sections() {
        let controller = SidebarController::default();
        let mut menu = menu();

        assert_eq!(
            controller.on_navigation_end("referralReport/details?x=1", &mut menu),
            Some(2)
        );
        assert_eq!(menu.active_submenu_index, Some(2));

        assert_eq!(controller.on_navigation_end("/city", &mut menu), Some(3));
        assert_eq!(menu.active_submenu_index, Some(3));

        assert_eq!(controller.on_navigation_end("/dashboard", &mut menu), None);
        assert_eq!(menu.active_submenu_index, Some(3));
    }

    #[test]
    fn test_last_matching_section_wins() {
        let config = SidebarConfig {
            sections: vec![
                RouteSection::new("Reports Section", &["shared"]),
                RouteSection::new("Master Section", &["shared"]),
            ],
            ..SidebarConfig::default()
        };
        let controller = SidebarController::new(&config);
        let mut menu = menu();
        assert_eq!(
            controller.on_navigation_end("/shared/1", &mut menu),
            Some(3)
        );
        assert_eq!(menu.active_submenu_index, Some(3));
    }

    #[test]
    fn test_mount_on_narrow_viewport() {
        let mut controller = SidebarController::default();
        let mut menu = menu();
        controller.mount(600, "/fees", &mut menu);
        assert_eq!(
            controller.state(),
            UiState {
                is_sidebar_open: false,
                is_mobile: true,
            }
        );
        assert_eq!(menu.active_submenu_index, Some(2));
    }
}
