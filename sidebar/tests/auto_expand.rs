use sidebar::{SidebarController, clean_path};
use test_helpers::mock::{MASTER_INDEX, REPORTS_INDEX, admin_menu, flat_menu};

#[test]
fn test_report_subpath_with_query() {
    let controller = SidebarController::default();
    let mut menu = admin_menu();

    assert_eq!(
        clean_path("referralReport/details?x=1"),
        "referralReport/details"
    );
    controller.on_navigation_end("referralReport/details?x=1", &mut menu);
    assert_eq!(menu.active_submenu_index, Some(REPORTS_INDEX));
}

#[test]
fn test_every_report_route_opens_reports() {
    let controller = SidebarController::default();
    for route in [
        "referralReport",
        "testimonialReport",
        "oneTooneReport",
        "tyfcb",
        "VisitorsReport",
        "askManagement",
        "pointHistory",
        "attendanceRecord",
        "taskHistory",
        "fees",
    ] {
        let mut menu = admin_menu();
        controller.on_navigation_end(&format!("/{route}"), &mut menu);
        assert_eq!(menu.active_submenu_index, Some(REPORTS_INDEX), "{route}");
    }
}

#[test]
fn test_every_master_route_opens_master() {
    let controller = SidebarController::default();
    for route in
        ["country", "states", "city", "chapter", "category", "subcategory"]
    {
        let mut menu = admin_menu();
        controller.on_navigation_end(route, &mut menu);
        assert_eq!(menu.active_submenu_index, Some(MASTER_INDEX), "{route}");
    }
}

#[test]
fn test_unrelated_route_leaves_index() {
    let controller = SidebarController::default();
    let mut menu = admin_menu();

    controller.on_navigation_end("dashboard", &mut menu);
    assert_eq!(menu.active_submenu_index, None);

    menu.active_submenu_index = Some(4);
    controller.on_navigation_end("/dashboard", &mut menu);
    controller.on_navigation_end("/countryside", &mut menu);
    controller.on_navigation_end("/Country", &mut menu);
    assert_eq!(menu.active_submenu_index, Some(4));
}

#[test]
fn test_missing_section_is_a_no_op() {
    let controller = SidebarController::default();

    let mut menu = flat_menu();
    menu.active_submenu_index = Some(1);
    assert_eq!(controller.on_navigation_end("/fees", &mut menu), None);
    assert_eq!(menu.active_submenu_index, Some(1));

    let mut empty = sidebar::MenuModel::default();
    assert_eq!(controller.on_navigation_end("/fees", &mut empty), None);
    assert_eq!(empty.active_submenu_index, None);
}

#[test]
fn test_only_first_group_is_searched() {
    let controller = SidebarController::default();
    let mut menu = admin_menu();
    // the second group also has a "Reports Section"; removing the first
    // group's copy must not fall through to it
    menu.groups[0].menus.remove(REPORTS_INDEX);
    controller.on_navigation_end("/tyfcb", &mut menu);
    assert_eq!(menu.active_submenu_index, None);
}
