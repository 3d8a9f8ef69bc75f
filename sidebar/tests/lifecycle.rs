use sidebar::{MenuModel, RouteSubscription, Router, SidebarController};
use std::cell::RefCell;
use std::rc::Rc;
use test_helpers::mock::{MASTER_INDEX, REPORTS_INDEX, admin_menu};
use test_helpers::{FakeListener, FakeRouter, init_test_logging};

struct Mounted {
    menu: Rc<RefCell<MenuModel>>,
    subscription: RouteSubscription<FakeListener>,
}

fn mount(router: &FakeRouter, width: u32) -> (SidebarController, Mounted) {
    let mut controller = SidebarController::default();
    let menu = Rc::new(RefCell::new(admin_menu()));
    controller.mount(width, &router.current_url(), &mut menu.borrow_mut());

    let subscription = {
        let controller = controller.clone();
        let menu = menu.clone();
        RouteSubscription::subscribe(router, move |url| {
            controller.on_navigation_end(url, &mut menu.borrow_mut());
        })
    };
    (controller, Mounted { menu, subscription })
}

#[test]
fn test_mount_expands_landing_route() {
    init_test_logging();
    let router = FakeRouter::at("/country/7?tab=cities");
    let (controller, mounted) = mount(&router, 1280);

    assert!(!controller.is_mobile());
    assert!(!controller.is_open());
    assert_eq!(mounted.menu.borrow().active_submenu_index, Some(MASTER_INDEX));
}

#[test]
fn test_navigation_end_drives_expansion() {
    let router = FakeRouter::at("/dashboard");
    let (_, mounted) = mount(&router, 1280);
    assert_eq!(mounted.menu.borrow().active_submenu_index, None);

    router.cancelled_navigation("/fees");
    assert_eq!(mounted.menu.borrow().active_submenu_index, None);

    router.navigate("/fees");
    assert_eq!(
        mounted.menu.borrow().active_submenu_index,
        Some(REPORTS_INDEX)
    );

    router.navigate("/city");
    assert_eq!(mounted.menu.borrow().active_submenu_index, Some(MASTER_INDEX));
}

#[test]
fn test_unmount_stops_updates() {
    let router = FakeRouter::at("/dashboard");
    let (_, mut mounted) = mount(&router, 1280);
    assert_eq!(router.listener_count(), 1);
    assert!(mounted.subscription.is_active());

    mounted.subscription.release();
    assert!(!mounted.subscription.is_active());
    assert_eq!(router.listener_count(), 0);

    router.navigate("/tyfcb");
    assert_eq!(mounted.menu.borrow().active_submenu_index, None);

    // releasing again is harmless
    mounted.subscription.release();
}

#[test]
fn test_release_without_subscription() {
    let mut subscription = RouteSubscription::<FakeListener>::default();
    assert!(!subscription.is_active());
    subscription.release();
    subscription.release();
}

#[test]
fn test_dropping_guard_releases() {
    let router = FakeRouter::at("/");
    let (_, mounted) = mount(&router, 1280);
    let menu = mounted.menu.clone();
    drop(mounted);

    assert_eq!(router.listener_count(), 0);
    router.navigate("/chapter");
    assert_eq!(menu.borrow().active_submenu_index, None);
}
