//! Canned menus shaped like the admin dashboard's.
//!
//! The primary group puts the two expandable sections at fixed positions so
//! tests can assert on indexes:
//! - 0 Dashboard
//! - 1 Members
//! - 2 Reports Section (expandable)
//! - 3 Master Section (expandable)
//! - 4 Events

use sidebar::{MenuEntry, MenuGroup, MenuLink, MenuModel};

pub const REPORTS_INDEX: usize = 2;
pub const MASTER_INDEX: usize = 3;

fn links(items: &[(&str, &str)]) -> Vec<MenuLink> {
    items
        .iter()
        .map(|(title, link)| MenuLink {
            title: title.to_string(),
            link: link.to_string(),
        })
        .collect()
}

pub fn admin_menu() -> MenuModel {
    MenuModel::new(vec![
        MenuGroup {
            title: Some("Main".into()),
            menus: vec![
                MenuEntry::link("Dashboard", "/dashboard"),
                MenuEntry::link("Members", "/members"),
                MenuEntry::section(
                    "Reports Section",
                    links(&[
                        ("Referral Report", "/referralReport"),
                        ("TYFCB", "/tyfcb"),
                        ("Fees", "/fees"),
                    ]),
                ),
                MenuEntry::section(
                    "Master Section",
                    links(&[
                        ("Country", "/country"),
                        ("City", "/city"),
                        ("Category", "/category"),
                    ]),
                ),
                MenuEntry::link("Events", "/events"),
            ],
        },
        MenuGroup {
            title: Some("Account".into()),
            menus: vec![MenuEntry::section(
                "Reports Section",
                links(&[("Settings", "/settings")]),
            )],
        },
    ])
}

/// Same menu, but the sections are plain links without a submenu.
pub fn flat_menu() -> MenuModel {
    let mut menu = admin_menu();
    for entry in &mut menu.groups[0].menus {
        entry.has_submenu = false;
    }
    menu
}
