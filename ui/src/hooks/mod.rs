pub mod use_logout;
pub mod use_push_route;
pub mod use_route_expansion;
pub mod use_sidebar;
pub mod use_title;
pub mod use_viewport_width;

pub use use_logout::use_logout;
pub use use_push_route::use_push_route;
pub use use_route_expansion::use_route_expansion;
pub use use_sidebar::{SidebarAction, SidebarState, use_sidebar};
pub use use_title::use_title;
pub use use_viewport_width::use_viewport_width;
