//! State and behaviour of the dashboard navigation sidebar.
//!
//! The browser-facing pieces (DOM events, storage, dialogs, the router) are
//! reached through the traits in [`collab`], which keeps the controller
//! testable off-browser. The `ui` crate provides the web implementations.

pub mod collab;
pub mod config;
pub mod controller;
pub mod logout;
pub mod menu;
pub mod route;
pub mod subscription;
pub mod viewport;

pub use collab::{
    Confirmation, ConfirmationPrompt, Location, PromptKind, PromptRequest,
    Router, RouterEvent, SessionStore,
};
pub use config::{ConfigError, SidebarConfig};
pub use controller::{SidebarController, UiState};
pub use logout::{LogoutOutcome, logout};
pub use menu::{MenuEntry, MenuGroup, MenuLink, MenuModel};
pub use route::{RouteSection, clean_path, default_sections};
pub use subscription::RouteSubscription;
pub use viewport::{MOBILE_BREAKPOINT, ViewportClass};
