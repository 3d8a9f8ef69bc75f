pub mod confirm_dialog;
pub mod layout;

pub use confirm_dialog::ConfirmDialog;
pub use layout::MainLayout;
