pub mod confirm;

pub use confirm::{ConfirmHandle, ConfirmProvider, use_confirm};
