use serde::{Deserialize, Serialize};

/// Viewport widths strictly below this many logical pixels are mobile.
pub const MOBILE_BREAKPOINT: u32 = 992;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum ViewportClass {
    #[display("mobile")]
    Mobile,
    #[default]
    #[display("desktop")]
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Classify a width against the standard breakpoint.
pub fn is_mobile(width: u32) -> bool {
    ViewportClass::from_width(width, MOBILE_BREAKPOINT).is_mobile()
}
