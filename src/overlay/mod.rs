//! Transient overlays
//!
//! - manager: toast/splash lifecycle driven by scheduler timers
//! - surface: display tree the overlays are attached to
//! - types: ids, states, content, animated style, timings

pub mod manager;
pub mod surface;
pub mod types;

pub use manager::{OverlayManager, OverlayTimer};
pub use surface::{Display, Surface};
pub use types::{
    Overlay, OverlayContent, OverlayId, OverlayState, OverlayStyle, OverlayTimings, OverlayView,
    Severity,
};
