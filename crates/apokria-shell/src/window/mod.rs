//! Window management module
//!
//! Provides the panel window collection, minimize/restore lifecycle, focus
//! tracking, and stacking order for the dashboard shell.

mod manager;
mod panel;

pub use manager::WindowManager;
pub use panel::{PanelState, PanelWindow, Vec2, WindowDescriptor};

/// Z-index of the focused window, above every non-focused value
pub const Z_FOCUSED: u32 = 1000;

/// Z-index of the oldest non-focused window; later windows stack above
pub const Z_BASE: u32 = 100;
