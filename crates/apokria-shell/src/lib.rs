//! Shell state for the Apokria dashboard
//!
//! This crate owns all windowed-panel state for the single-page dashboard:
//! which panels are open, which one is focused, stacking order, and the
//! dock that launches them. The rendering layer (JS/React) holds no state
//! of its own; it calls into [`Shell`] for every user gesture and repaints
//! from the returned window list.
//!
//! ## Architecture
//!
//! - [`window::WindowManager`]: ordered panel collection, focus pointer,
//!   open-toggle/close/minimize lifecycle, z-index assignment
//! - [`Shell`]: top-level state object owning the manager and the dock;
//!   the one writer through which every mutation is funneled
//!
//! Panel content is an opaque type parameter: the manager never inspects
//! or constructs it, callers decide what a window renders.

pub mod window;

mod dock;
mod shell;

pub use dock::DockItem;
pub use shell::Shell;
pub use window::{PanelState, PanelWindow, Vec2, WindowDescriptor, WindowManager};
