//! Window manager for lifecycle, focus, and z-order

use super::panel::{PanelState, PanelWindow, WindowDescriptor};
use super::{Z_BASE, Z_FOCUSED};

/// Window manager handling panel lifecycle, z-order, and focus
///
/// Windows are kept in insertion order; at most one window exists per id
/// and at most one id is focused at a time. Every operation is a plain
/// in-memory collection edit and cannot fail.
pub struct WindowManager<C> {
    /// Open windows in insertion order
    windows: Vec<PanelWindow<C>>,
    /// Currently focused window id, if any
    focused: Option<String>,
}

impl<C> Default for WindowManager<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> WindowManager<C> {
    /// Create an empty window manager
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            focused: None,
        }
    }

    /// Open, restore, or minimize the window named by the descriptor
    ///
    /// - unknown id: insert a new open window and focus it
    /// - known id, minimized: restore it and focus it
    /// - known id, open: minimize it
    ///
    /// The last case is deliberate toggle behavior: clicking a dock icon
    /// whose panel is already open hides that panel instead of re-opening
    /// it. Focus is left untouched on the toggle-to-minimize path.
    pub fn open(&mut self, descriptor: WindowDescriptor<C>) {
        if let Some(window) = self.windows.iter_mut().find(|w| w.id == descriptor.id) {
            match window.state {
                PanelState::Minimized => {
                    window.state = PanelState::Open;
                    self.focused = Some(descriptor.id);
                }
                PanelState::Open => {
                    window.state = PanelState::Minimized;
                }
            }
            return;
        }

        self.focused = Some(descriptor.id.clone());
        self.windows.push(PanelWindow::from_descriptor(descriptor));
    }

    /// Close a window; no-op if the id is unknown
    ///
    /// When the focused window closes, focus moves to the last window of
    /// the remaining collection (the most recently added survivor), or
    /// clears when none remain.
    pub fn close(&mut self, id: &str) {
        self.windows.retain(|w| w.id != id);
        if self.focused.as_deref() == Some(id) {
            self.focused = self.windows.last().map(|w| w.id.clone());
        }
    }

    /// Minimize a window; no-op if the id is unknown
    ///
    /// Focus is deliberately left unchanged, so a minimized window can
    /// remain logically focused with no visible representation.
    pub fn minimize(&mut self, id: &str) {
        if let Some(window) = self.windows.iter_mut().find(|w| w.id == id) {
            window.state = PanelState::Minimized;
        }
    }

    /// Set the focus pointer unconditionally
    ///
    /// No existence check; callers only invoke this for live windows.
    pub fn focus(&mut self, id: &str) {
        self.focused = Some(id.to_string());
    }

    /// Stacking order for a window, `None` if the id is unknown
    ///
    /// The focused window gets a constant top value; every other window
    /// gets base + insertion index, so newer windows stack above older
    /// ones within the non-focused set.
    pub fn z_index(&self, id: &str) -> Option<u32> {
        let index = self.windows.iter().position(|w| w.id == id)?;
        if self.focused.as_deref() == Some(id) {
            Some(Z_FOCUSED)
        } else {
            Some(Z_BASE + index as u32)
        }
    }

    /// All windows in insertion order
    pub fn windows(&self) -> &[PanelWindow<C>] {
        &self.windows
    }

    /// The focused window id, if any
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Get a window by id
    pub fn get(&self, id: &str) -> Option<&PanelWindow<C>> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Number of open windows (minimized included)
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// True when no windows are open
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
