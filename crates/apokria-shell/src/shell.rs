//! Top-level shell state object

use crate::dock::DockItem;
use crate::window::{PanelWindow, Vec2, WindowDescriptor, WindowManager};

/// The dashboard shell: one dock, one window manager, one writer
///
/// The UI layer owns a single `Shell` and routes every user gesture
/// through it; there is no other holder of window state. Panel content is
/// the opaque parameter `C` supplied at launch.
pub struct Shell<C> {
    dock: Vec<DockItem>,
    windows: WindowManager<C>,
}

impl<C> Shell<C> {
    /// Create a shell with the given dock entries
    pub fn new(dock: Vec<DockItem>) -> Self {
        Self {
            dock,
            windows: WindowManager::new(),
        }
    }

    /// Dock entries in display order
    pub fn dock(&self) -> &[DockItem] {
        &self.dock
    }

    /// Record where a dock icon sits on screen, for launch animations
    ///
    /// No-op for unknown dock ids.
    pub fn set_dock_origin(&mut self, dock_id: &str, origin: Vec2) {
        if let Some(item) = self.dock.iter_mut().find(|d| d.id == dock_id) {
            item.origin = Some(origin);
        }
    }

    /// Launch the panel behind a dock entry
    ///
    /// Builds the window descriptor from the dock item and delegates to
    /// the manager, so the open/restore/minimize toggle applies. Returns
    /// false when the dock id is unknown.
    pub fn launch(&mut self, dock_id: &str, content: C) -> bool {
        let Some(item) = self.dock.iter().find(|d| d.id == dock_id) else {
            return false;
        };

        self.windows.open(WindowDescriptor {
            id: item.id.clone(),
            title: item.label.clone(),
            content,
            origin_hint: item.origin,
        });
        true
    }

    /// Close a window
    pub fn close(&mut self, id: &str) {
        self.windows.close(id);
    }

    /// Minimize a window
    pub fn minimize(&mut self, id: &str) {
        self.windows.minimize(id);
    }

    /// Focus a window
    pub fn focus(&mut self, id: &str) {
        self.windows.focus(id);
    }

    /// The window manager's read surface
    pub fn windows(&self) -> &WindowManager<C> {
        &self.windows
    }

    /// Non-minimized windows in stacking order (back to front)
    pub fn visible_windows(&self) -> Vec<&PanelWindow<C>> {
        let mut visible: Vec<&PanelWindow<C>> = self
            .windows
            .windows()
            .iter()
            .filter(|w| !w.is_minimized())
            .collect();
        visible.sort_by_key(|w| self.windows.z_index(&w.id));
        visible
    }

    /// Minimized windows, for the dock's restore affordance
    pub fn minimized_windows(&self) -> Vec<&PanelWindow<C>> {
        self.windows
            .windows()
            .iter()
            .filter(|w| w.is_minimized())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell<&'static str> {
        Shell::new(vec![
            DockItem::new("events", "Events"),
            DockItem::new("scheduler", "Scheduler").with_origin(Vec2::new(48.0, 980.0)),
            DockItem::new("sponsors", "Sponsors"),
        ])
    }

    #[test]
    fn test_launch_uses_dock_metadata() {
        let mut shell = shell();
        assert!(shell.launch("scheduler", "panel"));

        let window = shell.windows().get("scheduler").unwrap();
        assert_eq!(window.title, "Scheduler");
        assert_eq!(window.origin_hint, Some(Vec2::new(48.0, 980.0)));
    }

    #[test]
    fn test_launch_unknown_dock_id() {
        let mut shell = shell();
        assert!(!shell.launch("missing", "panel"));
        assert!(shell.windows().is_empty());
    }

    #[test]
    fn test_launch_twice_toggles_panel() {
        let mut shell = shell();
        shell.launch("events", "panel");
        shell.launch("events", "panel");

        assert!(shell.visible_windows().is_empty());
        assert_eq!(shell.minimized_windows().len(), 1);
    }

    #[test]
    fn test_visible_windows_stack_focused_last() {
        let mut shell = shell();
        shell.launch("events", "panel");
        shell.launch("scheduler", "panel");
        shell.launch("sponsors", "panel");
        shell.focus("events");

        let order: Vec<&str> = shell
            .visible_windows()
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(order, vec!["scheduler", "sponsors", "events"]);
    }

    #[test]
    fn test_set_dock_origin_feeds_next_launch() {
        let mut shell = shell();
        shell.set_dock_origin("events", Vec2::new(12.0, 990.0));
        shell.launch("events", "panel");

        let window = shell.windows().get("events").unwrap();
        assert_eq!(window.origin_hint, Some(Vec2::new(12.0, 990.0)));
    }
}
