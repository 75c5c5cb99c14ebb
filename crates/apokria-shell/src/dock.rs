//! Dock entries that launch panels

use serde::{Deserialize, Serialize};

use crate::window::Vec2;

/// One launcher icon in the dock
///
/// The dock id doubles as the window id, which is what makes clicking an
/// icon toggle its panel instead of opening duplicates.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockItem {
    /// Panel id, reused as the window id
    pub id: String,
    /// Icon label, reused as the window title
    pub label: String,
    /// Icon screen position, forwarded as the window's animation origin
    #[serde(default)]
    pub origin: Option<Vec2>,
}

impl DockItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = Some(origin);
        self
    }
}
