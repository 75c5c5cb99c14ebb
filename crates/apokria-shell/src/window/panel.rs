//! Panel window entity and open descriptor

use serde::{Deserialize, Serialize};

/// 2D point in screen pixels, used for entry/exit animation origins
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Panel lifecycle state
///
/// Closed is not a state: a closed window is removed from the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Open,
    Minimized,
}

/// Caller-supplied record used to open (or re-toggle) a window
#[derive(Clone, Debug)]
pub struct WindowDescriptor<C> {
    /// Logical panel id; reusing an id toggles the existing window
    pub id: String,
    /// Display label
    pub title: String,
    /// Opaque renderable handle, never inspected by the manager
    pub content: C,
    /// Screen position of the triggering icon, for animation only
    pub origin_hint: Option<Vec2>,
}

/// One open panel tracked by the shell
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelWindow<C> {
    /// Unique per logical panel
    pub id: String,
    /// Display label
    pub title: String,
    /// Opaque renderable handle owned by the caller
    pub content: C,
    /// Open or minimized; new windows start open
    pub state: PanelState,
    /// Animation origin, carried through untouched
    pub origin_hint: Option<Vec2>,
}

impl<C> PanelWindow<C> {
    pub(crate) fn from_descriptor(descriptor: WindowDescriptor<C>) -> Self {
        Self {
            id: descriptor.id,
            title: descriptor.title,
            content: descriptor.content,
            state: PanelState::Open,
            origin_hint: descriptor.origin_hint,
        }
    }

    /// Whether the window is hidden in the dock
    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.state == PanelState::Minimized
    }
}
