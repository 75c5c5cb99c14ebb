//! The dashboard controller exported to JS

use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;

use apokria_client::{ApiError, EventsApi};
use apokria_model::{EventDraft, TimeSlot};
use apokria_shell::{DockItem, Shell, Vec2};
use apokria_store::{LocalStorageBlob, MockStore};

/// The five dashboard panels, in dock order
const PANELS: [(&str, &str); 5] = [
    ("events", "Events"),
    ("scheduler", "Scheduler"),
    ("sponsors", "Sponsors"),
    ("content", "Content Studio"),
    ("analytics", "Analytics"),
];

/// Dashboard controller for WASM - wraps the shell and mock store with a
/// JS-friendly API
///
/// Every user gesture maps to exactly one method here; the JS layer keeps
/// no state beyond what the last `windows_json` call returned.
#[wasm_bindgen]
pub struct Dashboard {
    shell: Shell<String>,
    store: MockStore<LocalStorageBlob>,
}

#[wasm_bindgen]
impl Dashboard {
    /// Create the dashboard with the standard five-panel dock
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Set up panic hook for better error messages
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let dock = PANELS
            .iter()
            .map(|(id, label)| DockItem::new(*id, *label))
            .collect();

        Self {
            shell: Shell::new(dock),
            store: MockStore::new(LocalStorageBlob::new()),
        }
    }

    // =========================================================================
    // Shell
    // =========================================================================

    /// Launch (or toggle) the panel behind a dock icon
    #[wasm_bindgen]
    pub fn launch(&mut self, panel_id: &str) -> bool {
        self.shell.launch(panel_id, panel_id.to_string())
    }

    /// Close a panel window
    #[wasm_bindgen]
    pub fn close(&mut self, panel_id: &str) {
        self.shell.close(panel_id);
    }

    /// Minimize a panel window to the dock
    #[wasm_bindgen]
    pub fn minimize(&mut self, panel_id: &str) {
        self.shell.minimize(panel_id);
    }

    /// Bring a panel window to the front
    #[wasm_bindgen]
    pub fn focus(&mut self, panel_id: &str) {
        self.shell.focus(panel_id);
    }

    /// Record a dock icon's screen position for launch animations
    #[wasm_bindgen]
    pub fn set_dock_origin(&mut self, panel_id: &str, x: f32, y: f32) {
        self.shell.set_dock_origin(panel_id, Vec2::new(x, y));
    }

    /// Currently focused panel id, if any
    #[wasm_bindgen]
    pub fn focused(&self) -> Option<String> {
        self.shell.windows().focused().map(str::to_string)
    }

    /// Dock entries as JSON
    #[wasm_bindgen]
    pub fn dock_json(&self) -> String {
        serde_json::to_string(self.shell.dock()).unwrap_or_else(|_| "[]".to_string())
    }

    /// All windows as JSON, in insertion order, with their z indices
    #[wasm_bindgen]
    pub fn windows_json(&self) -> String {
        let manager = self.shell.windows();
        let windows: Vec<serde_json::Value> = manager
            .windows()
            .iter()
            .map(|w| {
                serde_json::json!({
                    "id": w.id,
                    "title": w.title,
                    "panel": w.content,
                    "minimized": w.is_minimized(),
                    "z": manager.z_index(&w.id),
                    "originHint": w.origin_hint,
                })
            })
            .collect();
        serde_json::to_string(&windows).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Data (mock store over localStorage)
    // =========================================================================

    /// List all events as JSON
    #[wasm_bindgen]
    pub fn list_events(&self) -> Result<String, JsValue> {
        to_json(&self.store.list_events().map_err(api_error)?)
    }

    /// Create an event from a draft JSON payload; returns the event
    #[wasm_bindgen]
    pub fn create_event(&self, draft_json: &str) -> Result<String, JsValue> {
        let draft: EventDraft = serde_json::from_str(draft_json)
            .map_err(|e| js_sys::Error::new(&format!("bad event draft: {e}")))?;
        to_json(&self.store.create_event(draft).map_err(api_error)?)
    }

    /// Fetch one event as JSON
    #[wasm_bindgen]
    pub fn get_event(&self, id: &str) -> Result<String, JsValue> {
        to_json(&self.store.get_event(id).map_err(api_error)?)
    }

    /// Delete an event; unknown ids are a no-op
    #[wasm_bindgen]
    pub fn delete_event(&self, id: &str) -> Result<(), JsValue> {
        self.store.delete_event(id).map_err(api_error)
    }

    /// Generate the demo schedule onto an event; returns the updated event
    #[wasm_bindgen]
    pub fn generate_schedule(&self, id: &str) -> Result<String, JsValue> {
        to_json(&self.store.generate_schedule(id).map_err(api_error)?)
    }

    /// Generate sponsorship tiers onto an event; returns the updated event
    #[wasm_bindgen]
    pub fn generate_tiers(&self, id: &str) -> Result<String, JsValue> {
        to_json(&self.store.generate_tiers(id).map_err(api_error)?)
    }

    /// Add the next sponsor-deck asset to an event; returns the updated event
    #[wasm_bindgen]
    pub fn generate_deck(&self, id: &str) -> Result<String, JsValue> {
        to_json(&self.store.generate_deck(id).map_err(api_error)?)
    }

    /// Generate outreach copy onto an event; returns the updated event
    #[wasm_bindgen]
    pub fn generate_outreach(&self, id: &str) -> Result<String, JsValue> {
        to_json(&self.store.generate_outreach(id).map_err(api_error)?)
    }

    /// Check a candidate slot against every stored event
    ///
    /// Times are RFC 3339 strings; the verdict comes back as JSON.
    #[wasm_bindgen]
    pub fn check_conflict(
        &self,
        start_time: &str,
        end_time: &str,
        venue: Option<String>,
    ) -> Result<String, JsValue> {
        let slot = TimeSlot::new(parse_time(start_time)?, parse_time(end_time)?, venue)
            .ok_or_else(|| js_sys::Error::new("start_time must be before end_time"))?;
        to_json(&self.store.check_conflict(&slot).map_err(api_error)?)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_time(value: &str) -> Result<DateTime<Utc>, JsValue> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| js_sys::Error::new(&format!("bad timestamp {value:?}: {e}")).into())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

fn api_error(e: ApiError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}
