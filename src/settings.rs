use egui::Color32;
use serde::{Deserialize, Serialize};

/// Default drag rectangle half-size, in device pixels
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = 4.0;
pub const DEFAULT_BACKGROUND: Color32 = Color32::from_rgb(135, 206, 235);

/// User settings, persisted through eframe storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // new fields fall back to defaults when loading older state
pub struct Settings {
    /// Canvas clear color
    pub background: Color32,
    /// Pointer travel (per axis, device pixels) before a press in Draw mode creates a shape
    pub drag_threshold_px: f32,
    pub show_help_on_start: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            show_help_on_start: true,
        }
    }
}

impl Settings {
    /// Replaces out-of-range values with defaults.
    pub fn sanitized(mut self) -> Self {
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            log::warn!(
                "Ignoring invalid drag threshold {}, using {}",
                self.drag_threshold_px,
                DEFAULT_DRAG_THRESHOLD_PX
            );
            self.drag_threshold_px = DEFAULT_DRAG_THRESHOLD_PX;
        }
        self
    }

    /// Loads settings from eframe storage, falling back to defaults.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, eframe::APP_KEY))
            .unwrap_or_default()
            .sanitized()
    }

    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
