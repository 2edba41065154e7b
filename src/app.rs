use crate::input::{InputEvent, InputHandler};
use crate::panels;
use crate::renderer::Renderer;
use crate::scale::CoordinateScaler;
use crate::settings::Settings;
use crate::state::EditorState;

/// The ellipse editor application.
///
/// Only `Settings` survive a restart; drawings are discarded on exit.
pub struct PaintApp {
    settings: Settings,
    editor: EditorState,
    input: InputHandler,
    show_help: bool,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_settings(Settings::load(cc.storage))
    }

    pub fn with_settings(settings: Settings) -> Self {
        let editor = EditorState::default().with_drag_threshold(settings.drag_threshold_px);
        Self {
            show_help: settings.show_help_on_start,
            settings,
            editor,
            input: InputHandler::new(),
        }
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The scale is taken from the display once, on the first frame.
    fn ensure_scale(&mut self, ctx: &egui::Context) {
        if self.editor.is_scale_initialized() {
            return;
        }
        match CoordinateScaler::from_pixels_per_point(ctx.pixels_per_point()) {
            Ok(scaler) => {
                self.editor.initialize_scale(scaler);
            }
            Err(err) => {
                log::warn!("{}, keeping identity scale", err);
                self.editor.initialize_scale(CoordinateScaler::default());
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.save(storage);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_scale(ctx);

        let actions = panels::menu_bar(ctx, self.editor.mode());
        if actions.show_help {
            self.show_help = true;
        }
        panels::status_bar(ctx, self.editor.mode(), self.editor.shapes().len());

        if self.show_help {
            panels::help_window(ctx, &mut self.show_help, &mut self.settings.show_help_on_start);
        }

        let pending: Vec<InputEvent> = actions
            .command
            .map(InputEvent::ModeCommand)
            .into_iter()
            .collect();
        let renderer = Renderer::new(self.settings.background);
        panels::central_panel(ctx, &mut self.editor, &mut self.input, &renderer, pending);
    }
}
