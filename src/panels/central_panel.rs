use egui::Context;

use crate::input::{InputEvent, InputHandler};
use crate::renderer::{PainterSurface, Renderer};
use crate::state::{EditorState, Host};
use crate::tools::Mode;

/// `Host` implementation backed by the egui context.
///
/// Capture is not forwarded: `InputHandler` routes pointer events from
/// `EditorState::is_captured` instead.
pub struct EguiHost<'a> {
    ctx: &'a Context,
}

impl<'a> EguiHost<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }
}

impl Host for EguiHost<'_> {
    fn request_redraw(&mut self) {
        self.ctx.request_repaint();
    }

    fn set_cursor(&mut self, mode: Mode) {
        self.ctx.set_cursor_icon(mode.cursor_icon());
    }
}

/// Canvas panel: routes input to the editor, then paints it.
///
/// `pending` holds commands raised elsewhere this frame (menu clicks); they
/// are applied before pointer input.
pub fn central_panel(
    ctx: &Context,
    editor: &mut EditorState,
    input: &mut InputHandler,
    renderer: &Renderer,
    pending: Vec<InputEvent>,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;

            input.set_canvas(rect, ctx.pixels_per_point());
            let mut events = pending;
            events.extend(input.process_input(ctx, response.hovered(), editor.is_captured()));

            let mut host = EguiHost::new(ctx);
            for event in &events {
                event.dispatch(editor, &mut host);
            }

            if response.hovered() || editor.is_captured() {
                // egui resets the cursor every frame
                ctx.set_cursor_icon(editor.mode().cursor_icon());
            }

            let mut surface = PainterSurface::new(&painter, rect.min);
            editor.render_frame(renderer, &mut surface);
        });
}
