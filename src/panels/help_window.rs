pub const HELP_TEXT: &[(&str, &str)] = &[
    ("Draw mode", "Press and drag to draw a new ellipse."),
    ("Selection mode", "Click an ellipse to select it."),
    ("Drag mode", "Drag a selected ellipse to move it."),
];

pub const COMMAND_KEYS: &[(&str, &str)] = &[
    ("Ctrl+M", "Toggle between modes."),
    ("F1", "Switch to draw mode."),
    ("F2", "Switch to selection mode."),
];

/// Describes the modes and command keys. `open` is cleared when closed.
pub fn help_window(ctx: &egui::Context, open: &mut bool, show_on_start: &mut bool) {
    let mut close_clicked = false;
    egui::Window::new("Draw Ellipses")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("The program has three modes:");
            egui::Grid::new("help_modes").num_columns(2).show(ui, |ui| {
                for (name, text) in HELP_TEXT {
                    ui.strong(*name);
                    ui.label(*text);
                    ui.end_row();
                }
            });
            ui.separator();
            ui.label("Command keys");
            egui::Grid::new("help_keys").num_columns(2).show(ui, |ui| {
                for (key, text) in COMMAND_KEYS {
                    ui.monospace(*key);
                    ui.label(*text);
                    ui.end_row();
                }
            });
            ui.separator();
            ui.checkbox(show_on_start, "Show this on startup");
            close_clicked = ui.button("OK").clicked();
        });
    if close_clicked {
        *open = false;
    }
}
