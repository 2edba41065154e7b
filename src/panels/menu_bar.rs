use crate::tools::{Mode, ModeCommand};

/// Actions picked from the menu bar this frame
#[derive(Debug, Default, PartialEq)]
pub struct MenuActions {
    pub command: Option<ModeCommand>,
    pub show_help: bool,
}

pub fn menu_bar(ctx: &egui::Context, mode: Mode) -> MenuActions {
    let mut actions = MenuActions::default();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("Mode", |ui| {
                let entries = [
                    (ModeCommand::Draw, "Draw", "F1", mode == Mode::Draw),
                    (ModeCommand::Select, "Select", "F2", mode != Mode::Draw),
                ];
                for (command, label, shortcut, active) in entries {
                    let button = egui::Button::new(label).selected(active).shortcut_text(shortcut);
                    if ui.add(button).clicked() {
                        actions.command = Some(command);
                        ui.close_menu();
                    }
                }
                ui.separator();
                let toggle = egui::Button::new("Toggle").shortcut_text("Ctrl+M");
                if ui.add(toggle).clicked() {
                    actions.command = Some(ModeCommand::Toggle);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    actions.show_help = true;
                    ui.close_menu();
                }
            });
        });
    });

    actions
}

pub fn status_bar(ctx: &egui::Context, mode: Mode, shape_count: usize) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Mode: {}", mode.name()));
            ui.separator();
            ui.label(format!("Ellipses: {}", shape_count));
        });
    });
}
