mod central_panel;
mod help_window;
mod menu_bar;

pub use central_panel::{EguiHost, central_panel};
pub use help_window::{COMMAND_KEYS, HELP_TEXT, help_window};
pub use menu_bar::{MenuActions, menu_bar, status_bar};
