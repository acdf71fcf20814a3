// Submodules for main UI functionality
pub mod main_ui;
pub mod keyboard_input;
pub mod statusbar;
