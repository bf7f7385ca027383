//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Accent used for headers and the active form field.
pub const INDIGO: Color = Color::Rgb(79, 70, 229);
/// Used for destructive confirmation dialogs.
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
