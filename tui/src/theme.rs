//! Theme and Colors
//!
//! A small palette for the demo surface: settled characters glow warm,
//! still-scrambling characters stay cool so the reveal front is visible.

use ratatui::style::Color;

/// Characters already settled into the final text.
pub const SETTLED: Color = Color::Rgb(255, 214, 120);

/// Characters still churning.
pub const SCRAMBLING: Color = Color::Rgb(110, 160, 200);

/// Target-text input field.
pub const INPUT: Color = Color::Rgb(220, 220, 220);

/// Input field border.
pub const INPUT_BORDER: Color = Color::Rgb(90, 90, 110);

/// Status line text.
pub const STATUS: Color = Color::Rgb(150, 150, 160);

/// Highlighted parts of the status line (mode, charset).
pub const STATUS_ACCENT: Color = Color::Rgb(180, 220, 140);
