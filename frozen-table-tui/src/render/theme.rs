//! Colours used by the painter.

use super::buffer::{Pen, Rgb, TextStyle};

pub const BACKGROUND: Rgb = Rgb::new(24, 26, 33);
pub const FOREGROUND: Rgb = Rgb::new(220, 223, 228);
pub const MUTED: Rgb = Rgb::new(128, 134, 148);
pub const ACCENT: Rgb = Rgb::new(97, 175, 239);
pub const ERROR: Rgb = Rgb::new(224, 108, 117);

pub const HEADER_BG: Rgb = Rgb::new(40, 44, 52);
pub const PINNED_BG: Rgb = Rgb::new(33, 37, 46);
pub const PINNED_HEADER_BG: Rgb = Rgb::new(52, 57, 68);
pub const SELECTED_BG: Rgb = Rgb::new(62, 68, 81);
pub const DIVIDER: Rgb = Rgb::new(86, 93, 108);

pub const TEXT: Pen = Pen::new(FOREGROUND, BACKGROUND);
pub const TITLE: Pen = Pen::new(ACCENT, BACKGROUND).with_style(TextStyle::new().bold());
pub const HINT: Pen = Pen::new(MUTED, BACKGROUND);
pub const FAILURE: Pen = Pen::new(ERROR, BACKGROUND).with_style(TextStyle::new().bold());

pub const HEADER: Pen = Pen::new(FOREGROUND, HEADER_BG).with_style(TextStyle::new().bold());
pub const PINNED_HEADER: Pen =
    Pen::new(FOREGROUND, PINNED_HEADER_BG).with_style(TextStyle::new().bold());
pub const CELL: Pen = Pen::new(FOREGROUND, BACKGROUND);
pub const PINNED_CELL: Pen = Pen::new(FOREGROUND, PINNED_BG);
pub const PLACEHOLDER: Pen = Pen::new(MUTED, BACKGROUND).with_style(TextStyle::new().dim());
pub const PIN_EDGE: Pen = Pen::new(DIVIDER, PINNED_BG);
