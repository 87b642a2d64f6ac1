use crate::grid::{PixelGrid, COLS};

/// Glyphs used to draw lit and unlit pixels in a text preview.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PreviewStyle {
    pub on: char,
    pub off: char,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        PreviewStyle { on: '#', off: '.' }
    }
}

/// Render the grid as text, one line per row.
///
/// The first line labels the columns with hex digits `0`..`f` and every row
/// starts with its index, so a cell can be addressed by reading off the
/// labels:
///
/// ```text
///   0123456789abcdef
/// 0 #...............
/// 1 ................
/// ```
pub fn preview(grid: &PixelGrid, style: &PreviewStyle) -> String {
    let mut out = String::from("  ");
    for col in 0..COLS {
        out.push(char::from_digit(col as u32, 16).unwrap_or('?'));
    }
    out.push('\n');

    for (row, cells) in grid.rows().enumerate() {
        out.push_str(&format!("{row} "));
        for &on in cells {
            out.push(if on { style.on } else { style.off });
        }
        out.push('\n');
    }
    out
}
