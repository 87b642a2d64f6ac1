//! Packing a [`PixelGrid`] into 16-bit rows and rendering the result as a
//! C array literal.
//!
//! Column 0 is the most significant bit of a row and column 15 the least
//! significant, so the binary literals read left to right the same way the
//! pattern was drawn.

use std::fmt;

use crate::error::ConfigError;
use crate::grid::{PixelGrid, COLS, ROWS};

const DEFAULT_NAME: &str = "bitmap";

/// How the exported array is named in the rendered source text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExportStyle {
    name: String,
}

impl ExportStyle {
    /// Create a style with the given array identifier.
    pub fn new(name: &str) -> Result<Self, ConfigError> {
        let style = ExportStyle {
            name: name.to_string(),
        };
        style.validate()?;
        Ok(style)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check that the array name is a valid C identifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut chars = self.name.chars();
        let valid = match chars.next() {
            Some(first) => {
                (first.is_ascii_alphabetic() || first == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            None => false,
        };
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidName(self.name.clone()))
        }
    }
}

impl Default for ExportStyle {
    fn default() -> Self {
        ExportStyle {
            name: DEFAULT_NAME.to_string(),
        }
    }
}

/// One export of a grid: the packed rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap {
    rows: [u16; ROWS],
}

impl Bitmap {
    pub fn rows(&self) -> &[u16; ROWS] {
        &self.rows
    }

    /// Render as `0b`-prefixed binary literals.
    pub fn to_c_array(&self, style: &ExportStyle) -> String {
        self.render(style, |value| format!("0b{value:016b}"))
    }

    /// Render as `0x`-prefixed hex literals, for compilers without binary
    /// literal support.
    pub fn to_hex_array(&self, style: &ExportStyle) -> String {
        self.render(style, |value| format!("0x{value:04X}"))
    }

    fn render(&self, style: &ExportStyle, literal: impl Fn(u16) -> String) -> String {
        let mut out = String::new();
        out.push_str("static const uint16_t\n");
        out.push_str(&format!("    {}[] = {{\n", style.name));
        for &value in &self.rows {
            out.push_str("        ");
            out.push_str(&literal(value));
            out.push_str(",\n");
        }
        out.push_str("    };\n");
        out
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_c_array(&ExportStyle::default()))
    }
}

/// Pack one row of pixels, column 0 into bit 15.
pub fn pack_row(cells: &[bool; COLS]) -> u16 {
    let mut value = 0u16;
    for (col, &on) in cells.iter().enumerate() {
        if on {
            value |= 1 << (COLS - 1 - col);
        }
    }
    value
}

/// Pack every row of the grid. Reads the grid once and keeps no state.
pub fn export(grid: &PixelGrid) -> Bitmap {
    let mut rows = [0u16; ROWS];
    for (slot, cells) in rows.iter_mut().zip(grid.rows()) {
        *slot = pack_row(cells);
    }
    Bitmap { rows }
}
