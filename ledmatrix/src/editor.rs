use tracing::{debug, warn};

use crate::error::GridError;
use crate::export::{self, Bitmap, ExportStyle};
use crate::grid::PixelGrid;

/// The state behind a drawing surface: one grid and the style used to
/// export it.
///
/// An input surface reports cell activations through
/// [`on_pixel_activated`](Editor::on_pixel_activated) and redraws the cell
/// from the returned state; when the user asks for output it calls
/// [`on_export_requested`](Editor::on_export_requested) and decides itself
/// where the text goes.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    grid: PixelGrid,
    style: ExportStyle,
}

impl Editor {
    pub fn new(style: ExportStyle) -> Self {
        Editor {
            grid: PixelGrid::new(),
            style,
        }
    }

    /// Toggle a pixel and return its new state.
    pub fn on_pixel_activated(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        match self.grid.toggle(row, col) {
            Ok(on) => {
                debug!(row, col, on, lit = self.grid.lit_count(), "toggled pixel");
                Ok(on)
            }
            Err(e) => {
                warn!(row, col, "rejected toggle outside the grid");
                Err(e)
            }
        }
    }

    /// The C array text for the current grid.
    pub fn on_export_requested(&self) -> String {
        let text = self.bitmap().to_c_array(&self.style);
        debug!(lit = self.grid.lit_count(), "exported bitmap");
        text
    }

    pub fn bitmap(&self) -> Bitmap {
        export::export(&self.grid)
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn style(&self) -> &ExportStyle {
        &self.style
    }

    pub fn reset(&mut self) {
        self.grid.reset();
        debug!("cleared grid");
    }
}
