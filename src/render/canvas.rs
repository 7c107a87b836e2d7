//! Layout renderer.
//!
//! Lays draw events out on a grid measured in size units: blocks are
//! squares placed left to right, spaces move the cursor, and line breaks
//! start a new row below the tallest item of the current one. Errors show
//! up as a one-unit magenta square and are kept for reporting.
//!
//! Sizes and repeat counts are unbounded in scripts, so the canvas caps
//! how many items it keeps and how many pixels it will rasterise. Going
//! over either is a render error, not an allocation failure.

use log::warn;

use crate::error::{BlocksError, Result};
use crate::exec::Renderer;
use crate::types::Colour;

/// Largest width or height, in pixels, of a rasterised script.
pub const MAX_DIMENSION: usize = 16_384;

/// Largest pixel count of a rasterised script.
pub const MAX_PIXELS: usize = 1 << 25;

/// Items kept before the canvas stops recording.
const MAX_CELLS: usize = 1 << 20;

/// Height given to a row that holds nothing but line breaks.
const EMPTY_ROW_HEIGHT: f64 = 1.0;

/// Size of the placeholder drawn for an error.
const ERROR_SIZE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
struct Cell {
    x: f64,
    size: f64,
    colour: Colour,
}

#[derive(Debug, Clone, Default)]
struct Row {
    cells: Vec<Cell>,
    width: f64,
}

impl Row {
    fn height(&self) -> f64 {
        self.cells
            .iter()
            .map(|c| c.size)
            .reduce(f64::max)
            .unwrap_or(EMPTY_ROW_HEIGHT)
    }

    fn push(&mut self, size: f64, colour: Colour) {
        self.cells.push(Cell {
            x: self.width,
            size,
            colour,
        });
        self.width += size;
    }
}

/// Collects draw events into a laid-out picture.
#[derive(Debug, Clone)]
pub struct Canvas {
    rows: Vec<Row>,
    errors: Vec<String>,
    cells: usize,
    dropped: u64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            rows: vec![Row::default()],
            errors: Vec::new(),
            cells: 0,
            dropped: 0,
        }
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error messages received, in order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Number of blocks placed (error placeholders excluded).
    pub fn block_count(&self) -> usize {
        let cells: usize = self.rows.iter().map(|r| r.cells.len()).sum();
        cells.saturating_sub(self.errors.len())
    }

    /// Whether items were dropped because the canvas was full.
    pub fn is_overflowed(&self) -> bool {
        self.dropped > 0
    }

    /// Rows that take up space. A trailing line break does not add a row.
    fn laid_out_rows(&self) -> &[Row] {
        match self.rows.split_last() {
            Some((last, rest)) if last.cells.is_empty() && last.width == 0.0 => rest,
            _ => &self.rows,
        }
    }

    /// Width and height in size units.
    pub fn extent(&self) -> (f64, f64) {
        let rows = self.laid_out_rows();
        let width = rows.iter().map(|r| r.width).fold(0.0, f64::max);
        let height: f64 = rows.iter().map(Row::height).sum();
        (width, height)
    }

    /// Rasterise to pixels, `unit` pixels per size unit.
    ///
    /// The image is never smaller than 1x1 so an empty script still
    /// produces a valid picture. Fails without allocating when the picture
    /// would exceed [`MAX_DIMENSION`] or [`MAX_PIXELS`].
    pub fn rasterise(&self, name: &str, unit: u32, background: Colour) -> Result<RenderedScript> {
        if self.is_overflowed() {
            return Err(too_large(
                name,
                format!("more than {} items to draw", MAX_CELLS),
            ));
        }

        let unit = f64::from(unit.max(1));
        let (width, height) = self.extent();
        let px_width = pixel_length(width, unit);
        let px_height = pixel_length(height, unit);
        let (Some(px_width), Some(px_height)) = (px_width, px_height) else {
            return Err(too_large(
                name,
                format!("{} x {} units at {} px per unit", width, height, unit),
            ));
        };
        if px_width * px_height > MAX_PIXELS {
            return Err(too_large(
                name,
                format!("{} x {} pixels", px_width, px_height),
            ));
        }

        let mut pixels = vec![vec![background; px_width]; px_height];

        let mut top = 0.0;
        for row in self.laid_out_rows() {
            for cell in &row.cells {
                let x0 = (cell.x * unit).round() as usize;
                let y0 = (top * unit).round() as usize;
                let x1 = (((cell.x + cell.size) * unit).round() as usize).min(px_width);
                let y1 = (((top + cell.size) * unit).round() as usize).min(px_height);

                for line in pixels.iter_mut().take(y1).skip(y0) {
                    for pixel in line.iter_mut().take(x1).skip(x0) {
                        *pixel = cell.colour;
                    }
                }
            }
            top += row.height();
        }

        Ok(RenderedScript::new(name, pixels))
    }

    fn current_row(&mut self) -> &mut Row {
        if self.rows.is_empty() {
            self.rows.push(Row::default());
        }
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Place an item, or only advance the cursor once the canvas is full.
    fn place(&mut self, size: f64, colour: Colour) {
        if self.cells < MAX_CELLS {
            self.cells += 1;
            self.current_row().push(size, colour);
            return;
        }
        if self.dropped == 0 {
            warn!("canvas is full after {} items, dropping the rest", MAX_CELLS);
        }
        self.dropped += 1;
        self.current_row().width += size;
    }
}

/// Pixel length of `units` size units, or `None` past [`MAX_DIMENSION`].
fn pixel_length(units: f64, unit: f64) -> Option<usize> {
    let px = (units * unit).ceil();
    if px.is_finite() && px <= MAX_DIMENSION as f64 {
        Some((px as usize).max(1))
    } else {
        None
    }
}

fn too_large(name: &str, what: String) -> BlocksError {
    BlocksError::Render {
        message: format!("{} is too large to rasterise ({})", name, what),
        help: Some(format!(
            "Images are limited to {} pixels per side and {} pixels in total; lower the unit or the block sizes",
            MAX_DIMENSION, MAX_PIXELS
        )),
    }
}

impl Renderer for Canvas {
    fn draw_block(&mut self, size: f64, colour: Colour) {
        self.place(size, colour);
    }

    fn draw_space(&mut self, size: f64) {
        self.current_row().width += size;
    }

    fn line_break(&mut self) {
        self.rows.push(Row::default());
    }

    fn display_error(&mut self, message: &str) {
        self.place(ERROR_SIZE, Colour::MAGENTA);
        self.errors.push(message.to_string());
    }
}

/// A rasterised script.
#[derive(Debug, Clone)]
pub struct RenderedScript {
    pub name: String,
    pixels: Vec<Vec<Colour>>,
}

impl RenderedScript {
    pub fn new(name: impl Into<String>, pixels: Vec<Vec<Colour>>) -> Self {
        Self {
            name: name.into(),
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.pixels.first().map_or(0, |r| r.len())
    }

    pub fn height(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::run_script;

    const RED: Colour = Colour::rgb(255, 0, 0);
    const W: Colour = Colour::WHITE;

    fn canvas(source: &str) -> Canvas {
        let mut canvas = Canvas::new();
        run_script(source, &mut canvas);
        canvas
    }

    #[test]
    fn test_extent_single_row() {
        let c = canvas("block.size-2 space-1 block");
        assert_eq!(c.extent(), (4.0, 2.0));
    }

    #[test]
    fn test_extent_multiple_rows() {
        let c = canvas("block.repeat-3\nend\nblock.size-2");
        assert_eq!(c.extent(), (3.0, 3.0));
    }

    #[test]
    fn test_trailing_end_adds_no_row() {
        assert_eq!(canvas("block end").extent(), (1.0, 1.0));
    }

    #[test]
    fn test_blank_row_between_ends() {
        assert_eq!(canvas("block end end block").extent(), (1.0, 3.0));
    }

    #[test]
    fn test_errors_are_collected_and_drawn() {
        let c = canvas("block nope");
        assert_eq!(c.errors(), ["unknown command: nope".to_string()]);
        assert_eq!(c.block_count(), 1);

        let img = c.rasterise("t", 1, W).unwrap();
        assert_eq!(img.pixels()[0], vec![Colour::BLACK, Colour::MAGENTA]);
    }

    #[test]
    fn test_rasterise_layout() {
        let img = canvas("block.color-red space-1 block.color-red end block")
            .rasterise("t", 1, W)
            .unwrap();

        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.pixels()[0], vec![RED, W, RED]);
        assert_eq!(img.pixels()[1], vec![Colour::BLACK, W, W]);
    }

    #[test]
    fn test_rasterise_scales_by_unit() {
        let img = canvas("block.size-2.color-red").rasterise("t", 4, W).unwrap();

        assert_eq!(img.width(), 8);
        assert_eq!(img.height(), 8);
        assert!(img.pixels().iter().flatten().all(|&p| p == RED));
    }

    #[test]
    fn test_rasterise_empty_script() {
        let img = canvas("# nothing").rasterise("empty", 16, W).unwrap();
        assert_eq!((img.width(), img.height()), (1, 1));
        assert_eq!(img.pixels()[0][0], W);
    }

    #[test]
    fn test_rasterise_rejects_huge_block() {
        let err = canvas("block.size-1e300").rasterise("huge", 16, W).unwrap_err();
        assert!(matches!(err, BlocksError::Render { .. }));
        assert!(err.to_string().contains("huge is too large"));
    }

    #[test]
    fn test_rasterise_rejects_too_many_pixels() {
        // 16_000 px per side is allowed, but not 16_000 squared.
        let err = canvas("block.size-4000").rasterise("t", 4, W).unwrap_err();
        assert!(err.to_string().contains("16000 x 16000 pixels"));

        assert!(canvas("block.size-2000").rasterise("t", 10, W).is_err());
        assert!(canvas("block.size-100000").rasterise("t", 16, W).is_err());
        assert!(canvas("block.size-100").rasterise("t", 16, W).is_ok());
    }

    #[test]
    fn test_full_canvas_stops_recording() {
        let c = canvas("block.repeat-2000000");

        assert!(c.is_overflowed());
        assert_eq!(c.block_count(), MAX_CELLS);
        assert_eq!(c.extent(), (2_000_000.0, 1.0));
        assert!(c.rasterise("t", 1, W).is_err());
    }
}
