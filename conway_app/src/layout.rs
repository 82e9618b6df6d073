// layout.rs - Board sizing and pointer-to-cell mapping

use egui::{Pos2, Vec2};

pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 800.0;
pub const FOOTER_HEIGHT: f32 = 60.0;    // Title and key help below the board
pub const CELLS_PER_ROW: f32 = 75.0;    // Cell size is derived from this
pub const CELL_SPACING: f32 = 0.5;      // Gap painted between neighbouring cells

/// Rows and columns for a board filling `width` x `height` points.
///
/// Columns are truncated to whole cells; rows round up so the board always
/// reaches the bottom edge.
pub fn board_dimensions(width: f32, height: f32) -> (usize, usize) {
    let cell_size = width / CELLS_PER_ROW;
    let rows = (height / cell_size).ceil() as usize;
    let columns = (width / cell_size).trunc() as usize;
    (rows.max(1), columns.max(1))
}

/// Largest square cell that fits the board into `available`.
pub fn cell_size(available: Vec2, rows: usize, columns: usize) -> f32 {
    (available.x / columns as f32).min(available.y / rows as f32).max(1.0)
}

/// The cell under `pointer`, if any, for a board drawn from `origin`.
pub fn cell_at(origin: Pos2, cell_size: f32, pointer: Pos2, rows: usize, columns: usize) -> Option<(usize, usize)> {
    let offset = pointer - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let row = (offset.y / cell_size) as usize;
    let column = (offset.x / cell_size) as usize;
    (row < rows && column < columns).then_some((row, column))
}

/// Cell under a held primary button, so a stroke toggles each cell once per
/// entry rather than once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStroke {
    current: Option<(usize, usize)>,
}

impl DrawStroke {
    /// Feeds the cell under the held pointer for this frame (`None` once the
    /// button is released or the pointer leaves the board). Returns the cell
    /// to toggle when the pointer has just entered it.
    pub fn advance(&mut self, cell: Option<(usize, usize)>) -> Option<(usize, usize)> {
        let entered = cell.filter(|&cell| self.current != Some(cell));
        self.current = cell;
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::LifeConfig;
    use egui::{pos2, vec2};

    #[test]
    fn default_window_gives_seventy_five_columns() {
        let (rows, columns) = board_dimensions(WINDOW_WIDTH, WINDOW_HEIGHT - FOOTER_HEIGHT);
        assert_eq!(columns, 75);
        assert_eq!(rows, 47); // 740 / 16 = 46.25, rounded up
    }

    #[test]
    fn tiny_viewport_still_has_one_cell() {
        assert_eq!(board_dimensions(75.0, 0.0), (1, 75));
    }

    #[test]
    fn cell_size_fits_the_tighter_axis() {
        assert_eq!(cell_size(vec2(750.0, 200.0), 10, 75), 10.0);
        assert_eq!(cell_size(vec2(750.0, 100.0), 10, 75), 10.0);
        assert_eq!(cell_size(vec2(750.0, 50.0), 10, 75), 5.0);
    }

    #[test]
    fn pointer_maps_to_cell() {
        let origin = pos2(100.0, 50.0);
        assert_eq!(cell_at(origin, 10.0, pos2(100.0, 50.0), 4, 6), Some((0, 0)));
        assert_eq!(cell_at(origin, 10.0, pos2(135.0, 79.9), 4, 6), Some((2, 3)));
        assert_eq!(cell_at(origin, 10.0, pos2(159.9, 89.9), 4, 6), Some((3, 5)));
    }

    #[test]
    fn pointer_off_board_maps_to_nothing() {
        let origin = pos2(100.0, 50.0);
        assert_eq!(cell_at(origin, 10.0, pos2(99.0, 60.0), 4, 6), None);
        assert_eq!(cell_at(origin, 10.0, pos2(110.0, 49.0), 4, 6), None);
        assert_eq!(cell_at(origin, 10.0, pos2(160.0, 60.0), 4, 6), None);
        assert_eq!(cell_at(origin, 10.0, pos2(110.0, 90.0), 4, 6), None);
    }

    #[test]
    fn window_sizes_always_give_a_valid_board() {
        for (width, height) in [(WINDOW_WIDTH, WINDOW_HEIGHT - FOOTER_HEIGHT), (75.0, 0.0), (300.0, 1.0)] {
            let (rows, columns) = board_dimensions(width, height);
            assert!(LifeConfig::new(rows, columns).validate().is_ok(), "{width}x{height}");
        }
    }

    #[test]
    fn stroke_toggles_on_entry_only() {
        let mut stroke = DrawStroke::default();
        assert_eq!(stroke.advance(Some((1, 1))), Some((1, 1)));
        // Held over the same cell across frames.
        assert_eq!(stroke.advance(Some((1, 1))), None);
        assert_eq!(stroke.advance(Some((1, 1))), None);
        // Dragged into the next cell.
        assert_eq!(stroke.advance(Some((1, 2))), Some((1, 2)));
    }

    #[test]
    fn stroke_re_entering_a_cell_toggles_again() {
        let mut stroke = DrawStroke::default();
        assert_eq!(stroke.advance(Some((0, 0))), Some((0, 0)));
        assert_eq!(stroke.advance(Some((0, 1))), Some((0, 1)));
        assert_eq!(stroke.advance(Some((0, 0))), Some((0, 0)));
    }

    #[test]
    fn stroke_release_starts_fresh() {
        let mut stroke = DrawStroke::default();
        assert_eq!(stroke.advance(None), None);
        assert_eq!(stroke.advance(Some((2, 3))), Some((2, 3)));
        assert_eq!(stroke.advance(None), None);
        assert_eq!(stroke, DrawStroke::default());
        assert_eq!(stroke.advance(Some((2, 3))), Some((2, 3)));
    }
}
