//! Grid geometry for the calendar: how many rows a month needs, where each
//! cell sits, and how large cells get for a given width.

/// Sunday-first week
pub const GRID_COLUMNS: usize = 7;

/// Gap between day cells and header pills
pub const CALENDAR_CARD_SPACING: f32 = 6.0;

/// Day cells never shrink below this
pub const MIN_CELL_SIZE: f32 = 48.0;

/// Day cells never grow beyond this
pub const MAX_CELL_SIZE: f32 = 64.0;

/// Height of the weekday header row
pub const WEEKDAY_HEADER_HEIGHT: f32 = 28.0;

/// Row and column of the cell at `index` in a row-major, 7-wide grid
pub fn grid_position(index: usize) -> (usize, usize) {
    (index / GRID_COLUMNS, index % GRID_COLUMNS)
}

/// Rows needed to show `cell_count` cells
pub fn row_count(cell_count: usize) -> usize {
    cell_count.div_ceil(GRID_COLUMNS)
}

/// Side length of a square day cell that fits seven columns in `available_width`
pub fn cell_size_for_width(available_width: f32) -> f32 {
    let gaps = CALENDAR_CARD_SPACING * (GRID_COLUMNS as f32 - 1.0);
    ((available_width - gaps) / GRID_COLUMNS as f32).clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
}

/// Total width of a grid built from cells of `cell_size`
pub fn grid_width(cell_size: f32) -> f32 {
    cell_size * GRID_COLUMNS as f32 + CALENDAR_CARD_SPACING * (GRID_COLUMNS as f32 - 1.0)
}

/// Total height of the header row plus `rows` rows of cells
pub fn grid_height(rows: usize, cell_size: f32) -> f32 {
    if rows == 0 {
        return WEEKDAY_HEADER_HEIGHT;
    }
    WEEKDAY_HEADER_HEIGHT
        + CALENDAR_CARD_SPACING * 2.0
        + cell_size * rows as f32
        + CALENDAR_CARD_SPACING * (rows as f32 - 1.0)
}

/// Day number font size for a cell
pub fn day_number_font_size(cell_size: f32) -> f32 {
    (cell_size * 0.2).clamp(10.0, 13.0)
}

/// Diameter of the subscription badge in a cell
pub fn badge_diameter(cell_size: f32) -> f32 {
    (cell_size * 0.4).clamp(18.0, 26.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_position() {
        assert_eq!(grid_position(0), (0, 0));
        assert_eq!(grid_position(6), (0, 6));
        assert_eq!(grid_position(7), (1, 0));
        assert_eq!(grid_position(30), (4, 2));
    }

    #[test]
    fn test_row_count() {
        // February 2015 starts on a Sunday and fills exactly four rows
        assert_eq!(row_count(28), 4);
        assert_eq!(row_count(29), 5);
        // Saturday start with 31 days needs six rows
        assert_eq!(row_count(6 + 31), 6);
        assert_eq!(row_count(0), 0);
    }

    #[test]
    fn test_cell_size_is_clamped() {
        assert_eq!(cell_size_for_width(100.0), MIN_CELL_SIZE);
        assert_eq!(cell_size_for_width(10_000.0), MAX_CELL_SIZE);

        let width = 7.0 * 56.0 + 6.0 * CALENDAR_CARD_SPACING;
        assert!((cell_size_for_width(width) - 56.0).abs() < 1e-4);
        assert!((grid_width(56.0) - width).abs() < 1e-4);
    }

    #[test]
    fn test_grid_height() {
        assert_eq!(grid_height(0, 50.0), WEEKDAY_HEADER_HEIGHT);
        let expected = WEEKDAY_HEADER_HEIGHT + 12.0 + 250.0 + 24.0;
        assert!((grid_height(5, 50.0) - expected).abs() < 1e-4);
    }
}
