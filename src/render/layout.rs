use ratatui::layout::Rect;

pub const MIN_WIDTH: usize = 12;
pub const MIN_HEIGHT: usize = 8;
pub const MAX_WIDTH: usize = 36;
pub const MAX_HEIGHT: usize = 22;
/// Terminal columns per board cell
pub const CELL_WIDTH: u16 = 2;
pub const HEADER_HEIGHT: u16 = 3;
pub const CONTROLS_HEIGHT: u16 = 3;
const ROOT_PADDING: u16 = 1;
const BORDER: u16 = 2;

/// Board dimensions in cells, plus the terminal footprint of the bordered board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub width: usize,
    pub height: usize,
}

impl BoardSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Largest board that fits the terminal, kept within the playable range
    pub fn from_terminal(columns: u16, rows: u16) -> Self {
        let available_width = columns.saturating_sub(ROOT_PADDING * 2 + BORDER);
        let available_height = rows
            .saturating_sub(ROOT_PADDING * 2 + HEADER_HEIGHT + CONTROLS_HEIGHT + BORDER);

        Self {
            width: ((available_width / CELL_WIDTH) as usize).clamp(MIN_WIDTH, MAX_WIDTH),
            height: (available_height as usize).clamp(MIN_HEIGHT, MAX_HEIGHT),
        }
    }

    /// Columns taken by the board including its border
    pub fn pixel_width(&self) -> u16 {
        u16::try_from(self.width)
            .unwrap_or(u16::MAX)
            .saturating_mul(CELL_WIDTH)
            .saturating_add(BORDER)
    }

    /// Rows taken by the board including its border
    pub fn pixel_height(&self) -> u16 {
        u16::try_from(self.height)
            .unwrap_or(u16::MAX)
            .saturating_add(BORDER)
    }
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_from_typical_terminal() {
        // 80 cols: (80 - 4) / 2 = 38 -> 36; 30 rows: 30 - 10 = 20
        let size = BoardSize::from_terminal(80, 30);
        assert_eq!(size, BoardSize::new(36, 20));
        assert_eq!(size.pixel_width(), 74);
        assert_eq!(size.pixel_height(), 22);
    }

    #[test]
    fn test_board_size_clamps_tiny_terminal() {
        assert_eq!(BoardSize::from_terminal(10, 5), BoardSize::new(MIN_WIDTH, MIN_HEIGHT));
        assert_eq!(BoardSize::from_terminal(0, 0), BoardSize::new(MIN_WIDTH, MIN_HEIGHT));
    }

    #[test]
    fn test_board_size_clamps_huge_terminal() {
        assert_eq!(BoardSize::from_terminal(400, 200), BoardSize::new(MAX_WIDTH, MAX_HEIGHT));
    }

    #[test]
    fn test_footprint_saturates_for_huge_boards() {
        let size = BoardSize::new(40000, 70000);
        assert_eq!(size.pixel_width(), u16::MAX);
        assert_eq!(size.pixel_height(), u16::MAX);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 30, 30), area);
    }
}
