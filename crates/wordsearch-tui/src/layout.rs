use wordsearch_core::Position;

/// Terminal columns per grid cell (" X ")
pub const CELL_WIDTH: u16 = 3;

/// Where the grid sits on screen, for drawing and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Column of the left frame
    pub x: u16,
    /// Row of the top frame
    pub y: u16,
    /// Cells per side
    pub size: usize,
}

impl GridLayout {
    /// Frame width including both borders
    pub fn width(&self) -> u16 {
        self.size as u16 * CELL_WIDTH + 2
    }

    /// Frame height including both borders
    pub fn height(&self) -> u16 {
        self.size as u16 + 2
    }

    /// Screen column and row where a cell's text starts
    pub fn cell_origin(&self, pos: Position) -> (u16, u16) {
        (
            self.x + 1 + pos.col as u16 * CELL_WIDTH,
            self.y + 1 + pos.row as u16,
        )
    }

    /// The cell under a terminal coordinate, if any
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let inner_x = column.checked_sub(self.x + 1)?;
        let inner_y = row.checked_sub(self.y + 1)?;
        let col = (inner_x / CELL_WIDTH) as usize;
        let row = inner_y as usize;
        if row < self.size && col < self.size {
            Some(Position::new(row, col))
        } else {
            None
        }
    }
}

/// Center a grid of `size` cells, leaving room for the side panel
pub fn grid_layout(size: usize, term_width: u16, term_height: u16, panel_width: u16) -> GridLayout {
    let mut layout = GridLayout { x: 1, y: 1, size };
    let total_width = layout.width() + 3 + panel_width;
    if term_width > total_width {
        layout.x = (term_width - total_width) / 2;
    }
    if term_height > layout.height() + 8 {
        layout.y = 2;
    }
    layout
}
