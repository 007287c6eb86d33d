/// One of the four cardinal directions a cell can connect through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Candidate order used by the generator before shuffling.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Grid-coordinate delta for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// One cell of the generation grid.
///
/// Connection flags are always set in mirrored pairs: if this cell connects
/// right, the neighbor to its right connects left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
    pub visited: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl GridCell {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            visited: false,
            left: false,
            right: false,
            up: false,
            down: false,
        }
    }

    pub fn connects(&self, dir: Direction) -> bool {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    pub fn set_connection(&mut self, dir: Direction) {
        match dir {
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
        }
    }

    /// True if any doorway leads out of this cell.
    pub fn has_connections(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// The result of dungeon generation: a grid of cells plus the chosen start
/// cell and the pixel sizing echoed from the configuration.
///
/// Immutable after generation; moves by value into the painter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonLayout {
    /// Grid width in cells
    pub width: i32,
    /// Grid height in cells
    pub height: i32,
    /// Pixel width of one cell
    pub grid_width: i32,
    /// Pixel height of one cell
    pub grid_height: i32,
    pub start_x: i32,
    pub start_y: i32,
    cells: Vec<GridCell>,
}

impl DungeonLayout {
    pub(crate) fn new(width: i32, height: i32, grid_width: i32, grid_height: i32) -> Self {
        let mut cells = Vec::with_capacity((width * height).max(0) as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(GridCell::new(x, y));
            }
        }
        Self {
            width,
            height,
            grid_width,
            grid_height,
            start_x: 0,
            start_y: 0,
            cells,
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&GridCell> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(&self.cells[(y * self.width + x) as usize])
    }

    pub(crate) fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut GridCell> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(&mut self.cells[(y * self.width + x) as usize])
    }

    /// Iterate cells in row-major order (the order the painter consumes them).
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visited).count()
    }

    /// Map pixel bounds, for camera clamping and layer sizing.
    pub fn pixel_bounds(&self) -> (i32, i32) {
        (self.width * self.grid_width, self.height * self.grid_height)
    }
}
