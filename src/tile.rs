/// Helper to convert row/column position to a tile ID.
/// Row and column are 0-indexed.
const fn rc(row: u32, col: u32, columns: u32) -> u32 {
    row * columns + col
}

/// Tile IDs for the dungeon tileset (20-column sheet).
///
/// ID 0 is reserved for "no tile" on the wall layer, so the sheet's first
/// usable sprite sits at index 1.
pub mod tile_ids {
    use super::rc;

    pub const TILESET_COLS: u32 = 20;

    /// Empty/no tile
    pub const EMPTY: u32 = 0;

    // Floor
    pub const FLOOR: u32 = rc(0, 1, TILESET_COLS); // plain floor
    pub const FLOOR_VARIANT: u32 = rc(1, 1, TILESET_COLS); // cracked floor
    // 2x2 ornament footprint
    pub const ORNAMENT_TOP_LEFT: u32 = rc(0, 2, TILESET_COLS);
    pub const ORNAMENT_TOP_RIGHT: u32 = rc(0, 3, TILESET_COLS);
    pub const ORNAMENT_BOTTOM_LEFT: u32 = rc(1, 2, TILESET_COLS);
    pub const ORNAMENT_BOTTOM_RIGHT: u32 = rc(1, 3, TILESET_COLS);

    // Wall frame
    pub const WALL_EDGE_TOP: u32 = rc(2, 1, TILESET_COLS);
    pub const WALL_EDGE_RIGHT: u32 = rc(2, 2, TILESET_COLS);
    pub const WALL_EDGE_BOTTOM: u32 = rc(3, 1, TILESET_COLS);
    pub const WALL_EDGE_LEFT: u32 = rc(3, 2, TILESET_COLS);
    pub const WALL_CORNER_TOP_LEFT: u32 = rc(2, 3, TILESET_COLS);
    pub const WALL_CORNER_TOP_RIGHT: u32 = rc(2, 4, TILESET_COLS);
    pub const WALL_CORNER_BOTTOM_LEFT: u32 = rc(3, 3, TILESET_COLS);
    pub const WALL_CORNER_BOTTOM_RIGHT: u32 = rc(3, 4, TILESET_COLS);
}

/// A rectangular grid of tile indices, in tile units. Row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    pub width: i32,
    pub height: i32,
    data: Vec<u32>,
}

impl TileLayer {
    /// Allocate a zero-filled (all-empty) layer.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            data: vec![tile_ids::EMPTY; (width * height).max(0) as usize],
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    pub(crate) fn set(&mut self, x: i32, y: i32, id: u32) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.data[(y * self.width + x) as usize] = id;
    }

    /// Iterate all indices in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.data.iter().copied()
    }
}
