use crate::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for one dungeon generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// Grid width in cells
    pub width: i32,
    /// Grid height in cells
    pub height: i32,
    /// Pixel width of one cell (multiple of 16)
    pub grid_width: i32,
    /// Pixel height of one cell (multiple of 16)
    pub grid_height: i32,
    /// Fraction of total cells the generator may visit, in (0, 1]
    pub fill: f64,
    /// Traversal depth cap, measured in edges from the start cell
    pub max_depth: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 6,
            grid_width: 192,
            grid_height: 128,
            fill: 0.5,
            max_depth: 8,
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: i32, height: i32 },
    #[error("cell pixel size {0} is not a positive multiple of {TILE_SIZE}")]
    UnalignedCellSize(i32),
    #[error("cell width {0} cannot hold a {DOOR_GAP_WIDTH} px door gap and its jambs")]
    CellTooNarrow(i32),
    #[error("cell height {0} cannot hold a {DOOR_GAP_HEIGHT} px door gap and its jambs")]
    CellTooShort(i32),
    #[error("fill ratio {0} is outside (0, 1]")]
    FillOutOfRange(f64),
}

impl DungeonConfig {
    /// Check the preconditions the generator and painter rely on.
    ///
    /// `generate` and `stage_for_dungeon` do not call this themselves: the
    /// algorithms tolerate degenerate inputs (producing a sparse or
    /// geometrically useless map rather than panicking), so callers that
    /// want fail-fast behavior validate at the boundary.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 1 || self.height < 1 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        for size in [self.grid_width, self.grid_height] {
            if size <= 0 || size % TILE_SIZE != 0 {
                return Err(ConfigError::UnalignedCellSize(size));
            }
        }
        // A door needs its gap plus a jamb of at least one tile on each side.
        if self.grid_width < DOOR_GAP_WIDTH + 2 * TILE_SIZE {
            return Err(ConfigError::CellTooNarrow(self.grid_width));
        }
        if self.grid_height < DOOR_GAP_HEIGHT + 2 * TILE_SIZE {
            return Err(ConfigError::CellTooShort(self.grid_height));
        }
        if !(self.fill > 0.0 && self.fill <= 1.0) {
            return Err(ConfigError::FillOutOfRange(self.fill));
        }
        Ok(())
    }
}
