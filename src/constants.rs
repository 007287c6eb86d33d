//! Generation and painting constants.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

/// Pixel size of one tile; cell pixel sizes must be multiples of this
pub const TILE_SIZE: i32 = 16;
/// Chance of opening a doorway into an already-visited neighbor (loop edge)
pub const LOOP_DOOR_CHANCE: f64 = 0.2;
/// Chance a floor tile anchors a 2x2 ornament stamp
pub const FLOOR_ORNAMENT_CHANCE: f64 = 0.1;
/// Chance a floor tile uses the variant sprite (ornament roll wins ties)
pub const FLOOR_VARIANT_CHANCE: f64 = 0.2;
/// Pixel width of the walkable gap in a top/bottom door
pub const DOOR_GAP_WIDTH: i32 = 32;
/// Vertical extent a left/right door leaves uncovered, counting the 16 px
/// corner insets above and below the jambs
pub const DOOR_GAP_HEIGHT: i32 = 64;
/// Half the pixel size of the entity spawned at the start position
pub const SPAWN_HALF_SIZE: i32 = 8;
