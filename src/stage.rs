use crate::constants::*;
use crate::layout::{DungeonLayout, GridCell};
use crate::tile::{tile_ids, TileLayer};
use rand::Rng;

/// An axis-aligned impassable rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidBlock {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl SolidBlock {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

/// The painted dungeon: visual tile layers, collision geometry, and the
/// spawn position, everything downstream consumers need to host a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    /// Map pixel width (for camera clamping)
    pub width: i32,
    /// Map pixel height
    pub height: i32,
    pub floor: TileLayer,
    pub walls: TileLayer,
    /// Player spawn position in pixels, centered in the start cell
    pub start: (i32, i32),
    /// Impassable geometry: outer walls and door jambs, in row-major cell
    /// order, per cell up/down/left/right
    pub blocks: Vec<SolidBlock>,
}

/// Paint a generated layout into tile layers and solid collision blocks.
///
/// Consumes the layout; generation output is never painted twice. Unvisited
/// cells stay empty on both layers and contribute no geometry.
pub fn stage_for_dungeon(layout: DungeonLayout, rng: &mut impl Rng) -> Stage {
    let tiles_x = layout.grid_width / TILE_SIZE;
    let tiles_y = layout.grid_height / TILE_SIZE;
    let (px_width, px_height) = layout.pixel_bounds();

    let mut floor = TileLayer::new(layout.width * tiles_x, layout.height * tiles_y);
    let mut walls = TileLayer::new(layout.width * tiles_x, layout.height * tiles_y);
    let mut blocks = Vec::new();

    for cell in layout.cells() {
        if !cell.visited {
            continue;
        }
        paint_floor(cell, &layout, &mut floor, rng);
        paint_wall_frame(cell, &layout, &mut walls);
        paint_solid_sides(cell, &layout, &mut blocks);
    }

    let start = (
        layout.start_x * layout.grid_width + layout.grid_width / 2 - SPAWN_HALF_SIZE,
        layout.start_y * layout.grid_height + layout.grid_height / 2 - SPAWN_HALF_SIZE,
    );
    log::debug!(
        "painted {}x{} px stage: {} solid blocks, start at {:?}",
        px_width,
        px_height,
        blocks.len(),
        start
    );

    Stage {
        width: px_width,
        height: px_height,
        floor,
        walls,
        start,
        blocks,
    }
}

/// Fill the cell's tile block with floor sprites, row-major.
///
/// An ornament roll stamps a 2x2 footprint over the tile and its up/left
/// neighbors, overwriting whatever an earlier iteration wrote there; later
/// plain tiles never touch those neighbors, so ornaments survive intact.
fn paint_floor(cell: &GridCell, layout: &DungeonLayout, floor: &mut TileLayer, rng: &mut impl Rng) {
    let tiles_x = layout.grid_width / TILE_SIZE;
    let tiles_y = layout.grid_height / TILE_SIZE;

    for j in 0..tiles_y {
        for i in 0..tiles_x {
            let tx = cell.x * tiles_x + i;
            let ty = cell.y * tiles_y + j;
            let r: f64 = rng.gen();

            if r < FLOOR_ORNAMENT_CHANCE && j > 0 && i > 0 {
                floor.set(tx, ty, tile_ids::ORNAMENT_BOTTOM_RIGHT);
                floor.set(tx - 1, ty, tile_ids::ORNAMENT_BOTTOM_LEFT);
                floor.set(tx, ty - 1, tile_ids::ORNAMENT_TOP_RIGHT);
                floor.set(tx - 1, ty - 1, tile_ids::ORNAMENT_TOP_LEFT);
            } else if r < FLOOR_VARIANT_CHANCE {
                floor.set(tx, ty, tile_ids::FLOOR_VARIANT);
            } else {
                floor.set(tx, ty, tile_ids::FLOOR);
            }
        }
    }
}

/// Stamp the cell's wall frame: four corners, then the edge runs with a
/// two-tile gap at the row/column midpoint wherever a doorway exists.
fn paint_wall_frame(cell: &GridCell, layout: &DungeonLayout, walls: &mut TileLayer) {
    let tiles_x = layout.grid_width / TILE_SIZE;
    let tiles_y = layout.grid_height / TILE_SIZE;
    let left = cell.x * tiles_x;
    let right = (cell.x + 1) * tiles_x - 1;
    let top = cell.y * tiles_y;
    let bottom = (cell.y + 1) * tiles_y - 1;

    walls.set(left, top, tile_ids::WALL_CORNER_TOP_LEFT);
    walls.set(right, top, tile_ids::WALL_CORNER_TOP_RIGHT);
    walls.set(left, bottom, tile_ids::WALL_CORNER_BOTTOM_LEFT);
    walls.set(right, bottom, tile_ids::WALL_CORNER_BOTTOM_RIGHT);

    let mid = tiles_x / 2 - 1;
    for i in 1..tiles_x - 1 {
        if !cell.up || (i != mid && i != mid + 1) {
            walls.set(left + i, top, tile_ids::WALL_EDGE_TOP);
        }
        if !cell.down || (i != mid && i != mid + 1) {
            walls.set(left + i, bottom, tile_ids::WALL_EDGE_BOTTOM);
        }
    }

    let mid = tiles_y / 2 - 1;
    for i in 1..tiles_y - 1 {
        if !cell.left || (i != mid && i != mid + 1) {
            walls.set(left, top + i, tile_ids::WALL_EDGE_LEFT);
        }
        if !cell.right || (i != mid && i != mid + 1) {
            walls.set(right, top + i, tile_ids::WALL_EDGE_RIGHT);
        }
    }
}

/// Emit the cell's collision geometry, one side at a time: a full-length
/// block where the side is sealed, two flanking jambs around a centered gap
/// where a doorway exists.
fn paint_solid_sides(cell: &GridCell, layout: &DungeonLayout, blocks: &mut Vec<SolidBlock>) {
    let gw = layout.grid_width;
    let gh = layout.grid_height;
    let ox = cell.x * gw;
    let oy = cell.y * gh;

    if cell.up {
        horizontal_door(blocks, ox, oy, gw);
    } else {
        horizontal_wall(blocks, ox, oy, gw);
    }

    if cell.down {
        horizontal_door(blocks, ox, oy + gh - TILE_SIZE, gw);
    } else {
        horizontal_wall(blocks, ox, oy + gh - TILE_SIZE, gw);
    }

    if cell.left {
        vertical_door(blocks, ox, oy, gh);
    } else {
        vertical_wall(blocks, ox, oy, gh);
    }

    if cell.right {
        vertical_door(blocks, ox + gw - TILE_SIZE, oy, gh);
    } else {
        vertical_wall(blocks, ox + gw - TILE_SIZE, oy, gh);
    }
}

fn horizontal_wall(blocks: &mut Vec<SolidBlock>, x: i32, y: i32, grid_width: i32) {
    blocks.push(SolidBlock::new(x, y, grid_width, TILE_SIZE));
}

fn horizontal_door(blocks: &mut Vec<SolidBlock>, x: i32, y: i32, grid_width: i32) {
    let width = (grid_width - DOOR_GAP_WIDTH) / 2;
    blocks.push(SolidBlock::new(x, y, width, TILE_SIZE));
    blocks.push(SolidBlock::new(x + width + DOOR_GAP_WIDTH, y, width, TILE_SIZE));
}

/// Vertical walls are inset one tile from the cell's top and bottom so they
/// never overlap the horizontal walls' thickness at the corners.
fn vertical_wall(blocks: &mut Vec<SolidBlock>, x: i32, y: i32, grid_height: i32) {
    blocks.push(SolidBlock::new(x, y + TILE_SIZE, TILE_SIZE, grid_height - 2 * TILE_SIZE));
}

fn vertical_door(blocks: &mut Vec<SolidBlock>, x: i32, y: i32, grid_height: i32) {
    let height = (grid_height - DOOR_GAP_HEIGHT) / 2;
    blocks.push(SolidBlock::new(x, y + TILE_SIZE, TILE_SIZE, height));
    blocks.push(SolidBlock::new(
        x,
        y + grid_height - TILE_SIZE - height,
        TILE_SIZE,
        height,
    ));
}
