//! Procedural room-grid dungeon generation.
//!
//! The crate builds a connected dungeon in two strictly ordered passes:
//!
//! 1. [`generate`] grows a grid of rooms from a random start cell with a
//!    depth- and fill-bounded randomized depth-first traversal, producing a
//!    [`DungeonLayout`] of visited cells and mirrored doorway flags.
//! 2. [`stage_for_dungeon`] paints that layout into a [`Stage`]: floor and
//!    wall tile layers for rendering, solid collision blocks for physics,
//!    and the player spawn position.
//!
//! All randomness flows through an explicit [`rand::Rng`] handle, so seeded
//! runs reproduce the same map byte for byte.
//!
//! ```
//! use grid_dungeon::{generate, stage_for_dungeon, DungeonConfig};
//!
//! let config = DungeonConfig::default();
//! config.validate().expect("default config is valid");
//!
//! let mut rng = rand::thread_rng();
//! let layout = generate(&config, &mut rng);
//! let stage = stage_for_dungeon(layout, &mut rng);
//!
//! assert_eq!((stage.width, stage.height), (1536, 768));
//! assert!(!stage.blocks.is_empty());
//! ```

pub mod config;
pub mod constants;
pub mod dungeon_gen;
pub mod layout;
pub mod stage;
pub mod tile;

pub use config::{ConfigError, DungeonConfig};
pub use dungeon_gen::generate;
pub use layout::{Direction, DungeonLayout, GridCell};
pub use stage::{stage_for_dungeon, SolidBlock, Stage};
pub use tile::{tile_ids, TileLayer};
