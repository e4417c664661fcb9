//! **voxel_mazes** generates mazes on a grid of wall and passage cells and turns them into
//! ordered box fill operations for a voxel world.

pub mod boundary;
pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod maze;
pub mod paint;
pub mod pathing;
pub mod random;
pub mod renderers;
pub mod units;
