//! Turning runs of grid cells into box fill operations in world space.

use std::fmt;
use std::ops::Add;

use crate::cells::{CellState, GridCoordinate};
use crate::units::Height;

/// A block position in the voxel world. `y` is up.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct Coord3D {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Coord3D {
    pub fn new(x: i64, y: i64, z: i64) -> Coord3D {
        Coord3D { x, y, z }
    }
}

impl Add for Coord3D {
    type Output = Coord3D;

    fn add(self, other: Coord3D) -> Coord3D {
        Coord3D::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl fmt::Display for Coord3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// What a paint operation fills its box with.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum Material {
    /// A solid block, named the way the renderer names blocks.
    Block(String),
    /// Empty, walkable space.
    Open,
}

impl Material {
    pub fn block<S: Into<String>>(name: S) -> Material {
        Material::Block(name.into())
    }

    pub fn is_open(&self) -> bool {
        *self == Material::Open
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Material::Block(ref name) => write!(f, "{}", name),
            Material::Open => write!(f, "air"),
        }
    }
}

/// Fill the axis aligned box between two opposite corners, inclusive, with a material.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct RegionPaintOp {
    pub from: Coord3D,
    pub to: Coord3D,
    pub material: Material,
}

impl RegionPaintOp {
    /// The number of blocks the box covers.
    pub fn volume(&self) -> u64 {
        let span = |a: i64, b: i64| (a - b).abs() as u64 + 1;
        span(self.from.x, self.to.x) * span(self.from.y, self.to.y) * span(self.from.z, self.to.z)
    }
}

/// Records, in order, the paint operations that bring the world in line with the grid.
///
/// A grid cell `(row, col)` is the column of blocks at `x = origin.x + col`,
/// `z = origin.z + row`, from `origin.y` up through `origin.y + height - 1`.
#[derive(Debug, Clone)]
pub struct RegionPainter {
    origin: Coord3D,
    height: Height,
    wall: Material,
    ops: Vec<RegionPaintOp>,
}

impl RegionPainter {
    pub fn new(origin: Coord3D, height: Height, wall: Material) -> RegionPainter {
        RegionPainter {
            origin,
            height,
            wall,
            ops: Vec::new(),
        }
    }

    /// The material that paints cells of the given state.
    pub fn material_for(&self, state: CellState) -> Material {
        match state {
            CellState::Wall => self.wall.clone(),
            CellState::Passage => Material::Open,
        }
    }

    /// Paint the rectangle of cells spanned by `a` and `b`, inclusive, as one box.
    pub fn paint_run(&mut self, a: GridCoordinate, b: GridCoordinate, state: CellState) {
        let (top_left, bottom_right) = GridCoordinate::bounding(a, b);
        let material = self.material_for(state);
        let op = RegionPaintOp {
            from: self.world_floor(top_left),
            to: self.world_ceiling(bottom_right),
            material,
        };
        self.ops.push(op);
    }

    #[inline]
    pub fn paint_cell(&mut self, coord: GridCoordinate, state: CellState) {
        self.paint_run(coord, coord, state);
    }

    pub fn ops(&self) -> &[RegionPaintOp] {
        &self.ops
    }

    pub fn ops_count(&self) -> usize {
        self.ops.len()
    }

    pub fn into_ops(self) -> Vec<RegionPaintOp> {
        self.ops
    }

    fn world_floor(&self, coord: GridCoordinate) -> Coord3D {
        self.origin + Coord3D::new(coord.col as i64, 0, coord.row as i64)
    }

    fn world_ceiling(&self, coord: GridCoordinate) -> Coord3D {
        let top = self.height.0.saturating_sub(1) as i64;
        self.origin + Coord3D::new(coord.col as i64, top, coord.row as i64)
    }
}
