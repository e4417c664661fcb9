//! Maze generation requests and the entry points that validate, generate and render them.

use error_chain::bail;
use log::info;
use std::fmt;
use std::str::FromStr;

use crate::boundary;
use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::generators::{self, Recursion};
use crate::grid::Grid;
use crate::paint::{Coord3D, Material, RegionPaintOp, RegionPainter};
use crate::pathing;
use crate::random::{maze_rng, RandomChoice};
use crate::renderers::{self, VoxelRenderer};
use crate::units::{Height, Length, Width};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Algorithm {
    BinaryTree,
    RecursiveBacktracking,
    RecursiveDivision,
}

pub const ALL_ALGORITHMS: [Algorithm; 3] = [
    Algorithm::BinaryTree,
    Algorithm::RecursiveBacktracking,
    Algorithm::RecursiveDivision,
];

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BinaryTree => "binary-tree",
            Algorithm::RecursiveBacktracking => "recursive-backtracking",
            Algorithm::RecursiveDivision => "recursive-division",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Algorithm> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        ALL_ALGORITHMS.iter()
            .cloned()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| ErrorKind::UnknownAlgorithm(s.to_owned()).into())
    }
}

impl FromStr for Recursion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Recursion> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Recursion::Auto),
            "direct" => Ok(Recursion::Direct),
            "stack" => Ok(Recursion::ExplicitStack),
            _ => bail!(ErrorKind::UnknownRecursion(s.to_owned())),
        }
    }
}

/// The largest grid, in cells, a maze can be generated on.
pub const MAX_GRID_CELLS: usize = 100_000_000;

/// Everything needed to generate one maze.
///
/// `width` runs along world x, `length` along world z and `height` is how many blocks
/// tall the walls are.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct MazeSpec {
    pub width: Width,
    pub height: Height,
    pub length: Length,
    pub material: Material,
    pub algorithm: Algorithm,
    pub recursion: Recursion,
    pub seed: Option<u64>,
}

impl MazeSpec {
    pub fn builder(width: Width, height: Height, length: Length) -> MazeSpecBuilder {
        MazeSpecBuilder::new(width, height, length)
    }

    /// Check the dimensions can be carved.
    ///
    /// The carvers work on a lattice of junctions at odd coordinates surrounded by a one
    /// cell border, so width and length must be odd and at least 3. The grid may hold at
    /// most `MAX_GRID_CELLS` cells.
    pub fn validate(&self) -> Result<()> {
        let check_odd = |axis: &str, value: usize| -> Result<()> {
            if value % 2 == 0 {
                bail!(ErrorKind::InvalidDimensions(format!("{} must be an odd number, got {}", axis, value)));
            }
            if value < 3 {
                bail!(ErrorKind::InvalidDimensions(format!("{} must be at least 3, got {}", axis, value)));
            }
            Ok(())
        };
        check_odd("width", self.width.0)?;
        check_odd("length", self.length.0)?;
        if self.height.0 == 0 {
            bail!(ErrorKind::InvalidDimensions("height must be at least 1, got 0".to_owned()));
        }
        match self.width.0.checked_mul(self.length.0) {
            Some(cells) if cells <= MAX_GRID_CELLS => Ok(()),
            _ => bail!(ErrorKind::InvalidDimensions(format!("width x length must be at most {} cells, got {} x {}",
                                                            MAX_GRID_CELLS,
                                                            self.width.0,
                                                            self.length.0))),
        }
    }
}

pub struct MazeSpecBuilder {
    spec: MazeSpec,
}

impl MazeSpecBuilder {
    /// Stone walls, recursive backtracking, automatic recursion and a random seed
    /// unless told otherwise.
    pub fn new(width: Width, height: Height, length: Length) -> MazeSpecBuilder {
        MazeSpecBuilder {
            spec: MazeSpec {
                width,
                height,
                length,
                material: Material::block("stone"),
                algorithm: Algorithm::RecursiveBacktracking,
                recursion: Recursion::Auto,
                seed: None,
            },
        }
    }

    pub fn material(mut self, material: Material) -> MazeSpecBuilder {
        self.spec.material = material;
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> MazeSpecBuilder {
        self.spec.algorithm = algorithm;
        self
    }

    pub fn recursion(mut self, recursion: Recursion) -> MazeSpecBuilder {
        self.spec.recursion = recursion;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> MazeSpecBuilder {
        self.spec.seed = seed;
        self
    }

    pub fn build(self) -> MazeSpec {
        self.spec
    }
}

/// Supplies the world position a maze is placed relative to, usually where a player stands.
pub trait PositionSource {
    fn query_origin(&mut self) -> Result<Coord3D>;
}

/// A position that never moves.
#[derive(Copy, Clone, Debug, Default)]
pub struct FixedPosition(pub Coord3D);

impl PositionSource for FixedPosition {
    fn query_origin(&mut self) -> Result<Coord3D> {
        Ok(self.0)
    }
}

/// Where the maze's top left corner goes for a queried position: one block west and two
/// blocks south, which puts the entrance directly in front of that position.
pub fn placement_origin(position: Coord3D) -> Coord3D {
    position + Coord3D::new(-1, 0, 2)
}

/// A generated maze: the final grid and the paint operations that build it, in order.
#[derive(Debug, Clone)]
pub struct Maze {
    algorithm: Algorithm,
    grid: Grid,
    ops: Vec<RegionPaintOp>,
}

impl Maze {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ops(&self) -> &[RegionPaintOp] {
        &self.ops
    }

    /// Send every paint operation to `renderer`, in order.
    pub fn render_to<V: VoxelRenderer + ?Sized>(&self, renderer: &mut V) -> Result<()> {
        renderers::flush(&self.ops, renderer)
    }

    /// The walk from the entrance to the exit.
    pub fn solution_path(&self) -> Option<Vec<GridCoordinate>> {
        pathing::solution_path(&self.grid)
    }

    pub fn summary(&self) -> MazeSummary {
        MazeSummary {
            algorithm: self.algorithm,
            passages: self.grid.passage_count(),
            walls: self.grid.size() - self.grid.passage_count(),
            ops: self.ops.len(),
            solution_length: self.solution_path().map(|path| path.len()),
        }
    }
}

/// Counts describing a generated maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct MazeSummary {
    pub algorithm: Algorithm,
    pub passages: usize,
    pub walls: usize,
    pub ops: usize,
    /// Cells on the entrance to exit walk, both ends included.
    pub solution_length: Option<usize>,
}

impl fmt::Display for MazeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{}: {} passage cells, {} wall cells, {} paint operations",
               self.algorithm,
               self.passages,
               self.walls,
               self.ops)?;
        match self.solution_length {
            Some(n) => write!(f, ", solution {} cells long", n),
            None => write!(f, ", no solution"),
        }
    }
}

/// Generate a maze with its top left corner at `origin`, drawing choices from `rng`.
///
/// Fails only if the dimensions are invalid, in which case no operation is produced.
pub fn generate<R: RandomChoice>(spec: &MazeSpec, origin: Coord3D, rng: &mut R) -> Result<Maze> {
    spec.validate()?;
    info!("generating a {}x{}x{} {} maze at {}",
          spec.width.0,
          spec.height.0,
          spec.length.0,
          spec.algorithm,
          origin);

    let mut painter = RegionPainter::new(origin, spec.height, spec.material.clone());
    let grid = match spec.algorithm {
        Algorithm::BinaryTree => {
            let mut grid = boundary::enclosed(spec.width, spec.length, &mut painter);
            generators::binary_tree(&mut grid, &mut painter, rng);
            grid
        }
        Algorithm::RecursiveBacktracking => {
            let mut grid = boundary::enclosed(spec.width, spec.length, &mut painter);
            generators::recursive_backtracker(&mut grid, &mut painter, rng, spec.recursion);
            grid
        }
        Algorithm::RecursiveDivision => {
            let mut grid = boundary::open(spec.width, spec.length, &mut painter);
            generators::recursive_division(&mut grid, &mut painter, rng, spec.recursion);
            grid
        }
    };

    debug_assert!(grid.is_passage(grid.entrance()) && grid.is_passage(grid.exit()));
    Ok(Maze {
        algorithm: spec.algorithm,
        grid,
        ops: painter.into_ops(),
    })
}

/// Validate `spec`, place the maze in front of the queried position and paint it.
///
/// The random source is seeded from `spec.seed` when there is one.
pub fn build_and_render<P, V>(spec: &MazeSpec, position: &mut P, renderer: &mut V) -> Result<Maze>
    where P: PositionSource + ?Sized,
          V: VoxelRenderer + ?Sized
{
    spec.validate()?;
    let origin = placement_origin(position.query_origin()?);

    let mut rng = maze_rng(spec.seed);
    let maze = generate(spec, origin, &mut rng)?;
    maze.render_to(renderer)?;

    info!("Maze generation done!");
    Ok(maze)
}
