use crate::units::Step;
use std::fmt;

/// The two states a maze grid cell can be in.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellState {
    Wall,
    Passage,
}

impl CellState {
    #[inline]
    pub fn is_passage(self) -> bool {
        self == CellState::Passage
    }

    /// Text glyph used when printing a grid.
    pub fn glyph(self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Passage => ' ',
        }
    }
}

/// A cell position in the maze grid.
///
/// `row` runs along the maze length (the world z axis), `col` along the maze width (the
/// world x axis). Ordering is row-major so sorting coordinates gives the grid visit order.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate { row, col }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, row_width: usize) -> GridCoordinate {
        GridCoordinate::new(index / row_width, index % row_width)
    }

    /// A junction sits on an odd row and an odd column.
    #[inline]
    pub fn is_junction(&self) -> bool {
        self.row % 2 == 1 && self.col % 2 == 1
    }

    /// The coordinate `step` cells away in `dir`.
    /// Returns None if that would go below zero on either axis.
    pub fn offset(&self, dir: CompassPrimary, step: Step) -> Option<GridCoordinate> {
        let Step(n) = step;
        let (row, col) = (self.row, self.col);
        match dir {
            CompassPrimary::North => row.checked_sub(n).map(|r| GridCoordinate::new(r, col)),
            CompassPrimary::South => Some(GridCoordinate::new(row + n, col)),
            CompassPrimary::East => Some(GridCoordinate::new(row, col + n)),
            CompassPrimary::West => col.checked_sub(n).map(|c| GridCoordinate::new(row, c)),
        }
    }

    /// The top left and bottom right corners of the rectangle spanned by two coordinates.
    pub fn bounding(a: GridCoordinate, b: GridCoordinate) -> (GridCoordinate, GridCoordinate) {
        (
            GridCoordinate::new(a.row.min(b.row), a.col.min(b.col)),
            GridCoordinate::new(a.row.max(b.row), a.col.max(b.col)),
        )
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// North is towards row 0, west is towards column 0.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

pub const ALL_DIRECTIONS: [CompassPrimary; 4] = [
    CompassPrimary::North,
    CompassPrimary::South,
    CompassPrimary::West,
    CompassPrimary::East,
];

/// Which way a carved run or a dividing wall extends.
///
/// Horizontal runs along a row (increasing column), vertical runs along a column
/// (increasing row).
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Orientation {
    Horizontal,
    Vertical,
}
