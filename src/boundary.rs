//! The starting state of a maze: its outer walls plus the entrance and the exit.

use crate::cells::{CellState, GridCoordinate};
use crate::grid::Grid;
use crate::paint::RegionPainter;
use crate::units::{Length, Width};

/// A solid block of wall with only the entrance and exit opened, ready for passages
/// to be carved into it.
///
/// One op fills the whole volume, then one op each opens the entrance and the exit.
pub fn enclosed(width: Width, length: Length, painter: &mut RegionPainter) -> Grid {
    let mut grid = Grid::new(width, length, CellState::Wall);
    let far_corner = GridCoordinate::new(length.0 - 1, width.0 - 1);
    painter.paint_run(GridCoordinate::new(0, 0), far_corner, CellState::Wall);

    open_entrance_and_exit(&mut grid, painter);
    grid
}

/// An empty floor surrounded by a one cell thick wall, ready to be divided up.
///
/// The north, south, west and east edges are painted in that order, then the entrance
/// and the exit are opened again.
pub fn open(width: Width, length: Length, painter: &mut RegionPainter) -> Grid {
    let mut grid = Grid::new(width, length, CellState::Passage);
    let (last_row, last_col) = (length.0 - 1, width.0 - 1);

    let edges = [
        (GridCoordinate::new(0, 0), GridCoordinate::new(0, last_col)),
        (GridCoordinate::new(last_row, 0), GridCoordinate::new(last_row, last_col)),
        (GridCoordinate::new(0, 0), GridCoordinate::new(last_row, 0)),
        (GridCoordinate::new(0, last_col), GridCoordinate::new(last_row, last_col)),
    ];
    for &(a, b) in edges.iter() {
        grid.set_run(a, b, CellState::Wall);
        painter.paint_run(a, b, CellState::Wall);
    }

    open_entrance_and_exit(&mut grid, painter);
    grid
}

fn open_entrance_and_exit(grid: &mut Grid, painter: &mut RegionPainter) {
    for &gate in [grid.entrance(), grid.exit()].iter() {
        grid.set(gate, CellState::Passage);
        painter.paint_cell(gate, CellState::Passage);
    }
}
