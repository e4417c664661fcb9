use fnv::FnvHashSet;

use crate::cells::{CellState, GridCoordinate};

pub trait GridDisplay {
    /// Render the contents of a grid cell as a single text glyph.
    fn render_cell_body(&self, _: GridCoordinate, state: CellState) -> char {
        state.glyph()
    }
}

/// Marks the cells of a path through the maze with `.`.
#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}

impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> Self {
        PathDisplay { on_path_coordinates: path.iter().cloned().collect() }
    }
}

impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: GridCoordinate, state: CellState) -> char {
        if state.is_passage() && self.on_path_coordinates.contains(&coord) {
            '.'
        } else {
            state.glyph()
        }
    }
}

/// Marks a start cell with `S` and an end cell with `E`.
#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start: GridCoordinate,
    end: GridCoordinate,
}

impl StartEndPointsDisplay {
    pub fn new(start: GridCoordinate, end: GridCoordinate) -> StartEndPointsDisplay {
        StartEndPointsDisplay { start, end }
    }
}

impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: GridCoordinate, state: CellState) -> char {
        if coord == self.start {
            'S'
        } else if coord == self.end {
            'E'
        } else {
            state.glyph()
        }
    }
}
