use bit_set::BitSet;
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt;

use crate::cells::{CellState, CompassPrimary, GridCoordinate, ALL_DIRECTIONS};
use crate::grid_displays::GridDisplay;
use crate::units::{Length, Step, Width};

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

/// A `length` x `width` matrix of wall and passage cells, stored row-major.
///
/// A set bit marks a passage cell, so an all-wall grid is an empty bit set.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    passages: BitSet,
    width: Width,
    length: Length,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid :: width: {:?}, length: {:?}, passages: {:?}",
               self.width, self.length, self.passages)
    }
}

impl Grid {
    /// A grid with every cell in the `fill` state.
    pub fn new(width: Width, length: Length, fill: CellState) -> Grid {
        let cells_count = width.0 * length.0;
        let mut passages = BitSet::with_capacity(cells_count);
        if fill.is_passage() {
            for index in 0..cells_count {
                passages.insert(index);
            }
        }
        Grid { passages, width, length }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width.0
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length.0
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.width.0 * self.length.0
    }

    /// The fixed entrance cell, on the north edge.
    #[inline]
    pub fn entrance(&self) -> GridCoordinate {
        GridCoordinate::new(0, 1)
    }

    /// The fixed exit cell, on the south edge.
    #[inline]
    pub fn exit(&self) -> GridCoordinate {
        GridCoordinate::new(self.length() - 1, self.width() - 2)
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.length() && coord.col < self.width()
    }

    /// Inside the outer border, keeping at least one cell of margin on every side.
    #[inline]
    pub fn is_interior(&self, coord: GridCoordinate) -> bool {
        coord.row > 0 && coord.col > 0 && coord.row + 1 < self.length() &&
        coord.col + 1 < self.width()
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.width() + coord.col)
        } else {
            None
        }
    }

    /// The state of a cell, or None if the coordinate is outside the grid.
    pub fn cell(&self, coord: GridCoordinate) -> Option<CellState> {
        self.grid_coordinate_to_index(coord).map(|index| {
            if self.passages.contains(index) {
                CellState::Passage
            } else {
                CellState::Wall
            }
        })
    }

    #[inline]
    pub fn is_passage(&self, coord: GridCoordinate) -> bool {
        self.cell(coord) == Some(CellState::Passage)
    }

    #[inline]
    pub fn is_wall(&self, coord: GridCoordinate) -> bool {
        self.cell(coord) == Some(CellState::Wall)
    }

    /// Set a single cell.
    ///
    /// Panics if the cell does not exist.
    pub fn set(&mut self, coord: GridCoordinate, state: CellState) {
        let index = self.grid_coordinate_to_index(coord)
            .unwrap_or_else(|| panic!("cell {} is outside the {}x{} grid",
                                      coord, self.length(), self.width()));
        match state {
            CellState::Passage => {
                let _ = self.passages.insert(index);
            }
            CellState::Wall => {
                let _ = self.passages.remove(index);
            }
        }
    }

    /// Set every cell in the rectangle spanned by `a` and `b`, inclusive, in any corner order.
    ///
    /// Panics if either corner does not exist.
    pub fn set_run(&mut self, a: GridCoordinate, b: GridCoordinate, state: CellState) {
        let (top_left, bottom_right) = GridCoordinate::bounding(a, b);
        for row in top_left.row..=bottom_right.row {
            for col in top_left.col..=bottom_right.col {
                self.set(GridCoordinate::new(row, col), state);
            }
        }
    }

    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    /// The cell `step` cells away in `direction`, if it is on the grid.
    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary,
                                  step: Step)
                                  -> Option<GridCoordinate> {
        coord.offset(direction, step).filter(|neighbour| self.is_valid_coordinate(*neighbour))
    }

    /// Adjacent passage cells, the moves available from `coord` when walking the maze.
    pub fn passage_neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        ALL_DIRECTIONS.iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir, Step(1)))
            .filter(|neighbour| self.is_passage(*neighbour))
            .collect()
    }

    /// Every cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = GridCoordinate> {
        let width = self.width();
        (0..self.size()).map(move |index| GridCoordinate::from_row_major_index(index, width))
    }

    /// The odd row, odd column cells strictly inside the border, row by row.
    pub fn iter_junctions(&self) -> impl Iterator<Item = GridCoordinate> {
        let (width, length) = (self.width(), self.length());
        (1..length.saturating_sub(1))
            .step_by(2)
            .flat_map(move |row| {
                (1..width.saturating_sub(1)).step_by(2).map(move |col| GridCoordinate::new(row, col))
            })
    }

    pub fn junctions_count(&self) -> usize {
        (self.length() / 2) * (self.width() / 2)
    }

    /// Render the grid as text with a custom glyph per cell.
    pub fn render_with<'a>(&'a self, display: &'a dyn GridDisplay) -> DisplayedGrid<'a> {
        DisplayedGrid { grid: self, display }
    }
}

/// `#` for walls and a space for passages, one text line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = (0..self.length())
            .map(|row| {
                (0..self.width())
                    .map(|col| {
                        self.cell(GridCoordinate::new(row, col))
                            .map_or(' ', CellState::glyph)
                    })
                    .collect::<String>()
            })
            .join("\n");
        writeln!(f, "{}", output)
    }
}

#[derive(Clone, Copy)]
pub struct DisplayedGrid<'a> {
    grid: &'a Grid,
    display: &'a dyn GridDisplay,
}

impl<'a> fmt::Debug for DisplayedGrid<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisplayedGrid :: grid: {:?}", self.grid)
    }
}

impl<'a> fmt::Display for DisplayedGrid<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.length() {
            let line = (0..self.grid.width())
                .map(|col| {
                    let coord = GridCoordinate::new(row, col);
                    let state = self.grid.cell(coord).unwrap_or(CellState::Wall);
                    self.display.render_cell_body(coord, state)
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::JUNCTION_STEP;
    use itertools::Itertools;

    fn wall_grid(w: usize, l: usize) -> Grid {
        Grid::new(Width(w), Length(l), CellState::Wall)
    }

    #[test]
    fn new_grid_fill() {
        let walls = wall_grid(5, 7);
        assert_eq!(walls.size(), 35);
        assert_eq!(walls.passage_count(), 0);
        assert!(walls.iter().all(|gc| walls.is_wall(gc)));

        let open = Grid::new(Width(5), Length(7), CellState::Passage);
        assert_eq!(open.passage_count(), 35);
        assert!(open.iter().all(|gc| open.is_passage(gc)));
    }

    #[test]
    fn entrance_and_exit_positions() {
        let g = wall_grid(9, 5);
        assert_eq!(g.entrance(), GridCoordinate::new(0, 1));
        assert_eq!(g.exit(), GridCoordinate::new(4, 7));
    }

    #[test]
    fn cell_outside_grid_is_none() {
        let g = wall_grid(3, 3);
        assert_eq!(g.cell(GridCoordinate::new(3, 0)), None);
        assert_eq!(g.cell(GridCoordinate::new(0, 3)), None);
        assert_eq!(g.grid_coordinate_to_index(GridCoordinate::new(usize::MAX, 0)), None);
        assert_eq!(g.cell(GridCoordinate::new(2, 2)), Some(CellState::Wall));
    }

    #[test]
    fn grid_coordinate_as_index() {
        let g = wall_grid(3, 3);
        let indices = g.iter().map(|gc| g.grid_coordinate_to_index(gc)).collect::<Vec<_>>();
        let expected = (0..9).map(Some).collect::<Vec<Option<usize>>>();
        assert_eq!(indices, expected);
    }

    #[test]
    fn set_and_reset_cells() {
        let mut g = wall_grid(5, 5);
        let gc = GridCoordinate::new(2, 3);
        g.set(gc, CellState::Passage);
        assert!(g.is_passage(gc));
        assert_eq!(g.passage_count(), 1);
        g.set(gc, CellState::Passage);
        assert_eq!(g.passage_count(), 1);
        g.set(gc, CellState::Wall);
        assert!(g.is_wall(gc));
        assert_eq!(g.passage_count(), 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn set_outside_grid_panics() {
        let mut g = wall_grid(3, 3);
        g.set(GridCoordinate::new(5, 5), CellState::Passage);
    }

    #[test]
    fn set_run_is_inclusive_in_either_corner_order() {
        let mut g = wall_grid(7, 7);
        g.set_run(GridCoordinate::new(3, 5), GridCoordinate::new(3, 1), CellState::Passage);
        let expected = (1..=5).map(|col| GridCoordinate::new(3, col)).collect::<Vec<_>>();
        let passages = g.iter().filter(|gc| g.is_passage(*gc)).collect::<Vec<_>>();
        assert_eq!(passages, expected);

        g.set_run(GridCoordinate::new(1, 1), GridCoordinate::new(5, 1), CellState::Passage);
        assert_eq!(g.passage_count(), 9);
    }

    #[test]
    fn interior_excludes_border() {
        let g = wall_grid(5, 5);
        assert!(g.is_interior(GridCoordinate::new(1, 1)));
        assert!(g.is_interior(GridCoordinate::new(3, 3)));
        assert!(!g.is_interior(GridCoordinate::new(0, 2)));
        assert!(!g.is_interior(GridCoordinate::new(4, 2)));
        assert!(!g.is_interior(GridCoordinate::new(2, 4)));
        assert!(!g.is_interior(GridCoordinate::new(2, 0)));
    }

    #[test]
    fn neighbour_at_dir() {
        let g = wall_grid(5, 5);
        let gc = GridCoordinate::new;
        let check = |coord, dir, expected| {
            assert_eq!(g.neighbour_at_direction(coord, dir, JUNCTION_STEP), expected);
        };
        check(gc(1, 1), CompassPrimary::North, None);
        check(gc(1, 1), CompassPrimary::West, None);
        check(gc(1, 1), CompassPrimary::South, Some(gc(3, 1)));
        check(gc(1, 1), CompassPrimary::East, Some(gc(1, 3)));
        check(gc(3, 3), CompassPrimary::South, None);
        check(gc(3, 3), CompassPrimary::East, None);
    }

    #[test]
    fn passage_neighbours_only_open_cells() {
        let mut g = wall_grid(5, 5);
        let centre = GridCoordinate::new(2, 2);
        g.set(centre, CellState::Passage);
        assert!(g.passage_neighbours(centre).is_empty());

        g.set(GridCoordinate::new(1, 2), CellState::Passage);
        g.set(GridCoordinate::new(2, 3), CellState::Passage);
        let neighbours: Vec<GridCoordinate> = g.passage_neighbours(centre).iter().cloned().sorted().collect();
        assert_eq!(neighbours, vec![GridCoordinate::new(1, 2), GridCoordinate::new(2, 3)]);
    }

    #[test]
    fn junction_iteration_is_row_major() {
        let g = wall_grid(7, 5);
        let junctions = g.iter_junctions().collect::<Vec<_>>();
        let gc = GridCoordinate::new;
        assert_eq!(junctions, vec![gc(1, 1), gc(1, 3), gc(1, 5), gc(3, 1), gc(3, 3), gc(3, 5)]);
        assert_eq!(g.junctions_count(), junctions.len());
    }

    #[test]
    fn text_display() {
        let mut g = wall_grid(3, 3);
        g.set_run(GridCoordinate::new(0, 1), GridCoordinate::new(2, 1), CellState::Passage);
        assert_eq!(format!("{}", g), "# #\n# #\n# #\n");
    }
}
