use log::debug;

use crate::cells::{CellState, CompassPrimary, GridCoordinate, Orientation, ALL_DIRECTIONS};
use crate::grid::Grid;
use crate::paint::RegionPainter;
use crate::random::RandomChoice;
use crate::units::JUNCTION_STEP;

/// Grids with more cells than this are carved with an explicit stack under `Recursion::Auto`.
pub const DIRECT_RECURSION_CELL_LIMIT: usize = 10_000;

/// How the depth first generators walk their work.
///
/// Both ways make the same random choices in the same order, so for the same random
/// source they produce the same grid and the same paint operations.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Recursion {
    /// Direct recursion for small grids, an explicit stack for large ones.
    Auto,
    /// Plain function recursion. The call depth grows with the grid area.
    Direct,
    /// A heap allocated work stack.
    ExplicitStack,
}

impl Recursion {
    fn resolve(self, grid: &Grid) -> Recursion {
        match self {
            Recursion::Auto if grid.size() > DIRECT_RECURSION_CELL_LIMIT => Recursion::ExplicitStack,
            Recursion::Auto => Recursion::Direct,
            other => other,
        }
    }
}

/// Mark a straight run of cells as passage and paint it open.
fn carve(grid: &mut Grid, painter: &mut RegionPainter, a: GridCoordinate, b: GridCoordinate) {
    grid.set_run(a, b, CellState::Passage);
    painter.paint_run(a, b, CellState::Passage);
}

/// Apply the binary tree maze generation algorithm to an enclosed grid.
///
/// Every junction, visited row by row, carves a passage two cells long either east or
/// south. Junctions on the last column can only go south and junctions on the last row
/// can only go east, so the bottom right junction is reached from everywhere and carves
/// nothing itself. The result is a perfect maze with a diagonal bias towards that corner.
pub fn binary_tree<R: RandomChoice>(grid: &mut Grid, painter: &mut RegionPainter, rng: &mut R) {
    let last_row = grid.length() - 2;
    let last_col = grid.width() - 2;
    let mut carved = 0;

    let junctions = grid.iter_junctions().collect::<Vec<_>>();
    for junction in junctions {
        let on_last_row = junction.row == last_row;
        let on_last_col = junction.col == last_col;

        let orientation = match (on_last_row, on_last_col) {
            (true, true) => break,
            (false, true) => Orientation::Vertical,
            (true, false) => Orientation::Horizontal,
            (false, false) => {
                if rng.coin_flip() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            }
        };

        let run_end = match orientation {
            Orientation::Horizontal => GridCoordinate::new(junction.row, junction.col + 2),
            Orientation::Vertical => GridCoordinate::new(junction.row + 2, junction.col),
        };
        carve(grid, painter, junction, run_end);
        carved += 1;
    }

    debug!("binary tree carved {} passages over {} junctions", carved, grid.junctions_count());
}

/// The junction the backtracking carver starts from, chosen uniformly.
pub fn random_start_junction<R: RandomChoice>(grid: &Grid, rng: &mut R) -> GridCoordinate {
    let col = rng.uniform_int_range(0, grid.width() - 2) / 2 * 2 + 1;
    let row = rng.uniform_int_range(0, grid.length() - 2) / 2 * 2 + 1;
    GridCoordinate::new(row, col)
}

/// Apply the recursive backtracking maze generation algorithm to an enclosed grid,
/// starting from a random junction.
pub fn recursive_backtracker<R: RandomChoice>(grid: &mut Grid,
                                              painter: &mut RegionPainter,
                                              rng: &mut R,
                                              recursion: Recursion) {
    let start = random_start_junction(grid, rng);
    recursive_backtracker_from(grid, painter, rng, start, recursion);
}

/// Apply the recursive backtracking algorithm from a given junction.
///
/// From the current junction the four directions are tried in a random order. A direction
/// is taken if the junction two cells away is inside the border and has not been carved
/// yet: the three cells between them become passage and the walk continues from there.
/// Once all four directions have been tried the walk backs up to the junction it came
/// from. Every junction is entered exactly once, through the corridor that joins it to
/// the rest, so the maze is perfect and fully connected.
pub fn recursive_backtracker_from<R: RandomChoice>(grid: &mut Grid,
                                                   painter: &mut RegionPainter,
                                                   rng: &mut R,
                                                   start: GridCoordinate,
                                                   recursion: Recursion) {
    debug_assert!(grid.is_interior(start) && start.is_junction());

    // The start cell is only carved here, all others get carved on the way in.
    if !grid.is_passage(start) {
        grid.set(start, CellState::Passage);
        painter.paint_cell(start, CellState::Passage);
    }

    match recursion.resolve(grid) {
        Recursion::ExplicitStack => backtrack_with_stack(grid, painter, rng, start),
        _ => backtrack_recursively(grid, painter, rng, start),
    }

    debug!("recursive backtracker from {} opened {} cells", start, grid.passage_count());
}

fn shuffled_directions<R: RandomChoice>(rng: &mut R) -> [CompassPrimary; 4] {
    let mut directions = ALL_DIRECTIONS;
    rng.shuffle(&mut directions);
    directions
}

/// The junction two cells away, if it is inside the border and still solid.
fn unvisited_junction(grid: &Grid,
                      from: GridCoordinate,
                      direction: CompassPrimary)
                      -> Option<GridCoordinate> {
    grid.neighbour_at_direction(from, direction, JUNCTION_STEP)
        .filter(|next| grid.is_interior(*next) && grid.is_wall(*next))
}

fn backtrack_recursively<R: RandomChoice>(grid: &mut Grid,
                                          painter: &mut RegionPainter,
                                          rng: &mut R,
                                          current: GridCoordinate) {
    for &direction in shuffled_directions(rng).iter() {
        if let Some(next) = unvisited_junction(grid, current, direction) {
            carve(grid, painter, current, next);
            backtrack_recursively(grid, painter, rng, next);
        }
    }
}

struct BacktrackFrame {
    junction: GridCoordinate,
    directions: [CompassPrimary; 4],
    tried: usize,
}

impl BacktrackFrame {
    fn enter<R: RandomChoice>(junction: GridCoordinate, rng: &mut R) -> BacktrackFrame {
        BacktrackFrame {
            junction,
            directions: shuffled_directions(rng),
            tried: 0,
        }
    }
}

fn backtrack_with_stack<R: RandomChoice>(grid: &mut Grid,
                                         painter: &mut RegionPainter,
                                         rng: &mut R,
                                         start: GridCoordinate) {
    let mut stack = vec![BacktrackFrame::enter(start, rng)];

    while let Some(frame) = stack.last_mut() {
        if frame.tried == frame.directions.len() {
            stack.pop();
            continue;
        }
        let direction = frame.directions[frame.tried];
        frame.tried += 1;
        let current = frame.junction;

        if let Some(next) = unvisited_junction(grid, current, direction) {
            carve(grid, painter, current, next);
            stack.push(BacktrackFrame::enter(next, rng));
        }
    }
}

/// A rectangle of the grid still to be divided, bounded by walls on all four sides.
///
/// `origin` is the top left cell, which lies on the bounding walls.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Partition {
    pub origin: GridCoordinate,
    pub width: usize,
    pub length: usize,
}

impl Partition {
    pub fn new(origin: GridCoordinate, width: usize, length: usize) -> Partition {
        Partition { origin, width, length }
    }

    /// The whole grid.
    pub fn of_grid(grid: &Grid) -> Partition {
        Partition::new(GridCoordinate::new(0, 0), grid.width(), grid.length())
    }
}

/// The wall placed across a partition and the one cell left open in it.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Division {
    pub orientation: Orientation,
    pub wall_from: GridCoordinate,
    pub wall_to: GridCoordinate,
    pub hole: GridCoordinate,
    /// The part from the partition origin up to and including the wall.
    pub primary: Partition,
    /// The part from the wall to the far edge of the partition.
    pub pair: Partition,
}

/// Smallest partition extent, along the axis being split, that still gets a wall.
pub const MIN_DIVISIBLE: usize = 5;

/// Apply the recursive division maze generation algorithm to an open, walled grid.
pub fn recursive_division<R: RandomChoice>(grid: &mut Grid,
                                           painter: &mut RegionPainter,
                                           rng: &mut R,
                                           recursion: Recursion) {
    let whole = Partition::of_grid(grid);
    let walls = match recursion.resolve(grid) {
        Recursion::ExplicitStack => divide_with_stack(grid, painter, rng, whole),
        _ => divide(grid, painter, rng, whole),
    };
    debug!("recursive division placed {} walls", walls);
}

/// Split `partition` with one wall, leaving a single hole in it.
///
/// The wall runs across the shorter extent so the pieces stay close to square, or in a
/// random direction for a square partition. Walls go on even offsets from the origin and
/// holes on odd ones, so a wall never lands on an existing passage row and a hole never
/// lands on a crossing wall. Returns None, without touching the grid, if the partition is
/// narrower than `MIN_DIVISIBLE` in the direction it would be split.
pub fn split_partition<R: RandomChoice>(grid: &mut Grid,
                                        painter: &mut RegionPainter,
                                        rng: &mut R,
                                        partition: Partition)
                                        -> Option<Division> {
    let Partition { origin, width, length } = partition;

    let orientation = if width < length {
        Orientation::Horizontal
    } else if width > length {
        Orientation::Vertical
    } else if rng.coin_flip() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };

    let division = match orientation {
        Orientation::Horizontal => {
            if length < MIN_DIVISIBLE {
                return None;
            }
            let wall = origin.row + rng.uniform_int_range(2, length - 3) / 2 * 2;
            let hole = origin.col + rng.uniform_int_range(1, width - 2) / 2 * 2 + 1;
            Division {
                orientation,
                wall_from: GridCoordinate::new(wall, origin.col),
                wall_to: GridCoordinate::new(wall, origin.col + width - 2),
                hole: GridCoordinate::new(wall, hole),
                primary: Partition::new(origin, width, wall - origin.row + 1),
                pair: Partition::new(GridCoordinate::new(wall, origin.col),
                                     width,
                                     origin.row + length - wall),
            }
        }
        Orientation::Vertical => {
            if width < MIN_DIVISIBLE {
                return None;
            }
            let wall = origin.col + rng.uniform_int_range(2, width - 3) / 2 * 2;
            let hole = origin.row + rng.uniform_int_range(1, length - 2) / 2 * 2 + 1;
            Division {
                orientation,
                wall_from: GridCoordinate::new(origin.row, wall),
                wall_to: GridCoordinate::new(origin.row + length - 2, wall),
                hole: GridCoordinate::new(hole, wall),
                primary: Partition::new(origin, wall - origin.col + 1, length),
                pair: Partition::new(GridCoordinate::new(origin.row, wall),
                                     origin.col + width - wall,
                                     length),
            }
        }
    };

    grid.set_run(division.wall_from, division.wall_to, CellState::Wall);
    painter.paint_run(division.wall_from, division.wall_to, CellState::Wall);
    grid.set(division.hole, CellState::Passage);
    painter.paint_cell(division.hole, CellState::Passage);

    Some(division)
}

/// Divide a partition and then, in turn, both of its halves. Returns the walls placed.
pub fn divide<R: RandomChoice>(grid: &mut Grid,
                               painter: &mut RegionPainter,
                               rng: &mut R,
                               partition: Partition)
                               -> usize {
    match split_partition(grid, painter, rng, partition) {
        Some(division) => {
            1 + divide(grid, painter, rng, division.primary) +
            divide(grid, painter, rng, division.pair)
        }
        None => 0,
    }
}

/// `divide` with the pending partitions kept on a work stack.
pub fn divide_with_stack<R: RandomChoice>(grid: &mut Grid,
                                          painter: &mut RegionPainter,
                                          rng: &mut R,
                                          partition: Partition)
                                          -> usize {
    let mut walls = 0;
    let mut pending = vec![partition];
    while let Some(next) = pending.pop() {
        if let Some(division) = split_partition(grid, painter, rng, next) {
            walls += 1;
            // The primary half is popped, and finished, first.
            pending.push(division.pair);
            pending.push(division.primary);
        }
    }
    walls
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::boundary;
    use crate::paint::{Coord3D, Material, RegionPaintOp};
    use crate::pathing::{self, Distances};
    use crate::random::{maze_rng, ScriptedChoices};
    use crate::units::{Height, Length, Width};
    use quickcheck::{quickcheck, TestResult};

    fn painter() -> RegionPainter {
        RegionPainter::new(Coord3D::default(), Height(2), Material::block("stone"))
    }

    fn binary_tree_maze(w: usize, l: usize, seed: u64) -> (Grid, Vec<RegionPaintOp>) {
        let mut p = painter();
        let mut g = boundary::enclosed(Width(w), Length(l), &mut p);
        binary_tree(&mut g, &mut p, &mut maze_rng(Some(seed)));
        (g, p.into_ops())
    }

    fn backtracker_maze(w: usize, l: usize, seed: u64, recursion: Recursion)
                        -> (Grid, Vec<RegionPaintOp>) {
        let mut p = painter();
        let mut g = boundary::enclosed(Width(w), Length(l), &mut p);
        recursive_backtracker(&mut g, &mut p, &mut maze_rng(Some(seed)), recursion);
        (g, p.into_ops())
    }

    fn division_maze(w: usize, l: usize, seed: u64, recursion: Recursion)
                     -> (Grid, Vec<RegionPaintOp>) {
        let mut p = painter();
        let mut g = boundary::open(Width(w), Length(l), &mut p);
        recursive_division(&mut g, &mut p, &mut maze_rng(Some(seed)), recursion);
        (g, p.into_ops())
    }

    // Odd dimensions between 3 and 41 from arbitrary bytes.
    fn odd_dimension(n: u8) -> usize {
        (n as usize % 20) * 2 + 3
    }

    fn gates_open(g: &Grid) -> bool {
        g.is_passage(GridCoordinate::new(0, 1)) &&
        g.is_passage(GridCoordinate::new(g.length() - 1, g.width() - 2))
    }

    fn all_passages_reachable_from(g: &Grid, start: GridCoordinate) -> bool {
        let distances = Distances::new(g, start).expect("start is not a passage");
        g.iter().filter(|gc| g.is_passage(*gc)).all(|gc| distances.distance_from_start_to(gc).is_some())
    }

    #[test]
    fn binary_tree_7x7_forced_orientations() {
        for seed in 0..20 {
            let (g, ops) = binary_tree_maze(7, 7, seed);
            let gc = GridCoordinate::new;

            // 9 junctions, the corner one carves nothing
            assert_eq!(g.junctions_count(), 9);
            assert_eq!(ops.len(), 3 + 8);

            // last row junctions carve east
            assert!(g.is_passage(gc(5, 2)) && g.is_passage(gc(5, 4)));
            // last column junctions carve south
            assert!(g.is_passage(gc(2, 5)) && g.is_passage(gc(4, 5)));
            // nothing carved out of the corner junction into the east border
            assert!(g.is_wall(gc(5, 6)));
            assert!(gates_open(&g));
        }
    }

    #[test]
    fn binary_tree_junction_order_is_row_major() {
        // Always choose horizontal: every row becomes a corridor joined on the east side.
        let mut p = painter();
        let mut g = boundary::enclosed(Width(7), Length(5), &mut p);
        binary_tree(&mut g, &mut p, &mut ScriptedChoices::new(vec![0]));

        assert_eq!(format!("{}", g), concat!("# #####\n",
                                             "#     #\n",
                                             "##### #\n",
                                             "#     #\n",
                                             "##### #\n"));
        let carved_runs = p.ops()[3..].iter().map(|op| (op.from.z, op.from.x, op.to.x)).collect::<Vec<_>>();
        assert_eq!(carved_runs, vec![(1, 1, 3), (1, 3, 5), (1, 5, 5), (3, 1, 3), (3, 3, 5)]);
    }

    #[test]
    fn binary_tree_is_a_spanning_tree() {
        fn prop(w: u8, l: u8, seed: u64) -> TestResult {
            let (w, l) = (odd_dimension(w), odd_dimension(l));
            if w == 3 && l == 3 {
                return TestResult::discard();
            }
            let (g, ops) = binary_tree_maze(w, l, seed);
            TestResult::from_bool(ops.len() - 3 == g.junctions_count() - 1 && pathing::is_perfect(&g) &&
                                  gates_open(&g))
        }
        quickcheck(prop as fn(u8, u8, u64) -> TestResult);
    }

    #[test]
    fn binary_tree_leaves_a_lone_junction_solid() {
        let (g, ops) = binary_tree_maze(3, 3, 0);
        assert_eq!(ops.len(), 3);
        assert!(g.is_wall(GridCoordinate::new(1, 1)));
        assert!(gates_open(&g));
    }

    #[test]
    fn backtracker_9x9_is_reproducible() {
        let (g1, ops1) = backtracker_maze(9, 9, 1234, Recursion::Direct);
        let (g2, ops2) = backtracker_maze(9, 9, 1234, Recursion::Direct);
        assert_eq!(g1, g2);
        assert_eq!(format!("{}", g1), format!("{}", g2));
        assert_eq!(ops1, ops2);
    }

    #[test]
    fn backtracker_recursion_strategies_agree() {
        fn prop(w: u8, l: u8, seed: u64) -> bool {
            let (w, l) = (odd_dimension(w), odd_dimension(l));
            backtracker_maze(w, l, seed, Recursion::Direct) ==
            backtracker_maze(w, l, seed, Recursion::ExplicitStack)
        }
        quickcheck(prop as fn(u8, u8, u64) -> bool);
    }

    #[test]
    fn backtracker_connects_everything_once() {
        fn prop(w: u8, l: u8, seed: u64) -> bool {
            let (w, l) = (odd_dimension(w), odd_dimension(l));
            let (g, ops) = backtracker_maze(w, l, seed, Recursion::Auto);
            // boundary ops, the start cell, then one carve per junction entered
            let carves = ops.len() - 4;
            gates_open(&g) && all_passages_reachable_from(&g, g.entrance()) &&
            carves == g.junctions_count() - 1 && pathing::is_perfect(&g)
        }
        quickcheck(prop as fn(u8, u8, u64) -> bool);
    }

    #[test]
    fn backtracker_never_reenters_a_junction() {
        let (_, ops) = backtracker_maze(21, 15, 99, Recursion::ExplicitStack);
        let mut entered = fnv::FnvHashSet::default();
        entered.insert((ops[3].from.z, ops[3].from.x));

        // every carve joins one already entered junction to exactly one new one
        for op in &ops[4..] {
            let ends = [(op.from.z, op.from.x), (op.to.z, op.to.x)];
            assert!(ends.iter().all(|&(z, x)| z % 2 == 1 && x % 2 == 1));
            assert_eq!(op.volume(), 3 * 2);
            let new_ends = ends.iter().filter(|end| !entered.contains(*end)).count();
            assert_eq!(new_ends, 1);
            entered.extend(ends.iter().cloned());
        }
        assert_eq!(entered.len(), 10 * 7);
    }

    #[test]
    fn backtracker_on_a_single_junction() {
        let (g, ops) = backtracker_maze(3, 3, 5, Recursion::Direct);
        assert_eq!(ops.len(), 4);
        assert_eq!(format!("{}", g), "# #\n# #\n# #\n");
    }

    #[test]
    fn backtracker_scripted_start() {
        let g = Grid::new(Width(9), Length(7), CellState::Wall);
        let mut lowest = ScriptedChoices::new(vec![0]);
        assert_eq!(random_start_junction(&g, &mut lowest), GridCoordinate::new(1, 1));
        let mut highest = ScriptedChoices::new(vec![7, 5]);
        assert_eq!(random_start_junction(&g, &mut highest), GridCoordinate::new(5, 7));
    }

    #[test]
    fn division_5x5_places_one_wall_with_one_hole() {
        for seed in 0..20 {
            let (g, _) = division_maze(5, 5, seed, Recursion::Direct);
            assert!(gates_open(&g));

            let interior_walls = g.iter()
                .filter(|gc| g.is_interior(*gc) && g.is_wall(*gc))
                .collect::<Vec<_>>();
            assert_eq!(interior_walls.len(), 2, "seed {}\n{}", seed, g);
            let (a, b) = (interior_walls[0], interior_walls[1]);
            assert!((a.row == 2 && b.row == 2) || (a.col == 2 && b.col == 2));

            for gc in g.iter().filter(|gc| !g.is_interior(*gc)) {
                let is_gate = gc == g.entrance() || gc == g.exit();
                assert_eq!(g.is_passage(gc), is_gate);
            }
        }
    }

    #[test]
    fn division_stops_below_minimum() {
        let mut g = Grid::new(Width(9), Length(9), CellState::Passage);
        let mut p = painter();
        let mut rng = maze_rng(Some(1));

        for &(w, l) in [(3, 3), (3, 1), (1, 3)].iter() {
            let partition = Partition::new(GridCoordinate::new(2, 2), w, l);
            assert_eq!(split_partition(&mut g, &mut p, &mut rng, partition), None);
            assert_eq!(divide(&mut g, &mut p, &mut rng, partition), 0);
        }
        assert_eq!(p.ops_count(), 0);
        assert_eq!(g.passage_count(), 81);
    }

    #[test]
    fn division_splits_along_the_longer_extent() {
        let mut g = Grid::new(Width(9), Length(9), CellState::Passage);
        let mut p = painter();
        let mut lowest = ScriptedChoices::new(vec![0]);

        let tall = Partition::new(GridCoordinate::new(0, 0), 3, 7);
        let division = split_partition(&mut g, &mut p, &mut lowest, tall).unwrap();
        assert_eq!(division.orientation, Orientation::Horizontal);
        assert_eq!(division.wall_from, GridCoordinate::new(2, 0));
        assert_eq!(division.wall_to, GridCoordinate::new(2, 1));
        assert_eq!(division.hole, GridCoordinate::new(2, 1));
        assert_eq!(division.primary, Partition::new(GridCoordinate::new(0, 0), 3, 3));
        assert_eq!(division.pair, Partition::new(GridCoordinate::new(2, 0), 3, 5));

        let wide = Partition::new(GridCoordinate::new(2, 0), 9, 5);
        let division = split_partition(&mut g, &mut p, &mut lowest, wide).unwrap();
        assert_eq!(division.orientation, Orientation::Vertical);
        assert_eq!(division.wall_from, GridCoordinate::new(2, 2));
        assert_eq!(division.wall_to, GridCoordinate::new(5, 2));
        assert_eq!(division.hole, GridCoordinate::new(3, 2));
        assert_eq!(division.primary, Partition::new(GridCoordinate::new(2, 0), 3, 5));
        assert_eq!(division.pair, Partition::new(GridCoordinate::new(2, 2), 7, 5));

        // one wall op and one hole op per split
        assert_eq!(p.ops_count(), 4);
        assert!(!p.ops()[0].material.is_open() && p.ops()[1].material.is_open());
    }

    #[test]
    fn division_holes_sit_inside_their_walls() {
        fn prop(w: u8, l: u8, seed: u64) -> TestResult {
            let (w, l) = (odd_dimension(w), odd_dimension(l));
            let mut g = Grid::new(Width(w), Length(l), CellState::Passage);
            let mut p = painter();
            let mut rng = maze_rng(Some(seed));
            let mut pending = vec![Partition::of_grid(&g)];

            while let Some(partition) = pending.pop() {
                let division = match split_partition(&mut g, &mut p, &mut rng, partition) {
                    Some(d) => d,
                    None => continue,
                };
                let (wall_offset, hole_offset, extent) = match division.orientation {
                    Orientation::Horizontal => (division.hole.row - partition.origin.row,
                                                division.hole.col - partition.origin.col,
                                                partition.width),
                    Orientation::Vertical => (division.hole.col - partition.origin.col,
                                              division.hole.row - partition.origin.row,
                                              partition.length),
                };
                let hole_on_wall = match division.orientation {
                    Orientation::Horizontal => division.hole.row == division.wall_from.row,
                    Orientation::Vertical => division.hole.col == division.wall_from.col,
                };
                if !hole_on_wall || wall_offset % 2 != 0 || hole_offset % 2 != 1 ||
                   hole_offset == 0 || hole_offset >= extent - 1 || !g.is_passage(division.hole) {
                    return TestResult::failed();
                }
                pending.push(division.pair);
                pending.push(division.primary);
            }
            TestResult::passed()
        }
        quickcheck(prop as fn(u8, u8, u64) -> TestResult);
    }

    #[test]
    fn division_recursion_strategies_agree() {
        fn prop(w: u8, l: u8, seed: u64) -> bool {
            let (w, l) = (odd_dimension(w), odd_dimension(l));
            division_maze(w, l, seed, Recursion::Direct) ==
            division_maze(w, l, seed, Recursion::ExplicitStack)
        }
        quickcheck(prop as fn(u8, u8, u64) -> bool);
    }

    #[test]
    fn division_is_connected_and_perfect() {
        fn prop(w: u8, l: u8, seed: u64) -> bool {
            let (w, l) = (odd_dimension(w), odd_dimension(l));
            let (g, _) = division_maze(w, l, seed, Recursion::Auto);
            gates_open(&g) && all_passages_reachable_from(&g, g.entrance()) && pathing::is_perfect(&g)
        }
        quickcheck(prop as fn(u8, u8, u64) -> bool);
    }

    #[test]
    fn auto_recursion_switches_on_size() {
        let small = Grid::new(Width(99), Length(99), CellState::Wall);
        let large = Grid::new(Width(101), Length(101), CellState::Wall);
        assert_eq!(Recursion::Auto.resolve(&small), Recursion::Direct);
        assert_eq!(Recursion::Auto.resolve(&large), Recursion::ExplicitStack);
        assert_eq!(Recursion::Direct.resolve(&large), Recursion::Direct);
    }
}
