use fnv::FnvHashMap;
use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::grid::Grid;
use crate::units::Step;

/// Walking distances from one passage cell to every passage cell reachable from it.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: GridCoordinate,
    distances: FnvHashMap<GridCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill outwards from `start_coordinate` through adjacent passage cells.
    ///
    /// Returns None if the start is not a passage cell on the grid.
    pub fn new(grid: &Grid, start_coordinate: GridCoordinate) -> Option<Distances> {
        if !grid.is_passage(start_coordinate) {
            return None;
        }

        let mut max: u32 = 0;
        let mut distances = FnvHashMap::default();
        distances.reserve(grid.passage_count());
        distances.insert(start_coordinate, 0);

        // Every step costs one, so the first time a cell is reached is along a shortest path
        // and the map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {
            let mut new_frontier = vec![];
            for cell_coord in &frontier {
                let distance_to_cell = distances[cell_coord];
                max = max.max(distance_to_cell);

                for neighbour in grid.passage_neighbours(*cell_coord).iter() {
                    if !distances.contains_key(neighbour) {
                        distances.insert(*neighbour, distance_to_cell + 1);
                        new_frontier.push(*neighbour);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// None if `coord` cannot be reached from the start.
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// The cells at the maximum distance, in row-major order.
    pub fn furthest_points_on_grid(&self) -> Vec<GridCoordinate> {
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, distance)| *distance == self.max_distance)
            .map(|(coord, _)| *coord)
            .collect::<Vec<_>>();
        furthest.sort();
        furthest
    }
}

/// The cells of a shortest walk from the start of `distances` to `end_point`, both included.
///
/// Returns None if the end point cannot be reached.
pub fn shortest_path(grid: &Grid,
                     distances: &Distances,
                     end_point: GridCoordinate)
                     -> Option<Vec<GridCoordinate>> {
    let mut distance = distances.distance_from_start_to(end_point)?;
    let mut path = vec![end_point];
    let mut current = end_point;

    while distance > 0 {
        // Any neighbour one step closer to the start lies on a shortest path.
        let closer = grid.passage_neighbours(current)
            .iter()
            .cloned()
            .find(|neighbour| distances.distance_from_start_to(*neighbour) == Some(distance - 1))?;
        path.push(closer);
        current = closer;
        distance -= 1;
    }

    path.reverse();
    Some(path)
}

/// The entrance to exit route through a maze, if there is one.
pub fn solution_path(grid: &Grid) -> Option<Vec<GridCoordinate>> {
    let distances = Distances::new(grid, grid.entrance())?;
    shortest_path(grid, &distances, grid.exit())
}

/// The maze as a graph of its junctions, with an edge wherever the cell between two
/// neighbouring passage junctions is open.
pub fn junction_graph(grid: &Grid) -> UnGraph<GridCoordinate, ()> {
    let junctions = grid.iter_junctions().collect::<Vec<_>>();
    let mut graph = UnGraph::with_capacity(junctions.len(), 2 * junctions.len());
    let mut nodes = FnvHashMap::default();
    for junction in &junctions {
        if grid.is_passage(*junction) {
            nodes.insert(*junction, graph.add_node(*junction));
        }
    }

    let node = |coord: &GridCoordinate| -> Option<NodeIndex> { nodes.get(coord).cloned() };
    let mut edges = Vec::with_capacity(graph.node_count() * 2);
    for junction in &junctions {
        for &dir in [CompassPrimary::East, CompassPrimary::South].iter() {
            let between = grid.neighbour_at_direction(*junction, dir, Step(1));
            let beyond = grid.neighbour_at_direction(*junction, dir, Step(2));
            if let (Some(a), Some(b), Some(gap)) = (node(junction), beyond.and_then(|b| node(&b)), between) {
                if grid.is_passage(gap) {
                    edges.push((a, b));
                }
            }
        }
    }
    for (a, b) in edges {
        graph.add_edge(a, b, ());
    }
    graph
}

/// A perfect maze has every junction open and exactly one route between any two of them.
pub fn is_perfect(grid: &Grid) -> bool {
    let graph = junction_graph(grid);
    graph.node_count() == grid.junctions_count() && connected_components(&graph) <= 1 &&
    !is_cyclic_undirected(&graph)
}
