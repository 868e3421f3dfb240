//! Reading the logical maze back out of a carved pixel grid.
//!
//! A passage is the wall strip between two orthogonally adjacent cells. It is open when every pixel
//! of the strip is path. With a zero wall thickness there are no strips and every pair of
//! adjacent cells counts as connected.

use itertools::iproduct;
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{offset_coordinate, CellCoordinate, CompassPrimary};
use crate::generators::PixelMaze;
use crate::occupancy::Occupancy;
use crate::units::{Height, Width};

/// Is the passage from `cell` towards `dir` open? False when there is no neighbour that way.
pub fn is_passage_open<T: Occupancy>(maze: &PixelMaze<T>,
                                     cell: CellCoordinate,
                                     dir: CompassPrimary)
                                     -> bool {

    if offset_coordinate(cell, dir, maze.columns(), maze.rows()).is_none() {
        return false;
    }

    let (x, y, w, h) = maze.passage_strip(cell, dir);
    iproduct!(y..y + h, x..x + w).all(|(py, px)| maze.grid().is_path(px, py))
}

/// Every open passage as a pair of cells, listed once each in row-major order of the first cell.
pub fn passages<T: Occupancy>(maze: &PixelMaze<T>) -> Vec<(CellCoordinate, CellCoordinate)> {
    let (columns, rows) = (maze.columns(), maze.rows());

    iproduct!(0..rows.0, 0..columns.0, [CompassPrimary::East, CompassPrimary::South].iter())
        .map(|(y, x, &dir)| (CellCoordinate::new(x, y), dir))
        .filter(|&(cell, dir)| is_passage_open(maze, cell, dir))
        .filter_map(|(cell, dir)| {
            offset_coordinate(cell, dir, columns, rows).map(|neighbour| (cell, neighbour))
        })
        .collect()
}

/// Undirected graph with one node per cell, at the cell's row-major index, and one edge per open
/// passage.
pub fn passage_graph<T: Occupancy>(maze: &PixelMaze<T>) -> UnGraph<CellCoordinate, ()> {
    let columns = maze.columns();
    let cells_count = columns.0 * maze.rows().0;
    let links = passages(maze);

    let mut graph = UnGraph::with_capacity(cells_count, links.len());
    for index in 0..cells_count {
        let _ = graph.add_node(CellCoordinate::from_row_major_index(index, columns));
    }
    for (a, b) in links {
        let _ = graph.add_edge(NodeIndex::new(a.row_major_index(columns)),
                               NodeIndex::new(b.row_major_index(columns)),
                               ());
    }
    graph
}

/// Does the grid hold a perfect maze: every cell square open, all cells connected and no cycles?
pub fn is_perfect<T: Occupancy>(maze: &PixelMaze<T>) -> bool {
    let all_cells_open = iproduct!(0..maze.rows().0, 0..maze.columns().0).all(|(y, x)| {
        let (px, py) = maze.cell_origin(CellCoordinate::new(x, y));
        maze.grid().is_path(px, py)
    });

    let graph = passage_graph(maze);
    all_cells_open && connected_components(&graph) == 1 &&
        graph.edge_count() + 1 == graph.node_count()
}

/// Is the outer border, one wall thickness deep, entirely wall?
pub fn is_enclosed<T: Occupancy>(maze: &PixelMaze<T>) -> bool {
    let (Width(w), Height(h)) = maze.size();
    let border = maze.wall_thickness().0;

    iproduct!(0..h, 0..w)
        .filter(|&(y, x)| x < border || y < border || x >= w - border || y >= h - border)
        .all(|(y, x)| !maze.grid().is_path(x, y))
}

/// Text serialization of the passage graph. Line 1: `n m` (#vertices #edges). Line 2+: an edge
/// between two vertices. Vertices are 1-based row-major cell indices.
pub fn edge_list<T: Occupancy>(maze: &PixelMaze<T>) -> String {
    let columns = maze.columns();
    let links = passages(maze);

    let mut graph_data = String::new();
    graph_data.push_str(&format!("{} {}\n", columns.0 * maze.rows().0, links.len()));
    for (src, dst) in links {
        graph_data.push_str(&format!("{} {}\n",
                                     src.row_major_index(columns) + 1,
                                     dst.row_major_index(columns) + 1));
    }
    graph_data
}

#[cfg(test)]
mod tests {

    use quickcheck::quickcheck;

    use super::*;
    use crate::generators::SmallPixelMaze;
    use crate::units::{CellSidePixels, ColumnsCount, RowsCount, WallThickness};

    fn maze(cols: usize, rows: usize, side: usize, wall: usize) -> SmallPixelMaze {
        PixelMaze::new(ColumnsCount(cols), RowsCount(rows), CellSidePixels(side), WallThickness(wall))
            .expect("valid maze dimensions")
    }

    #[test]
    fn two_cell_maze_has_one_passage() {
        let mut m = maze(2, 1, 4, 1);
        m.generate(0, 1);
        let gc = CellCoordinate::new;
        assert_eq!(passages(&m), vec![(gc(0, 0), gc(1, 0))]);
        assert!(is_passage_open(&m, gc(0, 0), CompassPrimary::East));
        assert!(is_passage_open(&m, gc(1, 0), CompassPrimary::West));
        assert!(!is_passage_open(&m, gc(0, 0), CompassPrimary::West));
        assert!(!is_passage_open(&m, gc(1, 0), CompassPrimary::East));
        assert_eq!(edge_list(&m), "2 1\n1 2\n");
    }

    #[test]
    fn ungenerated_maze_is_not_perfect() {
        let m = maze(3, 3, 2, 1);
        assert!(passages(&m).is_empty());
        assert!(!is_perfect(&m));
        assert!(is_enclosed(&m));
    }

    #[test]
    fn passage_graph_has_a_node_per_cell() {
        let mut m = maze(6, 4, 2, 2);
        m.generate(21, 22);
        let g = passage_graph(&m);
        assert_eq!(g.node_count(), 24);
        assert_eq!(g.edge_count(), 23);
        assert_eq!(g[NodeIndex::new(7)], CellCoordinate::new(1, 1));
        assert_eq!(connected_components(&g), 1);
    }

    #[test]
    fn zero_wall_thickness_connects_every_neighbour() {
        let mut m = maze(3, 2, 2, 0);
        m.generate(0, 0);
        // 2 horizontal per row * 2 rows + 3 vertical
        assert_eq!(passages(&m).len(), 7);
        assert!(!is_perfect(&m));
    }

    #[test]
    fn edge_list_header_counts_cells_and_passages() {
        let mut m = maze(5, 5, 1, 1);
        m.generate(1, 2);
        let edges = edge_list(&m);
        let mut lines = edges.lines();
        assert_eq!(lines.next(), Some("25 24"));
        assert_eq!(lines.count(), 24);
    }

    #[test]
    fn generated_mazes_are_perfect_and_enclosed() {
        fn prop(cols: u8, rows: u8, side: u8, wall: u8, seed1: u64, seed2: u64) -> bool {
            let mut m = maze((cols % 12) as usize + 1,
                             (rows % 12) as usize + 1,
                             (side % 4) as usize + 1,
                             (wall % 3) as usize + 1);
            m.generate(seed1, seed2);
            is_perfect(&m) && is_enclosed(&m)
        }
        quickcheck(prop as fn(u8, u8, u8, u8, u64, u64) -> bool);
    }
}
