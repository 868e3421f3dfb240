//! Maze generation that describes the result as wall rectangles instead of an occupancy grid.
//!
//! Cells are laid out on a `cell_side` pixel pitch and each remaining wall becomes a rectangle
//! `wall` pixels thick that overlaps its neighbours at the corners. Drawing every rectangle over
//! a path coloured background gives the maze picture; see `renderers::draw_walls`.

use error_chain::bail;
use log::debug;
use rand::seq::SliceRandom;
use smallvec::SmallVec;
use std::cmp;

use crate::cells::{offset_coordinate, CellCoordinate, CompassPrimary};
use crate::errors::*;
use crate::generators::seeded_rng;
use crate::units::{CellSidePixels, ColumnsCount, Height, RowsCount, WallThickness, Width};

/// Half open pixel rectangle: `min` is inclusive and `max` exclusive.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Rect {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl Rect {
    pub fn new(min_x: usize, min_y: usize, max_x: usize, max_y: usize) -> Rect {
        Rect { min_x, min_y, max_x, max_y }
    }

    /// Rectangle covering a whole `width` * `height` image.
    pub fn with_size(width: Width, height: Height) -> Rect {
        Rect::new(0, 0, width.0, height.0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// The overlap of two rectangles, which may be empty.
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect {
            min_x: cmp::max(self.min_x, other.min_x),
            min_y: cmp::max(self.min_y, other.min_y),
            max_x: cmp::min(self.max_x, other.max_x),
            max_y: cmp::min(self.max_y, other.max_y),
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct WalledCell {
    visited: bool,
    walls: [bool; 4],
}

impl WalledCell {
    const UNVISITED: WalledCell = WalledCell {
        visited: false,
        walls: [true; 4],
    };
}

type NeighbourSmallVec = SmallVec<[(CellCoordinate, CompassPrimary); 4]>;

/// Order the unvisited neighbours of a cell are listed in before one is picked at random.
const NEIGHBOUR_ORDER: [CompassPrimary; 4] = [CompassPrimary::North,
                                              CompassPrimary::East,
                                              CompassPrimary::South,
                                              CompassPrimary::West];

/// Randomised depth first maze generator whose output is the set of wall rectangles left standing.
///
/// Unlike `generators::PixelMaze` each step picks uniformly among the unvisited neighbours of the
/// cell on top of the stack, rather than walking a shuffled direction order.
#[derive(Debug)]
pub struct WallMaze {
    cells: Vec<WalledCell>,
    stack: Vec<CellCoordinate>,
    columns: ColumnsCount,
    rows: RowsCount,
    cell_side: CellSidePixels,
    wall: WallThickness,
}

impl WallMaze {
    /// Fails with `ErrorKind::InvalidDimension` if `columns`, `rows` or `cell_side` is zero, or if
    /// the picture would be too large to address.
    pub fn new(columns: ColumnsCount,
               rows: RowsCount,
               cell_side: CellSidePixels,
               wall: WallThickness)
               -> Result<WallMaze> {

        if columns.0 == 0 {
            bail!(ErrorKind::InvalidDimension("columns", columns.0));
        }
        if rows.0 == 0 {
            bail!(ErrorKind::InvalidDimension("rows", rows.0));
        }
        if cell_side.0 == 0 {
            bail!(ErrorKind::InvalidDimension("cell side pixels", cell_side.0));
        }
        let fits = |cells: usize| cells.checked_mul(cell_side.0).and_then(|l| l.checked_add(wall.0));
        if fits(columns.0).is_none() {
            bail!(ErrorKind::InvalidDimension("columns", columns.0));
        }
        if fits(rows.0).is_none() {
            bail!(ErrorKind::InvalidDimension("rows", rows.0));
        }
        let cells_count = columns.0
            .checked_mul(rows.0)
            .ok_or(ErrorKind::InvalidDimension("rows", rows.0))?;

        Ok(WallMaze {
            cells: vec![WalledCell::UNVISITED; cells_count],
            stack: Vec::with_capacity(cells_count),
            columns,
            rows,
            cell_side,
            wall,
        })
    }

    /// Carve a new maze from the seed pair and return the rectangles of every wall still standing.
    pub fn generate(&mut self, seed1: u64, seed2: u64) -> Vec<Rect> {
        let mut rng = seeded_rng(seed1, seed2);

        for cell in self.cells.iter_mut() {
            *cell = WalledCell::UNVISITED;
        }
        self.stack.clear();

        let start = CellCoordinate::new(0, 0);
        self.cell_mut(start).visited = true;
        self.stack.push(start);

        while let Some(&current) = self.stack.last() {
            let neighbours = self.unvisited_neighbours(current);

            if let Some(&(next, dir)) = neighbours.choose(&mut rng) {
                self.remove_wall(current, next, dir);
                self.cell_mut(next).visited = true;
                self.stack.push(next);
            } else {
                let _ = self.stack.pop();
            }
        }

        let walls = self.wall_rectangles();
        debug!("generated {}x{} cell wall maze from seeds ({}, {}), {} wall rectangles",
               self.columns.0, self.rows.0, seed1, seed2, walls.len());
        walls
    }

    /// Pixel width and height of the picture the wall rectangles cover.
    pub fn size(&self) -> (Width, Height) {
        (Width(self.columns.0 * self.cell_side.0 + self.wall.0),
         Height(self.rows.0 * self.cell_side.0 + self.wall.0))
    }

    /// Is there a wall on the `dir` side of the cell? Coordinates outside the maze have no walls.
    pub fn is_wall(&self, cell: CellCoordinate, dir: CompassPrimary) -> bool {
        if cell.is_within(self.columns, self.rows) {
            self.cells[cell.row_major_index(self.columns)].walls[dir.index()]
        } else {
            false
        }
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    fn cell_mut(&mut self, coord: CellCoordinate) -> &mut WalledCell {
        let index = coord.row_major_index(self.columns);
        &mut self.cells[index]
    }

    fn unvisited_neighbours(&self, coord: CellCoordinate) -> NeighbourSmallVec {
        NEIGHBOUR_ORDER.iter()
            .filter_map(|&dir| {
                offset_coordinate(coord, dir, self.columns, self.rows).map(|next| (next, dir))
            })
            .filter(|&(next, _)| !self.cells[next.row_major_index(self.columns)].visited)
            .collect()
    }

    fn remove_wall(&mut self, current: CellCoordinate, next: CellCoordinate, dir: CompassPrimary) {
        self.cell_mut(current).walls[dir.index()] = false;
        self.cell_mut(next).walls[dir.opposite().index()] = false;
    }

    /// Every wall still standing as a rectangle. Each rectangle extends one wall thickness past the
    /// cell's far edge so that corners are covered. Zero area rectangles are left out.
    fn wall_rectangles(&self) -> Vec<Rect> {
        let side = self.cell_side.0;
        let wall = self.wall.0;
        let mut walls = Vec::new();

        for (index, cell) in self.cells.iter().enumerate() {
            let coord = CellCoordinate::from_row_major_index(index, self.columns);
            let (x, y) = (coord.x * side, coord.y * side);

            if cell.walls[CompassPrimary::North.index()] {
                walls.push(Rect::new(x, y, x + side + wall, y + wall));
            }
            if cell.walls[CompassPrimary::East.index()] {
                walls.push(Rect::new(x + side, y, x + side + wall, y + side + wall));
            }
            if cell.walls[CompassPrimary::South.index()] {
                walls.push(Rect::new(x, y + side, x + side + wall, y + side + wall));
            }
            if cell.walls[CompassPrimary::West.index()] {
                walls.push(Rect::new(x, y, x + wall, y + side + wall));
            }
        }

        walls.retain(|wall| !wall.is_empty());
        walls
    }
}

#[cfg(test)]
mod tests {

    use quickcheck::quickcheck;

    use super::*;

    fn wall_maze(cols: usize, rows: usize, side: usize, wall: usize) -> WallMaze {
        WallMaze::new(ColumnsCount(cols), RowsCount(rows), CellSidePixels(side), WallThickness(wall))
            .expect("valid maze dimensions")
    }

    fn open_wall_pairs(m: &WallMaze) -> usize {
        let mut open_sides = 0;
        for y in 0..m.rows().0 {
            for x in 0..m.columns().0 {
                for dir in CompassPrimary::ALL.iter() {
                    if !m.is_wall(CellCoordinate::new(x, y), *dir) {
                        open_sides += 1;
                    }
                }
            }
        }
        open_sides / 2
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 20, 20);
        assert_eq!(a.intersect(&b), Rect::new(5, 5, 10, 10));
        assert!(!a.intersect(&b).is_empty());

        let c = Rect::new(10, 0, 12, 4);
        assert!(a.intersect(&c).is_empty());
        assert!(Rect::new(3, 3, 3, 9).is_empty());
    }

    #[test]
    fn size_uses_one_trailing_wall() {
        let m = wall_maze(7, 5, 64, 9);
        assert_eq!(m.size(), (Width(7 * 64 + 9), Height(5 * 64 + 9)));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let result = WallMaze::new(ColumnsCount(3), RowsCount(0), CellSidePixels(2), WallThickness(1));
        match result {
            Err(Error(ErrorKind::InvalidDimension(name, _), _)) => assert_eq!(name, "rows"),
            _ => panic!("expected an invalid dimension error"),
        }
    }

    #[test]
    fn two_cells_share_one_open_wall() {
        let mut m = wall_maze(2, 1, 4, 1);
        let walls = m.generate(0, 1);
        assert!(!m.is_wall(CellCoordinate::new(0, 0), CompassPrimary::East));
        assert!(!m.is_wall(CellCoordinate::new(1, 0), CompassPrimary::West));
        // 8 sides, 2 of them open
        assert_eq!(walls.len(), 6);
    }

    #[test]
    fn carves_a_spanning_tree() {
        let mut m = wall_maze(9, 6, 10, 2);
        let _ = m.generate(3, 4);
        assert_eq!(open_wall_pairs(&m), 9 * 6 - 1);
    }

    #[test]
    fn outer_walls_stay_standing() {
        let mut m = wall_maze(5, 4, 3, 1);
        let _ = m.generate(5, 5);
        for x in 0..5 {
            assert!(m.is_wall(CellCoordinate::new(x, 0), CompassPrimary::North));
            assert!(m.is_wall(CellCoordinate::new(x, 3), CompassPrimary::South));
        }
        for y in 0..4 {
            assert!(m.is_wall(CellCoordinate::new(0, y), CompassPrimary::West));
            assert!(m.is_wall(CellCoordinate::new(4, y), CompassPrimary::East));
        }
    }

    #[test]
    fn rectangles_lie_inside_the_picture() {
        let mut m = wall_maze(7, 5, 64, 9);
        let (w, h) = m.size();
        let bounds = Rect::with_size(w, h);
        for wall in m.generate(0, 1) {
            assert_eq!(wall.intersect(&bounds), wall);
            assert!(!wall.is_empty());
        }
    }

    #[test]
    fn zero_wall_thickness_yields_no_rectangles() {
        let mut m = wall_maze(4, 3, 8, 0);
        assert!(m.generate(2, 9).is_empty());
        // the maze itself is still carved
        assert_eq!(open_wall_pairs(&m), 4 * 3 - 1);
    }

    #[test]
    fn same_seed_same_walls() {
        fn prop(cols: u8, rows: u8, seed1: u64, seed2: u64) -> bool {
            let (cols, rows) = ((cols % 10) as usize + 1, (rows % 10) as usize + 1);
            let mut a = wall_maze(cols, rows, 3, 1);
            let mut b = wall_maze(cols, rows, 3, 1);
            let first = a.generate(seed1, seed2);
            // reuse after a different seed
            let _ = a.generate(seed2, seed1);
            a.generate(seed1, seed2) == first &&
                b.generate(seed1, seed2) == first &&
                open_wall_pairs(&a) == cols * rows - 1
        }
        quickcheck(prop as fn(u8, u8, u64, u64) -> bool);
    }
}
