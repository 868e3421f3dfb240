use bit_set::BitSet;
use error_chain::bail;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand_pcg::Pcg64;
use std::fmt;

use crate::cells::{offset_coordinate, CellCoordinate, CompassPrimary};
use crate::errors::*;
use crate::occupancy::{Occupancy, PixelGrid};
use crate::units::{CellSidePixels, ColumnsCount, Height, RowsCount, WallThickness, Width};

/// Fixed PCG stream selector. Only the seed pair varies between mazes.
const PCG_STREAM: u128 = 0xa02b_dbf7_bb3c_0a7a_c28f_a16a_64ab_f96;

/// Builds the random source for one maze generation run from a two word seed.
pub(crate) fn seeded_rng(seed1: u64, seed2: u64) -> Pcg64 {
    let state = (u128::from(seed1) << 64) | u128::from(seed2);
    Pcg64::new(state, PCG_STREAM)
}

/// Pixel width and height of a maze with cells `cell_side` pixels wide separated and surrounded
/// by walls `wall` pixels thick. None on overflow.
fn pixel_length(cells: usize, cell_side: usize, wall: usize) -> Option<usize> {
    let open = cells.checked_mul(cell_side)?;
    let walls = cells.checked_add(1)?.checked_mul(wall)?;
    open.checked_add(walls)
}

pub type SmallPixelMaze = PixelMaze<u8>;
pub type MediumPixelMaze = PixelMaze<u16>;

/// Recursive backtracker maze generator that carves straight into a pixel occupancy grid.
///
/// The grid is `rows * cell_side + (rows + 1) * wall` pixels high and
/// `columns * cell_side + (columns + 1) * wall` pixels wide. Each logical cell is an open square of
/// `cell_side` pixels and every passage between two cells is an open strip of wall pixels.
///
/// The grid, visited set and search stack are allocated once by `new` and reused by every call to
/// `generate`, so one instance can produce any number of mazes with different seeds.
pub struct PixelMaze<T: Occupancy> {
    grid: PixelGrid<T>,
    visited: BitSet,
    stack: Vec<DfsFrame>,
    rng: Pcg64,
    columns: ColumnsCount,
    rows: RowsCount,
    cell_side: CellSidePixels,
    wall: WallThickness,
}

/// One suspended cell of the depth first search: the shuffled order its neighbours are tried in and
/// how many of them have been tried so far.
#[derive(Debug, Copy, Clone)]
struct DfsFrame {
    cell: CellCoordinate,
    directions: [CompassPrimary; 4],
    next: usize,
}

impl DfsFrame {
    fn next_direction(&mut self) -> Option<CompassPrimary> {
        let dir = self.directions.get(self.next).cloned();
        if dir.is_some() {
            self.next += 1;
        }
        dir
    }
}

impl<T: Occupancy> fmt::Debug for PixelMaze<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PixelMaze :: columns: {:?}, rows: {:?}, cell side: {:?}, wall: {:?}, grid: {:?}",
               self.columns, self.rows, self.cell_side, self.wall, self.grid)
    }
}

impl<T: Occupancy> fmt::Display for PixelMaze<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

impl<T: Occupancy> PixelMaze<T> {
    /// Allocate a maze of `columns` * `rows` cells. Nothing is carved until `generate` is called;
    /// until then every pixel is wall.
    ///
    /// Fails with `ErrorKind::InvalidDimension` if `columns`, `rows` or `cell_side` is zero, or if
    /// the pixel grid would be too large to address.
    pub fn new(columns: ColumnsCount,
               rows: RowsCount,
               cell_side: CellSidePixels,
               wall: WallThickness)
               -> Result<PixelMaze<T>> {

        if columns.0 == 0 {
            bail!(ErrorKind::InvalidDimension("columns", columns.0));
        }
        if rows.0 == 0 {
            bail!(ErrorKind::InvalidDimension("rows", rows.0));
        }
        if cell_side.0 == 0 {
            bail!(ErrorKind::InvalidDimension("cell side pixels", cell_side.0));
        }

        let width = pixel_length(columns.0, cell_side.0, wall.0)
            .ok_or(ErrorKind::InvalidDimension("columns", columns.0))?;
        let height = pixel_length(rows.0, cell_side.0, wall.0)
            .ok_or(ErrorKind::InvalidDimension("rows", rows.0))?;
        if width.checked_mul(height).is_none() {
            bail!(ErrorKind::InvalidDimension("pixel area", width.saturating_mul(height)));
        }
        // columns <= width and rows <= height, so this cannot overflow once the area fits
        let cells_count = columns.0 * rows.0;

        debug!("allocating {}x{} cell maze as {}x{} pixels", columns.0, rows.0, width, height);

        Ok(PixelMaze {
            grid: PixelGrid::new(Width(width), Height(height), T::wall()),
            visited: BitSet::with_capacity(cells_count),
            stack: Vec::with_capacity(cells_count),
            rng: seeded_rng(0, 0),
            columns,
            rows,
            cell_side,
            wall,
        })
    }

    /// Carve a new perfect maze, replacing whatever the grid held before.
    ///
    /// The same seed pair always produces the same grid for the same dimensions. The search starts
    /// at cell (0, 0); every cell shuffles the four directions and descends into each unvisited
    /// neighbour in that order, carving the wall between them first.
    pub fn generate(&mut self, seed1: u64, seed2: u64) {
        trace!("reseeding maze random source with ({}, {})", seed1, seed2);
        self.rng = seeded_rng(seed1, seed2);

        self.grid.fill(T::wall());
        self.visited.clear();
        self.stack.clear();

        let mut carved_cells = 1;
        self.visit(CellCoordinate::new(0, 0));

        loop {
            let next_step = match self.stack.last_mut() {
                None => break,
                Some(frame) => frame.next_direction().map(|dir| (frame.cell, dir)),
            };

            match next_step {
                None => {
                    // every direction tried: backtrack
                    let _ = self.stack.pop();
                }
                Some((cell, dir)) => {
                    if let Some(neighbour) = offset_coordinate(cell, dir, self.columns, self.rows) {
                        if !self.is_visited(neighbour) {
                            self.carve_passage(cell, dir);
                            self.visit(neighbour);
                            carved_cells += 1;
                        }
                    }
                }
            }
        }

        debug!("generated {}x{} cell maze from seeds ({}, {}), {} cells carved",
               self.columns.0, self.rows.0, seed1, seed2, carved_cells);
    }

    /// Pixel width and height of the grid, derived from the dimensions alone.
    pub fn size(&self) -> (Width, Height) {
        // Both lengths were checked for overflow in `new`.
        (Width(self.columns.0 * self.cell_side.0 + (self.columns.0 + 1) * self.wall.0),
         Height(self.rows.0 * self.cell_side.0 + (self.rows.0 + 1) * self.wall.0))
    }

    #[inline]
    pub fn grid(&self) -> &PixelGrid<T> {
        &self.grid
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn cell_side_pixels(&self) -> CellSidePixels {
        self.cell_side
    }

    #[inline]
    pub fn wall_thickness(&self) -> WallThickness {
        self.wall
    }

    /// Pixel (x, y) of the top left corner of a cell's open square.
    #[inline]
    pub fn cell_origin(&self, cell: CellCoordinate) -> (usize, usize) {
        let stride = self.cell_side.0 + self.wall.0;
        (self.wall.0 + cell.x * stride, self.wall.0 + cell.y * stride)
    }

    #[inline]
    fn is_visited(&self, cell: CellCoordinate) -> bool {
        self.visited.contains(cell.row_major_index(self.columns))
    }

    /// Mark the cell visited, open its square and queue its neighbours in a random order.
    fn visit(&mut self, cell: CellCoordinate) {
        let _ = self.visited.insert(cell.row_major_index(self.columns));

        let (x, y) = self.cell_origin(cell);
        let side = self.cell_side.0;
        self.grid.fill_rect_clipped(x, y, side, side, T::path());

        let mut directions = CompassPrimary::ALL;
        directions.shuffle(&mut self.rng);
        self.stack.push(DfsFrame {
            cell,
            directions,
            next: 0,
        });
    }

    /// Open the wall strip on the `dir` side of the cell's square.
    fn carve_passage(&mut self, cell: CellCoordinate, dir: CompassPrimary) {
        let (x, y, w, h) = self.passage_strip(cell, dir);
        self.grid.fill_rect_clipped(x, y, w, h, T::path());
    }

    /// Pixel block (x, y, width, height) of the wall strip on the `dir` side of a cell's square.
    /// Parts of the block may fall outside the grid when the cell is on the maze edge.
    pub(crate) fn passage_strip(&self, cell: CellCoordinate, dir: CompassPrimary)
                                -> (usize, usize, usize, usize) {
        let (x, y) = self.cell_origin(cell);
        let side = self.cell_side.0;
        let wall = self.wall.0;

        // the origin is always at least one wall thickness from the top and left edges
        match dir {
            CompassPrimary::North => (x, y - wall, side, wall),
            CompassPrimary::West => (x - wall, y, wall, side),
            CompassPrimary::South => (x, y + side, side, wall),
            CompassPrimary::East => (x + side, y, wall, side),
        }
    }
}
