use crate::units::{ColumnsCount, RowsCount};

/// Position of a logical maze cell. `x` is the column and `y` the row, both counted from the top
/// left cell at `(0, 0)`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct CellCoordinate {
    pub x: usize,
    pub y: usize,
}

impl CellCoordinate {
    pub fn new(x: usize, y: usize) -> CellCoordinate {
        CellCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, columns: ColumnsCount) -> CellCoordinate {
        CellCoordinate::new(index % columns.0, index / columns.0)
    }

    #[inline]
    pub fn row_major_index(self, columns: ColumnsCount) -> usize {
        self.y * columns.0 + self.x
    }

    /// Is the coordinate inside a `columns` * `rows` grid of cells?
    #[inline]
    pub fn is_within(self, columns: ColumnsCount, rows: RowsCount) -> bool {
        self.x < columns.0 && self.y < rows.0
    }
}

impl From<(usize, usize)> for CellCoordinate {
    fn from(x_y_pair: (usize, usize)) -> CellCoordinate {
        CellCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    West,
    South,
    East,
}

impl CompassPrimary {
    /// All four directions in the order a maze generator shuffles them from.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::West,
                                          CompassPrimary::South,
                                          CompassPrimary::East];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::West => CompassPrimary::East,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::East => CompassPrimary::West,
        }
    }

    /// Index of the direction into a per-cell `[_; 4]` array, in `ALL` order.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            CompassPrimary::North => 0,
            CompassPrimary::West => 1,
            CompassPrimary::South => 2,
            CompassPrimary::East => 3,
        }
    }
}

/// Creates a new coordinate offset 1 cell away in the given direction.
/// Returns None if that cell would fall outside the `columns` * `rows` grid.
pub fn offset_coordinate(coord: CellCoordinate,
                         dir: CompassPrimary,
                         columns: ColumnsCount,
                         rows: RowsCount)
                         -> Option<CellCoordinate> {

    let (x, y) = (coord.x, coord.y);
    let offset = match dir {
        CompassPrimary::North => {
            if y > 0 {
                Some(CellCoordinate::new(x, y - 1))
            } else {
                None
            }
        }
        CompassPrimary::West => {
            if x > 0 {
                Some(CellCoordinate::new(x - 1, y))
            } else {
                None
            }
        }
        CompassPrimary::South => Some(CellCoordinate::new(x, y + 1)),
        CompassPrimary::East => Some(CellCoordinate::new(x + 1, y)),
    };

    offset.filter(|c| c.is_within(columns, rows))
}

#[cfg(test)]
mod tests {

    use itertools::Itertools;

    use super::*;

    #[test]
    fn neighbour_cells() {
        let (cols, rows) = (ColumnsCount(10), RowsCount(10));
        let gc = |x, y| CellCoordinate::new(x, y);

        let check_expected_neighbours = |coord, expected_neighbours: &[CellCoordinate]| {
            let neighbours: Vec<CellCoordinate> = CompassPrimary::ALL.iter()
                .filter_map(|dir| offset_coordinate(coord, *dir, cols, rows))
                .sorted()
                .collect();
            let expected: Vec<CellCoordinate> = expected_neighbours.iter().cloned().sorted().collect();
            assert_eq!(neighbours, expected);
        };

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 9), &[gc(9, 8), gc(8, 9)]);

        // side element examples
        check_expected_neighbours(gc(1, 0), &[gc(0, 0), gc(1, 1), gc(2, 0)]);
        check_expected_neighbours(gc(9, 8), &[gc(9, 7), gc(9, 9), gc(8, 8)]);

        // Some place with 4 neighbours inside the grid
        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    fn neighbour_at_dir() {
        let (cols, rows) = (ColumnsCount(2), RowsCount(2));
        let gc = |x, y| CellCoordinate::new(x, y);
        let check_neighbour = |coord, dir: CompassPrimary, expected| {
            assert_eq!(offset_coordinate(coord, dir, cols, rows), expected);
        };
        check_neighbour(gc(0, 0), CompassPrimary::North, None);
        check_neighbour(gc(0, 0), CompassPrimary::South, Some(gc(0, 1)));
        check_neighbour(gc(0, 0), CompassPrimary::East, Some(gc(1, 0)));
        check_neighbour(gc(0, 0), CompassPrimary::West, None);

        check_neighbour(gc(1, 1), CompassPrimary::North, Some(gc(1, 0)));
        check_neighbour(gc(1, 1), CompassPrimary::South, None);
        check_neighbour(gc(1, 1), CompassPrimary::East, None);
        check_neighbour(gc(1, 1), CompassPrimary::West, Some(gc(0, 1)));
    }

    #[test]
    fn row_major_index_round_trip() {
        let cols = ColumnsCount(3);
        let indices = (0..9)
            .map(|i| CellCoordinate::from_row_major_index(i, cols))
            .map(|coord| coord.row_major_index(cols))
            .collect::<Vec<_>>();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
        assert_eq!(CellCoordinate::from_row_major_index(4, cols), CellCoordinate::new(1, 1));
    }

    #[test]
    fn opposites_and_indices() {
        for dir in CompassPrimary::ALL.iter() {
            assert_eq!(dir.opposite().opposite(), *dir);
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(CompassPrimary::ALL[dir.index()], *dir);
        }
    }
}
