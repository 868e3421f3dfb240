//! Newtypes for the logical and pixel dimensions of a maze, so a cell count cannot be passed where
//! a pixel length is expected.

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);

/// Side length in pixels of the open square carved for each cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellSidePixels(pub usize);
/// Pixel width of the walls between and around cells. Zero is allowed.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct WallThickness(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);
