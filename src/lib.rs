//! **pixel_mazes** generates seeded perfect mazes carved straight into a pixel occupancy grid, and
//! renders them to images and text.

// error_chain! expands deeply
#![recursion_limit = "1024"]

pub mod analysis;
pub mod cells;
pub mod errors;
pub mod generators;
pub mod occupancy;
pub mod rect;
pub mod renderers;
pub mod units;
