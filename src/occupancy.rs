use num::PrimInt;
use std::cmp;
use std::fmt;
use std::slice;

use crate::units::{Height, Width};

/// Storage type for a pixel of the occupancy grid.
///
/// Any primitive integer works, so the caller decides how much memory a large maze costs.
/// Only two values are ever written: zero for an open path pixel and one for a wall pixel.
pub trait Occupancy: PrimInt + fmt::Debug {
    #[inline(always)]
    fn path() -> Self {
        Self::zero()
    }

    #[inline(always)]
    fn wall() -> Self {
        Self::one()
    }
}

impl<T: PrimInt + fmt::Debug> Occupancy for T {}

/// A `width` * `height` grid of pixels stored row-major in one contiguous buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelGrid<T: Occupancy> {
    pixels: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Occupancy> fmt::Debug for PixelGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PixelGrid :: width: {}, height: {}, path pixels: {}",
               self.width, self.height, self.count(T::path()))
    }
}

/// Text view of the grid: `#` for a wall pixel, a space for a path pixel, one line per pixel row.
impl<T: Occupancy> fmt::Display for PixelGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.iter_rows() {
            let line: String = row.iter()
                .map(|&pixel| if pixel == T::path() { ' ' } else { '#' })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl<T: Occupancy> PixelGrid<T> {
    pub fn new(width: Width, height: Height, fill: T) -> PixelGrid<T> {
        PixelGrid {
            pixels: vec![fill; width.0 * height.0],
            width: width.0,
            height: height.0,
        }
    }

    #[inline]
    pub fn width(&self) -> Width {
        Width(self.width)
    }

    #[inline]
    pub fn height(&self) -> Height {
        Height(self.height)
    }

    /// The pixel value at column `x` and row `y`, or None outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Is the pixel inside the grid and open? Pixels outside the grid are not path.
    #[inline]
    pub fn is_path(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Some(T::path())
    }

    /// Overwrite every pixel, keeping the allocation.
    pub fn fill(&mut self, value: T) {
        for pixel in self.pixels.iter_mut() {
            *pixel = value;
        }
    }

    /// Write one pixel. Writes outside the grid are skipped; returns whether the write happened.
    #[inline]
    pub fn set_clipped(&mut self, x: usize, y: usize, value: T) -> bool {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = value;
            true
        } else {
            false
        }
    }

    /// Fill the `w` * `h` block with its top left corner at (`x`, `y`), clipped to the grid.
    pub fn fill_rect_clipped(&mut self, x: usize, y: usize, w: usize, h: usize, value: T) {
        let x_end = cmp::min(x.saturating_add(w), self.width);
        let y_end = cmp::min(y.saturating_add(h), self.height);
        if x >= x_end || y >= y_end {
            return;
        }

        for row in y..y_end {
            let row_start = row * self.width;
            for pixel in &mut self.pixels[row_start + x..row_start + x_end] {
                *pixel = value;
            }
        }
    }

    /// Rows of pixels from top to bottom.
    pub fn iter_rows(&self) -> slice::Chunks<T> {
        // chunks(0) panics, and a zero width grid has no pixels anyway
        self.pixels.chunks(cmp::max(self.width, 1))
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.pixels
    }

    pub fn count(&self, value: T) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel == value).count()
    }
}
