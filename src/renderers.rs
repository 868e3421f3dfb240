//! Rendering generated mazes to images and text files.
//!
//! The generators only produce occupancy data; everything to do with colours and file formats
//! lives here.

use image::{ImageFormat, Rgba, RgbaImage};
use log::info;
use std::convert::TryFrom;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::errors::*;
use crate::occupancy::{Occupancy, PixelGrid};
use crate::rect::Rect;
use crate::units::{Height, Width};

pub const DEFAULT_WALL_COLOUR: Rgba<u8> = Rgba([0, 0, 0xff, 0xff]);
pub const DEFAULT_PATH_COLOUR: Rgba<u8> = Rgba([30, 30, 30, 0xff]);

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderOptions {
    path_colour: Rgba<u8>,
    wall_colour: Rgba<u8>,
    pixel_scale: u32,
}

impl RenderOptions {
    #[inline]
    pub fn path_colour(&self) -> Rgba<u8> {
        self.path_colour
    }

    #[inline]
    pub fn wall_colour(&self) -> Rgba<u8> {
        self.wall_colour
    }

    #[inline]
    pub fn pixel_scale(&self) -> u32 {
        self.pixel_scale
    }
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            path_colour: DEFAULT_PATH_COLOUR,
            wall_colour: DEFAULT_WALL_COLOUR,
            pixel_scale: 1,
        }
    }
}

#[derive(Debug, Default)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn new() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    pub fn path_colour(mut self, colour: Rgba<u8>) -> RenderOptionsBuilder {
        self.options.path_colour = colour;
        self
    }

    pub fn wall_colour(mut self, colour: Rgba<u8>) -> RenderOptionsBuilder {
        self.options.wall_colour = colour;
        self
    }

    /// Output pixels per grid pixel along each axis. Zero is treated as one.
    pub fn pixel_scale(mut self, scale: u32) -> RenderOptionsBuilder {
        self.options.pixel_scale = scale.max(1);
        self
    }

    pub fn build(self) -> RenderOptions {
        self.options
    }
}

/// Image side length for `pixels` grid pixels at the given scale.
fn image_length(pixels: usize, scale: u32, name: &'static str) -> Result<u32> {
    u32::try_from(pixels)
        .ok()
        .and_then(|length| length.checked_mul(scale))
        .ok_or_else(|| ErrorKind::InvalidDimension(name, pixels).into())
}

/// Paint the occupancy grid row-major: path pixels in the path colour, every other value in the
/// wall colour.
pub fn render_image<T: Occupancy>(grid: &PixelGrid<T>, options: &RenderOptions) -> Result<RgbaImage> {
    let scale = options.pixel_scale;
    let width = image_length(grid.width().0, scale, "image width")?;
    let height = image_length(grid.height().0, scale, "image height")?;

    Ok(RgbaImage::from_fn(width, height, |x, y| {
        if grid.is_path((x / scale) as usize, (y / scale) as usize) {
            options.path_colour
        } else {
            options.wall_colour
        }
    }))
}

/// Write an image as PNG whatever the file extension says.
fn save_rgba_png(img: &RgbaImage, file_path: &Path) -> Result<()> {
    img.save_with_format(file_path, ImageFormat::Png)
        .chain_err(|| format!("Failed to write maze image {}", file_path.display()))?;
    info!("wrote {}x{} maze image to {}", img.width(), img.height(), file_path.display());
    Ok(())
}

/// Render the grid and write it out as a PNG file.
pub fn save_png<T: Occupancy>(grid: &PixelGrid<T>, options: &RenderOptions, file_path: &Path)
                              -> Result<()> {
    let img = render_image(grid, options)?;
    save_rgba_png(&img, file_path)
}

/// Write the `#`/space text view of the grid to a file.
pub fn save_text<T: Occupancy>(grid: &PixelGrid<T>, file_path: &Path) -> Result<()> {
    write_text_to_file(&grid.to_string(), file_path)
        .chain_err(|| format!("Failed to write maze to text file {}", file_path.display()))?;
    info!("wrote maze text to {}", file_path.display());
    Ok(())
}

pub fn write_text_to_file(data: &str, file_path: &Path) -> ::std::io::Result<()> {
    let mut f = File::create(file_path)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

/// Fill one rectangle of the image, clipped to the image bounds.
pub fn fill_rectangle(img: &mut RgbaImage, rect: Rect, colour: Rgba<u8>) {
    let bounds = Rect::with_size(Width(img.width() as usize), Height(img.height() as usize));
    let clipped = rect.intersect(&bounds);
    if clipped.is_empty() {
        return;
    }

    for y in clipped.min_y..clipped.max_y {
        for x in clipped.min_x..clipped.max_x {
            img.put_pixel(x as u32, y as u32, colour);
        }
    }
}

/// Draw every wall rectangle onto the image.
pub fn draw_walls(walls: &[Rect], img: &mut RgbaImage, colour: Rgba<u8>) {
    for wall in walls {
        fill_rectangle(img, *wall, colour);
    }
}

/// Paint wall rectangles over a path coloured background of the given size.
pub fn render_walls(walls: &[Rect], size: (Width, Height), options: &RenderOptions) -> Result<RgbaImage> {
    let scale = options.pixel_scale;
    let (Width(w), Height(h)) = size;
    let width = image_length(w, scale, "image width")?;
    let height = image_length(h, scale, "image height")?;
    let mut img = RgbaImage::from_pixel(width, height, options.path_colour);

    let s = scale as usize;
    let scaled = walls.iter()
        .map(|w| Rect::new(w.min_x * s, w.min_y * s, w.max_x * s, w.max_y * s))
        .collect::<Vec<_>>();
    draw_walls(&scaled, &mut img, options.wall_colour);
    Ok(img)
}

/// Render wall rectangles and write them out as a PNG file.
pub fn save_walls_png(walls: &[Rect],
                      size: (Width, Height),
                      options: &RenderOptions,
                      file_path: &Path)
                      -> Result<()> {
    let img = render_walls(walls, size, options)?;
    save_rgba_png(&img, file_path)
}
