use docopt::Docopt;
use log::{debug, info};
use pixel_mazes::{
    analysis,
    generators::SmallPixelMaze,
    rect::WallMaze,
    renderers::{self, RenderOptionsBuilder},
    units::{CellSidePixels, ColumnsCount, RowsCount, WallThickness},
};
use serde_derive::Deserialize;
use std::{path::Path, process};

const USAGE: &str = "Pixel mazes

Usage:
    pixel_mazes_driver -h | --help
    pixel_mazes_driver [--cols=<n> --rows=<n> --cell-size=<n> --wall-thickness=<n> --seed1=<s> --seed2=<s>] [--image-out=<path>] [--text-out=<path>] [--save-edges=<path>] [--scale=<n>]
    pixel_mazes_driver rect [--cols=<n> --rows=<n> --cell-size=<n> --wall-thickness=<n> --seed1=<s> --seed2=<s>] [--image-out=<path>] [--scale=<n>]

Options:
    -h --help                Show this screen.
    --cols=<n>               Maze width in cells [default: 9].
    --rows=<n>               Maze height in cells [default: 5].
    --cell-size=<n>          Side length in pixels of the open square of each cell [default: 32].
    --wall-thickness=<n>     Thickness in pixels of the walls between and around cells [default: 3].
    --seed1=<s>              First word of the random seed [default: 0].
    --seed2=<s>              Second word of the random seed [default: 1].
    --image-out=<path>       Output file path for an image rendering of a maze. Always PNG format.
    --text-out=<path>        Output file path for a textual rendering of a maze.
    --save-edges=<path>      Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
    --scale=<n>              Image pixels per maze pixel [default: 1].

With no output path the maze is printed to stdout as text. Set RUST_LOG=debug for generation logs.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_rect: bool,
    flag_cols: usize,
    flag_rows: usize,
    flag_cell_size: usize,
    flag_wall_thickness: usize,
    flag_seed1: u64,
    flag_seed2: u64,
    flag_image_out: String,
    flag_text_out: String,
    flag_save_edges: String,
    flag_scale: u32,
}

// Driver errors wrap the library's errors plus command line parsing failures.
mod errors {
    use error_chain::error_chain;
    error_chain! {

        links {
            Maze(::pixel_mazes::errors::Error, ::pixel_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());
    debug!("driver arguments {:?}", args);

    if let Err(ref e) = run(&args) {
        eprintln!("error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("caused by: {}", cause);
        }
        process::exit(1);
    }
}

fn run(args: &MazeArgs) -> Result<()> {
    if args.cmd_rect {
        render_wall_maze(args)
    } else {
        render_pixel_maze(args)
    }
}

fn render_pixel_maze(args: &MazeArgs) -> Result<()> {
    let mut maze = SmallPixelMaze::new(ColumnsCount(args.flag_cols),
                                       RowsCount(args.flag_rows),
                                       CellSidePixels(args.flag_cell_size),
                                       WallThickness(args.flag_wall_thickness))
        .chain_err(|| "Refusing to generate a maze")?;
    maze.generate(args.flag_seed1, args.flag_seed2);

    if !args.flag_save_edges.is_empty() {
        renderers::write_text_to_file(&analysis::edge_list(&maze), Path::new(&args.flag_save_edges))
            .chain_err(|| format!("Failed to write maze graph to text file {}", args.flag_save_edges))?;
        info!("wrote maze graph to {}", args.flag_save_edges);
    }

    if !args.flag_text_out.is_empty() {
        renderers::save_text(maze.grid(), Path::new(&args.flag_text_out))?;
    }

    if !args.flag_image_out.is_empty() {
        let options = RenderOptionsBuilder::new().pixel_scale(args.flag_scale).build();
        renderers::save_png(maze.grid(), &options, Path::new(&args.flag_image_out))?;
    }

    if args.flag_text_out.is_empty() && args.flag_image_out.is_empty() {
        print!("{}", maze);
    }

    Ok(())
}

fn render_wall_maze(args: &MazeArgs) -> Result<()> {
    let mut maze = WallMaze::new(ColumnsCount(args.flag_cols),
                                 RowsCount(args.flag_rows),
                                 CellSidePixels(args.flag_cell_size),
                                 WallThickness(args.flag_wall_thickness))
        .chain_err(|| "Refusing to generate a maze")?;
    let walls = maze.generate(args.flag_seed1, args.flag_seed2);

    if args.flag_image_out.is_empty() {
        // one rectangle per line: min x, min y, max x, max y
        for wall in &walls {
            println!("{} {} {} {}", wall.min_x, wall.min_y, wall.max_x, wall.max_y);
        }
        return Ok(());
    }

    let options = RenderOptionsBuilder::new().pixel_scale(args.flag_scale).build();
    renderers::save_walls_png(&walls, maze.size(), &options, Path::new(&args.flag_image_out))?;
    info!("wrote {} wall rectangles to {}", walls.len(), args.flag_image_out);

    Ok(())
}
