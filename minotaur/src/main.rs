//! Minotaur — generate, inspect and solve grid mazes from the command line.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use minotaur_lib::mazegen::MazeGen;
use minotaur_lib::render::render;
use warren_core::{Coord, Maze};
use warren_paths::PathFinder;

#[derive(Parser)]
#[command(name = "minotaur", about = "Generate, inspect and solve grid mazes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a random maze and write it to a file
    Generate {
        rows: i32,
        cols: i32,
        /// Fraction of cells to fill with obstacles
        #[arg(long)]
        obstacles: Option<f64>,
        /// Seed for reproducible generation
        #[arg(long)]
        seed: Option<u64>,
        /// Output maze file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Solve a maze between two cells and print the annotated grid
    Solve {
        /// Maze file to solve
        map: PathBuf,
        /// Origin cell as `row,col`
        #[arg(long, value_parser = parse_coord)]
        origin: Coord,
        /// Destination cell as `row,col`
        #[arg(long, value_parser = parse_coord)]
        destination: Coord,
    },
    /// Print a maze file
    Show {
        /// Maze file to display
        map: PathBuf,
    },
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row `{row}`"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column `{col}`"))?;
    Ok(Coord::new(row, col))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = fs::File::create("minotaur.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    match cli.command {
        Command::Generate {
            rows,
            cols,
            obstacles,
            seed,
            output,
        } => generate(rows, cols, obstacles, seed, &output),
        Command::Solve {
            map,
            origin,
            destination,
        } => solve(&map, origin, destination),
        Command::Show { map } => show(&map),
    }
}

fn load(path: &Path) -> Result<Maze, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let maze = Maze::from_text(&text)?;
    info!(
        "loaded {}x{} maze from {}",
        maze.rows(),
        maze.cols(),
        path.display()
    );
    Ok(maze)
}

fn generate(
    rows: i32,
    cols: i32,
    obstacles: Option<f64>,
    seed: Option<u64>,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    let maze = match seed {
        Some(seed) => MazeGen::new(StdRng::seed_from_u64(seed)).generate(rows, cols, obstacles)?,
        None => MazeGen::new(rand::rng()).generate(rows, cols, obstacles)?,
    };
    fs::write(output, maze.to_text()?)?;
    info!("generated {rows}x{cols} maze into {}", output.display());
    println!("{}", render(&maze));
    Ok(())
}

fn solve(map: &Path, origin: Coord, destination: Coord) -> Result<(), Box<dyn Error>> {
    let mut maze = load(map)?;
    if !maze.set_origin(origin) {
        warn!("origin {origin} rejected");
        return Err(format!("origin {origin} is not a free cell of the maze").into());
    }
    if !maze.set_destination(destination) {
        warn!("destination {destination} rejected");
        return Err(format!("destination {destination} is not a free cell of the maze").into());
    }

    let report = PathFinder::new().compute_path(&mut maze);
    println!("{}", render(&maze));
    if report.is_found() {
        println!(
            "path length {:.3}, {} cells on the route",
            report.length, report.depth
        );
    } else {
        println!("no path between {origin} and {destination}");
    }
    println!(
        "open nodes at end: {}, closed nodes at end: {}",
        report.frontier_size, report.visited_size
    );
    Ok(())
}

fn show(map: &Path) -> Result<(), Box<dyn Error>> {
    let maze = load(map)?;
    println!("{}", render(&maze));
    Ok(())
}
