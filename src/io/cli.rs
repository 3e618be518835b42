//! Command-line interface for solving rings over a range of puzzle sizes

use crate::algorithm::solver::RingSolver;
use crate::algorithm::verify::verify_ring;
use crate::io::configuration::{
    DEFAULT_HEX_SIZE, DEFAULT_MAX_TILES, DEFAULT_MIN_TILES, OUTPUT_EXTENSION, OUTPUT_PREFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_board_as_png;
use crate::io::loader::load_tiles;
use crate::io::progress::ProgressManager;
use crate::puzzle::colour::Colour;
use crate::puzzle::tile::Tile;
use clap::{ArgAction, Parser};
use log::{LevelFilter, info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "hexring")]
#[command(
    author,
    version,
    about = "Solve closed-loop hexagonal tile puzzles for a range of sizes"
)]
/// Command-line arguments for the ring solver
pub struct Cli {
    /// Tile-set file, one `id,colour,edges` record per line
    #[arg(value_name = "TILES")]
    pub tiles: PathBuf,

    /// Smallest number of tiles to build a ring from
    #[arg(short, long, default_value_t = DEFAULT_MIN_TILES)]
    pub from: usize,

    /// Largest number of tiles to build a ring from
    #[arg(short, long, default_value_t = DEFAULT_MAX_TILES)]
    pub to: usize,

    /// Loop colour for every size (defaults to the home colour of the last tile used)
    #[arg(short, long, value_parser = parse_colour)]
    pub colour: Option<Colour>,

    /// Directory rendered rings are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Hexagon size in pixels for rendered rings
    #[arg(short = 'x', long, default_value_t = DEFAULT_HEX_SIZE)]
    pub hex_size: u32,

    /// Skip writing PNG images
    #[arg(short, long)]
    pub no_render: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_colour(value: &str) -> std::result::Result<Colour, String> {
    value.parse().map_err(|e: crate::RingError| e.to_string())
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if solved rings should be written as images
    pub const fn should_render(&self) -> bool {
        !self.no_render
    }

    /// Log level selected by the verbosity flag
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Outcome of searching one ring size
#[derive(Debug, Clone)]
pub struct SizeReport {
    /// Number of tiles in the puzzle
    pub size: usize,
    /// Colour the ring had to trace
    pub colour: Colour,
    /// Whether a ring was found
    pub solved: bool,
    /// Nodes visited by the search
    pub nodes_visited: u64,
    /// Wall-clock search time
    pub elapsed: Duration,
    /// Rendered image, when one was written
    pub image_path: Option<PathBuf>,
}

/// Runs the solver over every requested ring size
pub struct RingRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl RingRunner {
    /// Create a runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load the tile set and solve each requested size in turn
    ///
    /// Sizes without a ring are reported and skipped rather than treated as
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile set cannot be loaded
    /// - The size range is empty or exceeds the number of tiles
    /// - A solved ring cannot be written to disk
    pub fn run(&mut self) -> Result<Vec<SizeReport>> {
        let tiles = load_tiles(&self.cli.tiles)?;
        self.validate_range(tiles.len())?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.to - self.cli.from + 1);
        }

        let mut reports = Vec::new();
        for size in self.cli.from..=self.cli.to {
            let Some(subset) = tiles.get(..size) else {
                break;
            };
            let report = self.solve_size(subset)?;
            Self::announce(&report);
            reports.push(report);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn validate_range(&self, tile_count: usize) -> Result<()> {
        if self.cli.from == 0 {
            return Err(invalid_parameter(
                "from",
                &self.cli.from,
                &"a ring needs at least one tile",
            ));
        }
        if self.cli.from > self.cli.to {
            return Err(invalid_parameter(
                "from",
                &self.cli.from,
                &format!("must not exceed --to ({})", self.cli.to),
            ));
        }
        if self.cli.to > tile_count {
            return Err(invalid_parameter(
                "to",
                &self.cli.to,
                &format!("tile set only holds {tile_count} tiles"),
            ));
        }
        Ok(())
    }

    fn solve_size(&mut self, tiles: &[Tile]) -> Result<SizeReport> {
        let size = tiles.len();
        let colour = match (self.cli.colour, tiles.last()) {
            (Some(colour), _) => colour,
            (None, Some(last)) => last.home_colour(),
            (None, None) => {
                return Err(invalid_parameter(
                    "from",
                    &size,
                    &"a ring needs at least one tile",
                ));
            }
        };

        if let Some(ref pm) = self.progress_manager {
            pm.start_size(size);
        }

        let mut solver = RingSolver::new(tiles, colour);
        let board = solver.solve();
        let stats = solver.stats();

        let mut image_path = None;
        if let Some(ref board) = board {
            if !verify_ring(board, colour) {
                warn!("Ring of {size} tiles failed verification");
            }
            if self.cli.should_render() {
                let path = self.output_path(size);
                export_board_as_png(board, self.cli.hex_size, &path)?;
                image_path = Some(path);
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_size(size, board.is_some(), stats.elapsed);
        }

        Ok(SizeReport {
            size,
            colour,
            solved: board.is_some(),
            nodes_visited: stats.nodes_visited,
            elapsed: stats.elapsed,
            image_path,
        })
    }

    /// Path a ring of `size` tiles is rendered to
    pub fn output_path(&self, size: usize) -> PathBuf {
        Self::output_path_in(&self.cli.output_dir, size)
    }

    fn output_path_in(dir: &Path, size: usize) -> PathBuf {
        dir.join(format!("{OUTPUT_PREFIX}{size}.{OUTPUT_EXTENSION}"))
    }

    // Allow print for the per-size result line the tool exists to produce
    #[allow(clippy::print_stdout)]
    fn announce(report: &SizeReport) {
        if report.solved {
            info!(
                "Solved {} ring of {} tiles after {} nodes",
                report.colour, report.size, report.nodes_visited
            );
            println!(
                "Solved loop {} in {} seconds",
                report.size,
                report.elapsed.as_secs_f64()
            );
        } else {
            warn!(
                "No {} ring exists for the first {} tiles ({} nodes searched)",
                report.colour, report.size, report.nodes_visited
            );
        }
    }
}
