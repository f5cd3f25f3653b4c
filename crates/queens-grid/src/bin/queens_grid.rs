use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use queens_grid::io::{BoardFile, PuzzleReport, SolveConfig};
use queens_grid::render::{render_solution, RenderParams};
use queens_grid::{
    load_rgb_image, parse_grid_size, solve_board, solve_image, CropRect, NormalizeParams,
    PuzzleError, PuzzleOutcome, PuzzleParams,
};

#[cfg(not(feature = "tracing"))]
use log::{error, info};
#[cfg(feature = "tracing")]
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "queens-grid",
    version,
    about = "Solve colored queens puzzles from cropped screenshots"
)]
struct Cli {
    /// Log level for stderr output (off, error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample a puzzle image and solve it.
    Image {
        /// Cropped picture of the puzzle grid.
        path: PathBuf,
        /// Number of rows (and columns, and colors) in the grid.
        #[arg(short = 'n', long)]
        grid_size: String,
        /// Pixel rectangle `x,y,width,height` to cut out before sampling.
        #[arg(long)]
        crop: Option<CropRect>,
        /// Largest per-channel difference at which two colors are merged.
        #[arg(long, default_value_t = NormalizeParams::default().tolerance)]
        tolerance: u8,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Solve a board stored as JSON rows of `#rrggbb` colors.
    Board {
        path: PathBuf,
        #[arg(long, default_value_t = NormalizeParams::default().tolerance)]
        tolerance: u8,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Run an image solve described by a JSON config.
    Config { path: PathBuf },
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Write a JSON report here.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Draw the solved grid into this image file.
    #[arg(long)]
    render: Option<PathBuf>,
    /// Cell side in pixels for `--render`.
    #[arg(long, default_value_t = RenderParams::default().cell_px)]
    cell_px: u32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    #[cfg(not(feature = "tracing"))]
    if let Err(err) = queens_grid::core::init_with_level(cli.log_level) {
        eprintln!("failed to install logger: {err}");
    }
    #[cfg(feature = "tracing")]
    queens_grid::core::init_tracing(false);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info"))]
fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let (source, result, output) = match command {
        Command::Image {
            path,
            grid_size,
            crop,
            tolerance,
            output,
        } => {
            let params = PuzzleParams {
                normalize: NormalizeParams { tolerance },
                crop,
            };
            let result = solve_image_path(&path, &grid_size, &params);
            (path.display().to_string(), result, output)
        }
        Command::Board {
            path,
            tolerance,
            output,
        } => {
            let loaded = BoardFile::load_json(&path).and_then(|file| Ok(file.to_board()?));
            let board = match loaded {
                Ok(board) => board,
                Err(err) => {
                    if let Some(report_path) = &output.report {
                        let mut report = PuzzleReport::new(path.display().to_string());
                        report.set_input_error(&err);
                        report.write_json(report_path)?;
                    }
                    return Err(err.into());
                }
            };
            let grid_size = board.size();
            let result = solve_board(board, grid_size, &NormalizeParams { tolerance });
            (path.display().to_string(), result, output)
        }
        Command::Config { path } => {
            let cfg = SolveConfig::load_json(&path)?;
            info!("loaded config {}", path.display());
            let result = load_rgb_image(&cfg.image_path)
                .and_then(|img| solve_image(&img, cfg.grid_size, &cfg.build_params()));
            let output = OutputArgs {
                report: Some(cfg.report_path()),
                render: cfg.render_path.as_ref().map(PathBuf::from),
                cell_px: cfg.cell_px,
            };
            (cfg.image_path.clone(), result, output)
        }
    };

    finish(source, result, &output)
}

/// Grid size is validated before the image is opened.
fn solve_image_path(
    path: &Path,
    grid_size: &str,
    params: &PuzzleParams,
) -> Result<PuzzleOutcome, PuzzleError> {
    let grid_size = parse_grid_size(grid_size)?;
    let img = load_rgb_image(path)?;
    solve_image(&img, grid_size, params)
}

fn finish(
    source: String,
    result: Result<PuzzleOutcome, PuzzleError>,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut report = PuzzleReport::new(source);
    match &result {
        Ok(outcome) => report.set_outcome(outcome),
        Err(err) => report.set_error(err),
    }
    if let Some(path) = &output.report {
        report.write_json(path)?;
        info!("report written to {}", path.display());
    }

    let outcome = result?;
    if let Some(path) = &output.render {
        let params = RenderParams {
            cell_px: output.cell_px,
            ..RenderParams::default()
        };
        render_solution(&outcome.board, &outcome.solution, &params)?.save(path)?;
        info!("rendered solution to {}", path.display());
    }

    for p in &outcome.solution.placements {
        println!("{} {}", p.row, p.col);
    }
    Ok(())
}
