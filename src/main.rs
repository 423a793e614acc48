//! CV Canvas CLI
//!
//! Runs the snapping engine over a scene exported from the canvas, for
//! debugging host integrations.
//!
//! Usage:
//!   cv-canvas [OPTIONS] <COMMAND>
//!
//! Commands:
//!   guides    Alignment guides for one element
//!   snap      Magnetic and grid snapped position for one element
//!   overflow  Elements leaving the page, with badge anchors
//!
//! Options:
//!   -c, --config <FILE>  Canvas config file (TOML format)
//!   -v, --verbose        Log engine decisions to stderr
//!   -h, --help           Print help

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cv_canvas::canvas::{
    compute_guides, dedup_guides, magnetic_snap, overflow_badges, Scene, SceneError,
};
use cv_canvas::{CanvasConfig, Point, Rect, Size};

#[derive(Parser)]
#[command(name = "cv-canvas")]
#[command(about = "Alignment guides, snapping and overflow checks for CV page layouts")]
struct Cli {
    /// Canvas config file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Alignment guides for one element of the scene
    Guides {
        /// Scene file (JSON)
        scene: PathBuf,

        /// Id of the element being dragged
        #[arg(short, long)]
        moving: String,

        /// Override the configured guide threshold
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Collapse guides at the same coordinate
        #[arg(long)]
        dedup: bool,
    },

    /// Magnetic and grid snapped geometry for one element
    Snap {
        /// Scene file (JSON)
        scene: PathBuf,

        /// Id of the element being dropped
        #[arg(short, long)]
        moving: String,

        /// Override the configured magnetic threshold
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Elements extending beyond the page
    Overflow {
        /// Scene file (JSON)
        scene: PathBuf,
    },
}

#[derive(Serialize)]
struct SnapReport {
    magnetic: Point,
    grid_position: Point,
    grid_size: Size,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "cv_canvas=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scene(path: &Path) -> Scene {
    match Scene::from_file(path) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error loading scene '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

fn find_moving(scene: &Scene, id: &str) -> Rect {
    match scene.find(id) {
        Ok(rect) => rect,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let SceneError::UnknownElement { known, .. } = &e {
                if !known.is_empty() {
                    eprintln!("Known elements: {}", known.join(", "));
                }
            }
            std::process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error encoding output: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => match CanvasConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => CanvasConfig::default(),
    };

    match cli.command {
        Command::Guides {
            scene,
            moving,
            threshold,
            dedup,
        } => {
            let scene = load_scene(&scene);
            // The scene's page wins over the configured default
            config.page = scene.page;
            let rects = scene.rects();
            let moving = find_moving(&scene, &moving);
            let threshold = threshold.unwrap_or(config.guide_threshold);

            let mut guides = compute_guides(&config.page, &rects, &moving, threshold);
            if dedup {
                guides = dedup_guides(&guides);
            }
            info!(count = guides.len(), "guides");
            print_json(&guides);
        }
        Command::Snap {
            scene,
            moving,
            threshold,
        } => {
            let scene = load_scene(&scene);
            let rects = scene.rects();
            let moving = find_moving(&scene, &moving);
            let threshold = threshold.unwrap_or(config.magnetic_threshold);

            let magnetic = magnetic_snap(&moving, &rects, threshold);
            debug!(?magnetic, "magnetic position");
            print_json(&SnapReport {
                magnetic,
                grid_position: config.snap.snap_position(moving.origin(), None),
                grid_size: config.snap.snap_size(moving.size(), None),
            });
        }
        Command::Overflow { scene } => {
            let scene = load_scene(&scene);
            let badges = overflow_badges(&scene.page, &scene.rects());
            info!(count = badges.len(), "overflowing elements");
            print_json(&badges);
        }
    }
}
