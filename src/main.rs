//! Bracket Connectors CLI
//!
//! Usage:
//!   bracket-connectors [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --format <FORMAT>    Output format: svg, json, or paths
//!   -d, --debug              Outline anchors in SVG output
//!   --log-level <LEVEL>      Log level (default: warn)
//!   -h, --help               Print help

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use log::{debug, error, info, LevelFilter};

use bracket_connectors::{
    layout_scene, render_scene, to_json, to_path_lines, RenderConfig, RenderError, Scene,
    SceneError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// SVG overlay sized to the container frame
    Svg,
    /// JSON array of connectors with points and path data
    Json,
    /// One `key<TAB>d` line per connector
    Paths,
}

#[derive(Debug, Parser)]
#[command(name = "bracket-connectors")]
#[command(about = "Route connector lines between tournament bracket boxes")]
struct Cli {
    /// Scene file, TOML or .json (reads TOML from stdin if not provided)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Debug mode: outline anchors and label them with their ids
    #[arg(short, long)]
    debug: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(cli:?; "Parsed arguments");

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, RenderError> {
    let scene = load_scene(cli)?;
    info!(
        anchors = scene.anchors.len(),
        connections = scene.connections.len(),
        matches = scene.matches.len();
        "Loaded scene"
    );

    let output = match cli.format {
        OutputFormat::Svg => {
            let config = RenderConfig::new().with_debug(cli.debug);
            render_scene(&scene, &config)
        }
        OutputFormat::Json => to_json(&layout_scene(&scene))?,
        OutputFormat::Paths => to_path_lines(&layout_scene(&scene)),
    };

    Ok(output)
}

fn load_scene(cli: &Cli) -> Result<Scene, RenderError> {
    let scene = match &cli.input {
        Some(path) => {
            info!(path = path.display().to_string(); "Loading scene from file");
            Scene::from_file(path)?
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(SceneError::from)?;
            Scene::from_str(&buffer)?
        }
    };
    Ok(scene)
}
