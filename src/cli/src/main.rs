#![warn(clippy::pedantic)]

mod config;
mod net;
mod svg;

use std::{fs, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{WrapErr, eyre};
use cube_core::{Algorithm, DEMO_SCRAMBLE, Layout};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, info};

use crate::{config::RenderConfig, net::Net, svg::Svg};

/// Applies move sequences to a 3x3 cube and draws the result
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Render configuration file, in TOML format
    #[arg(long, short = 'c', value_name = "RENDER_CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    log_level: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the unfolded cube with terminal colors
    Net {
        /// The move sequence to apply to the solved cube, e.g. "R U' F2". Defaults to the demo scramble.
        algorithm: Option<String>,
    },
    /// Print the 54 sticker colors in facelet slot order
    Facelets { algorithm: Option<String> },
    /// Print the corner and edge permutation and orientation arrays
    State { algorithm: Option<String> },
    /// Print the move sequence that undoes the given one
    Invert { algorithm: Option<String> },
    /// Print how many times the move sequence must be repeated to return to solved
    Order { algorithm: Option<String> },
    /// Draw the unfolded cube as SVG
    Svg {
        algorithm: Option<String>,
        /// Where to write the drawing; stdout if left out
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn parse_algorithm(algorithm: Option<&str>) -> color_eyre::Result<Algorithm> {
    let text = algorithm.unwrap_or(DEMO_SCRAMBLE);
    let parsed = text
        .parse::<Algorithm>()
        .wrap_err_with(|| format!("Could not read the move sequence {text:?}"))?;
    info!(target: "cli", "Parsed {} moves: {parsed}", parsed.len());
    Ok(parsed)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let render_config = RenderConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Net { algorithm } => {
            let state = parse_algorithm(algorithm.as_deref())?.state();
            let layout = Layout::project(&state);
            print!(
                "{}",
                Net {
                    layout: &layout,
                    palette: &render_config.palette,
                }
            );
        }
        Commands::Facelets { algorithm } => {
            let state = parse_algorithm(algorithm.as_deref())?.state();
            println!("{}", Layout::project(&state).facelet_string());
        }
        Commands::State { algorithm } => {
            let state = parse_algorithm(algorithm.as_deref())?.state();
            println!("cp: {}", state.corner_permutation().iter().join(" "));
            println!("co: {}", state.corner_orientation().iter().join(" "));
            println!("ep: {}", state.edge_permutation().iter().join(" "));
            println!("eo: {}", state.edge_orientation().iter().join(" "));
        }
        Commands::Invert { algorithm } => {
            println!("{}", parse_algorithm(algorithm.as_deref())?.inverse());
        }
        Commands::Order { algorithm } => {
            let state = parse_algorithm(algorithm.as_deref())?.state();
            let order = state
                .order()
                .ok_or_else(|| eyre!("The move sequence does not produce a valid cube state"))?;
            println!("{order}");
        }
        Commands::Svg { algorithm, output } => {
            let state = parse_algorithm(algorithm.as_deref())?.state();
            let layout = Layout::project(&state);
            let drawing = Svg {
                layout: &layout,
                config: &render_config,
            }
            .to_string();

            match output {
                Some(path) => {
                    fs::write(&path, drawing)
                        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                    info!(target: "cli", "Wrote {}", path.display());
                }
                None => print!("{drawing}"),
            }
        }
    }

    Ok(())
}
