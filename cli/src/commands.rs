pub mod analyse;

use std::path::PathBuf;

use bsq_common::config::Config;
use bsq_common::layer::Layer;
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "bsq")]
#[command(about = "Finds the largest empty square in character maps.")]
pub struct CommandLine {
    /// Map files to analyse, in the given order
    pub maps: Vec<PathBuf>,

    /// Table printed for each map: map, runs or sizes
    #[arg(short, long, default_value = "map")]
    pub layer: Layer,

    /// Print more log lines on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print no log lines at all
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            verbose: self.verbose,
            layer: self.layer,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
