//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{LineEndingArg, SamplingArg};

/// Convert images to ASCII art using a fixed density ramp
#[derive(Parser, Debug)]
#[command(name = "ascii-image")]
#[command(version, about = "Convert images to ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Options shared by every command that renders.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output width in characters (overrides --display-width)
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Available display width in pixels
    #[arg(long)]
    pub display_width: Option<u32>,

    /// Assumed width of one character in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub char_width: Option<u32>,

    /// Resampling policy
    #[arg(long)]
    pub sampling: Option<SamplingArg>,

    /// Line ending for rendered text
    #[arg(long)]
    pub line_ending: Option<LineEndingArg>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert one image and print it (and optionally save it)
    Convert {
        /// Image file (bmp, jpeg, png, gif)
        input: PathBuf,

        /// Save the text to this file
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Don't print the text to stdout
        #[arg(long, short)]
        quiet: bool,

        #[command(flatten)]
        render: RenderOptions,
    },
    /// Read load/save commands from stdin
    Interactive {
        #[command(flatten)]
        render: RenderOptions,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
