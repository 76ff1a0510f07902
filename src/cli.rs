//! Command-line interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Air Mouse - drive the pointer with hand gestures
#[derive(Parser, Debug)]
#[command(name = "air-mouse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a recorded landmark trace through the gesture engine
    Replay {
        /// Landmark trace (JSON)
        #[arg(short, long)]
        trace: PathBuf,

        /// Write a JSON report of events and pointer actions here
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Virtual screen size, e.g. 1920x1080
        #[arg(short, long, default_value = "1920x1080", value_parser = parse_screen)]
        screen: (u32, u32),
    },

    /// Print the default configuration as JSON
    DefaultConfig,
}

/// Parse `<width>x<height>`
pub fn parse_screen(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected <width>x<height>, got '{}'", s))?;
    let width = w.trim().parse::<u32>().map_err(|e| format!("bad width '{}': {}", w, e))?;
    let height = h.trim().parse::<u32>().map_err(|e| format!("bad height '{}': {}", h, e))?;
    if width == 0 || height == 0 {
        return Err("screen size must be non-zero".to_string());
    }
    Ok((width, height))
}
