use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "redek",
    about = "Render training summaries (distance, mean speed, calories) from raw tracker packets"
)]
pub struct Cli {
    /// Path to a JSON packet file: an array of [code, values] pairs.
    ///
    /// Without it the built-in demo dataset is used.
    #[arg(value_name = "PACKETS")]
    pub packets: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
