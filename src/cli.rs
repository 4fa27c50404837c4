use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rustflavor")]
#[command(about = "Extract a structural and complexity model from a Rust source tree", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Root directory of the source tree to analyze
    pub root: PathBuf,

    /// Glob pattern selecting package ids to analyze
    #[arg(short, long, default_value = "**")]
    pub pattern: String,

    /// Output file
    #[arg(short, long, default_value = "rust-flavor-output.xml")]
    pub output: PathBuf,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
