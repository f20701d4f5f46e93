use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paleoclim-processor")]
#[command(about = "Paleoclimate and instrumental data processor for teaching CSVs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate lesson CSVs and provenance metadata from raw data files
    Process {
        #[arg(short, long, help = "Directory containing the raw source files")]
        data_dir: PathBuf,

        #[arg(short, long, default_value = "assets/data", help = "Output directory for CSVs and metadata")]
        output_dir: PathBuf,

        #[arg(short, long, help = "Generate a single lesson (e.g. 12)")]
        lesson: Option<u8>,

        #[arg(long, default_value = "false", help = "Skip writing per-source sidecar metadata")]
        skip_sidecars: bool,
    },

    /// Parse every present source file and report record/skip statistics
    Validate {
        #[arg(short, long, help = "Directory containing the raw source files")]
        data_dir: PathBuf,
    },

    /// Parse one file with a named dialect and summarize the series
    Info {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(long, value_enum)]
        format: DialectArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DialectArg {
    TreeRing,
    IceCore,
    Speleothem,
    GrainSize,
    Gistemp,
    Co2,
    SeaLevel,
}
