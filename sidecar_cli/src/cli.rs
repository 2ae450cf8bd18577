use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate descriptors for one sample's files
    Sample {
        /// Local files to describe (each must exist and be readable)
        #[arg(short = 'i', long = "input", required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Destination collection path in the archive
        #[arg(short = 'o', long = "output", required = true)]
        output: String,

        /// Sample name recorded on every descriptor
        #[arg(short = 's', long = "sample-name")]
        sample_name: Option<String>,

        /// Externally computed identifier for the full set of pipeline inputs
        #[arg(short = 'a', long = "analysis-id")]
        analysis_id: Option<String>,

        /// Analysis collection path recorded on every descriptor
        #[arg(long = "dme-analysis-collection")]
        dme_analysis_collection: Option<String>,

        /// Process input files on a worker pool
        #[arg(short = 'P', long = "parallel")]
        parallel: bool,
    },
    /// Generate descriptors for combined multi-sample files
    Combined {
        /// Local files to describe (each must exist and be readable)
        #[arg(short = 'i', long = "input", required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Destination collection path in the archive
        #[arg(short = 'o', long = "output", required = true)]
        output: String,

        /// Externally computed identifier for the full set of pipeline inputs
        #[arg(short = 'a', long = "analysis-id")]
        analysis_id: Option<String>,

        /// Process input files on a worker pool
        #[arg(short = 'P', long = "parallel")]
        parallel: bool,
    },
}
