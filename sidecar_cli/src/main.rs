mod cli;
pub mod errors;
mod handlers;

use clap::Parser;

use sidecar::descriptor::UploadMode;

use crate::cli::{Cli, Commands};
use crate::handlers::generate::handle_generate;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sample {
            input,
            output,
            sample_name,
            analysis_id,
            dme_analysis_collection,
            parallel,
        } => {
            let mode = UploadMode::Sample {
                sample_name,
                analysis_id,
                analysis_collection: dme_analysis_collection,
            };
            handle_generate(&input, &output, &mode, parallel)
        }
        Commands::Combined {
            input,
            output,
            analysis_id,
            parallel,
        } => {
            let mode = UploadMode::Combined { analysis_id };
            handle_generate(&input, &output, &mode, parallel)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
