//! Cube record generator CLI.
//!
//! Retrieves cube metadata from a running deployment and writes a
//! TypeScript declaration file describing its cubes, views, measures,
//! dimensions, segments and joins.
//!
//! # Examples
//!
//! ```bash
//! # One-shot generation into a declaration file
//! cube-record-gen --output types/cube.d.ts
//!
//! # Regenerate every ten seconds against a remote deployment
//! cube-record-gen -b https://analytics.example.com/cube-api/ \
//!     --watch --delay 10000 --output types/cube.d.ts
//!
//! # Standalone interfaces on stdout, skipping internal cubes
//! cube-record-gen --flavor interfaces --exclude Internal,Audit -o -
//! ```

use anyhow::Result;
use clap::Parser;
use cube_records_codegen::GeneratorFlavor;
use cube_records_core::GeneratorOptions;
use cube_records_core::cli::{ExitCode, OutputTarget};
use std::time::Duration;
use tracing::error;

mod runner;
mod writer;

/// Generate TypeScript declarations from a Cube deployment's metadata.
#[derive(Parser, Debug)]
#[command(name = "cube-record-gen")]
#[command(version, about, long_about = None)]
#[command(author = "Cube Records Team")]
pub struct Cli {
    /// Base URL of the Cube REST API
    #[arg(short = 'b', long = "baseurl", default_value = "http://localhost:4000/cube-api/")]
    base_url: String,

    /// Regenerate whenever the deployment changes, polling on a delay
    #[arg(short, long)]
    watch: bool,

    /// Polling delay in milliseconds for watch mode
    #[arg(short, long, default_value_t = 5000)]
    delay: u64,

    /// Output file path, or '-' for stdout
    #[arg(short, long)]
    output: OutputTarget,

    /// Cube names to leave out of the generated declarations
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    exclude: Vec<String>,

    /// Only generate declarations for views
    #[arg(long)]
    views_only: bool,

    /// Output shape: 'record-map' or 'interfaces'
    #[arg(long, default_value_t = GeneratorFlavor::RecordMap)]
    flavor: GeneratorFlavor,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Converts parsed arguments into validated generator options.
    ///
    /// # Errors
    ///
    /// Returns an error if the combination of arguments is invalid.
    fn options(&self) -> Result<GeneratorOptions> {
        let options = GeneratorOptions::builder()
            .base_url(&self.base_url)
            .watch(self.watch)
            .watch_delay(Duration::from_millis(self.delay))
            .exclude(self.exclude.clone())
            .views_only(self.views_only)
            .build();
        options.validate()?;
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    runner::init_logging(cli.verbose)?;

    let options = cli.options()?;
    let exit_code = match runner::run(&options, cli.flavor, &cli.output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    };

    std::process::exit(exit_code.as_i32());
}
