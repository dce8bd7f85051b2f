//! Generation pipeline and watch loop.

use anyhow::Result;
use cube_records_codegen::{GeneratorFlavor, generate_declarations, print_declarations};
use cube_records_core::cli::OutputTarget;
use cube_records_core::{CubeDefinitionWithRelations, GeneratorOptions};
use cube_records_meta::DefinitionRetriever;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes logging infrastructure.
///
/// Diagnostics go to stderr so stdout stays reserved for generated
/// declarations.
///
/// # Errors
///
/// Returns an error if logging initialization fails.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

/// Runs the generator once, or repeatedly when watch mode is enabled.
///
/// In watch mode the deployment is polled on the configured delay and
/// the output rewritten each cycle. A retrieval or synthesis failure
/// terminates the loop.
///
/// # Errors
///
/// Returns an error if metadata retrieval, declaration synthesis, or
/// output writing fails.
pub async fn run(
    options: &GeneratorOptions,
    flavor: GeneratorFlavor,
    target: &OutputTarget,
) -> Result<()> {
    let retriever = DefinitionRetriever::new(&options.base_url);
    debug!(endpoint = retriever.meta_url(), %flavor, "starting generation");

    loop {
        generate_once(&retriever, options, flavor, target).await?;
        if !options.watch {
            return Ok(());
        }
        debug!(delay_ms = options.watch_delay.as_millis(), "watching for changes");
        tokio::time::sleep(options.watch_delay).await;
    }
}

async fn generate_once(
    retriever: &DefinitionRetriever,
    options: &GeneratorOptions,
    flavor: GeneratorFlavor,
    target: &OutputTarget,
) -> Result<()> {
    let definitions = retriever.retrieve_definitions().await?;
    let selected = select_cubes(definitions, &options.exclude, options.views_only);
    info!(cubes = selected.len(), "retrieved cube definitions");

    let declarations = generate_declarations(flavor, &selected)?;
    let source = print_declarations(&declarations);
    crate::writer::write_output(target, &source).await?;
    Ok(())
}

/// Applies the exclusion list and the views-only filter.
///
/// Filtering happens after relation grouping, so the joins of a kept
/// cube still mention excluded neighbors.
fn select_cubes(
    definitions: Vec<CubeDefinitionWithRelations>,
    exclude: &[String],
    views_only: bool,
) -> Vec<CubeDefinitionWithRelations> {
    definitions
        .into_iter()
        .filter(|definition| !exclude.iter().any(|name| name == definition.name()))
        .filter(|definition| !views_only || definition.is_view())
        .collect()
}
