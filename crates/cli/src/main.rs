//! fetch-gen - Generate a typed TypeScript fetch client from an OpenAPI document.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use fetch_gen_core::ir::DEFAULT_INSTANCE;
use fetch_gen_core::{GenerateError, GenerateResult, RenderOptions, generate_file};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "fetch-gen",
    version,
    about = "Generate a typed TypeScript fetch client from an OpenAPI document"
)]
struct Args {
    /// OpenAPI document (.yaml, .yml or .json)
    #[arg(short, long)]
    input: PathBuf,

    /// Output TypeScript file
    #[arg(short, long)]
    output: PathBuf,

    /// Module the generated code imports the fetch client from
    #[arg(long, default_value = DEFAULT_INSTANCE)]
    instance: String,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fetch_gen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("Generated fetch client: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> GenerateResult<PathBuf> {
    let input = absolute(&args.input)?;
    let output = absolute(&args.output)?;
    let options = RenderOptions::new(args.instance.as_str());

    let generated = generate_file(&input, &options)?;
    if !generated.diagnostics.is_empty() {
        info!(
            count = generated.diagnostics.len(),
            "Some operations were skipped or flagged; see warnings above."
        );
    }

    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir).map_err(|e| GenerateError::io(dir, e))?;
    }
    fs::write(&output, generated.code).map_err(|e| GenerateError::io(&output, e))?;

    Ok(output)
}

fn absolute(path: &Path) -> GenerateResult<PathBuf> {
    std::path::absolute(path).map_err(|e| GenerateError::io(path, e))
}
