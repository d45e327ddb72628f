//! pacgen CLI entrypoint
//! Parses command-line arguments, wires the adapters and runs the generation use case.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use pacgen::application::{
    ApplicationError, Confirmation, GenerateFamiliesRequest, GenerateFamiliesUseCase,
};
use pacgen::core::GeneratorConfig;
use pacgen::generation::PrefixFamilyScheme;
use pacgen::infrastructure::{
    AssumeYes, ConsoleConfirmation, FileSystemDefinitionSource, FileSystemOutputService,
    TeraFamilyRenderer,
};

// External imports (alphabetized)
use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pacgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the device definition files
    definitions_dir: PathBuf,
    /// Directory the family crates are created in
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Generator configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory with template overrides (Cargo.toml.tera, README.md.tera, lib.rs.tera)
    #[arg(long)]
    template_dir: Option<PathBuf>,
    /// Create/update the family directories without asking
    #[arg(short, long)]
    yes: bool,
}

/// Process exit codes
#[repr(u8)]
enum Exit {
    Success = 0,
    GeneralError = 1,
    Interrupted = 130,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(_) => {
            println!("{}", Cli::command().render_usage());
            return Exit::GeneralError.into();
        }
    };

    // Logs go to stderr, stdout belongs to the confirmation prompt
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => Exit::Success.into(),
        Err(e) => match e.downcast_ref::<ApplicationError>() {
            Some(ApplicationError::Cancelled) => {
                eprintln!("{e}");
                Exit::Interrupted.into()
            }
            _ => {
                error!("{e:#}");
                Exit::GeneralError.into()
            }
        },
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    let renderer = match &cli.template_dir {
        Some(dir) => TeraFamilyRenderer::with_overrides(dir).await?,
        None => TeraFamilyRenderer::embedded()?,
    };

    let confirmation: Arc<dyn Confirmation> = if cli.yes {
        Arc::new(AssumeYes)
    } else {
        Arc::new(ConsoleConfirmation::stdio())
    };

    let use_case = GenerateFamiliesUseCase::new(
        Arc::new(FileSystemDefinitionSource::new(
            config.definition_extension.clone(),
        )),
        Arc::new(PrefixFamilyScheme::new(config.family_prefix_len)),
        Arc::new(renderer),
        confirmation,
        Arc::new(FileSystemOutputService::new()),
        Arc::new(config),
    );

    let response = use_case
        .execute(GenerateFamiliesRequest {
            definitions_dir: cli.definitions_dir,
            output_dir: cli.output_dir,
        })
        .await?;

    info!(
        "Generated {} families from {} definition files ({} files written to {})",
        response.families.len(),
        response.devices_count,
        response.artifacts_count,
        response.output_path.display()
    );
    Ok(())
}
