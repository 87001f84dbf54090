use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use permit_scan::{
    DEFAULT_DOC_DIR, DEFAULT_PERMIT_OUTPUT, DEFAULT_PERMIT_PDF, DEFAULT_SGI_NEEDLE,
    DEFAULT_SGI_OUTPUT, PdfPageReader, PermitOptions, PipelineRun, ScanError, SgiOptions,
    run_electrical_permit, run_sgi_document,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "permit-scan",
    version,
    about = "Extract PDF text and list lines matching electrical-permit keywords"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyse the electrical permit form.
    Electrical(ElectricalArgs),
    /// Analyse the SGI procedure document found in the document folder.
    Sgi(SgiArgs),
}

#[derive(Debug, Args)]
struct ElectricalArgs {
    /// Input PDF path.
    #[arg(short, long, default_value = DEFAULT_PERMIT_PDF)]
    input: PathBuf,

    /// Where the page-marked text is saved.
    #[arg(short, long, default_value = DEFAULT_PERMIT_OUTPUT)]
    output: PathBuf,

    /// List every extraction warning.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Args)]
struct SgiArgs {
    /// Input PDF path; skips discovery in --doc-dir.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Folder searched for the document.
    #[arg(long, default_value = DEFAULT_DOC_DIR)]
    doc_dir: PathBuf,

    /// Case-sensitive text the document file name must contain.
    #[arg(long, default_value = DEFAULT_SGI_NEEDLE)]
    name_contains: String,

    /// Where the raw text is saved.
    #[arg(short, long, default_value = DEFAULT_SGI_OUTPUT)]
    output: PathBuf,

    /// List every extraction warning.
    #[arg(short, long)]
    verbose: bool,
}

fn log_run(run: &PipelineRun, verbose: bool) {
    if run.warnings.is_empty() {
        return;
    }

    tracing::warn!(
        input = %run.input.display(),
        "{} extraction issue(s) detected",
        run.warnings.len()
    );
    if verbose {
        for warning in &run.warnings {
            eprintln!(
                "  - {:?} page={:?}: {}",
                warning.code, warning.page, warning.message
            );
        }
    }
}

/// Console line for errors the scripts report on stdout, if any.
fn console_message(error: &ScanError, extraction_prefix: &str) -> Option<String> {
    match error {
        ScanError::FileNotFound { .. } => Some(error.to_string()),
        _ if error.is_extraction_failure() => Some(format!("{extraction_prefix}: {error}")),
        _ => None,
    }
}

fn finish(
    result: Result<PipelineRun, ScanError>,
    verbose: bool,
    extraction_prefix: &str,
) -> Result<ExitCode> {
    match result {
        Ok(run) => {
            log_run(&run, verbose);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => match console_message(&error, extraction_prefix) {
            Some(message) => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{message}").context("failed to write to stdout")?;
                Ok(ExitCode::from(1))
            }
            None => Err(anyhow!("{error}")),
        },
    }
}

fn run_electrical(args: &ElectricalArgs) -> Result<ExitCode> {
    let options = PermitOptions {
        input: args.input.clone(),
        output: args.output.clone(),
    };
    let mut stdout = io::stdout().lock();
    let result = run_electrical_permit(&options, &PdfPageReader, &mut stdout);
    drop(stdout);
    finish(result, args.verbose, "Erreur lors de l'extraction du PDF")
        .with_context(|| format!("failed to analyse '{}'", args.input.display()))
}

fn run_sgi(args: &SgiArgs) -> Result<ExitCode> {
    let options = SgiOptions {
        input: args.input.clone(),
        doc_dir: args.doc_dir.clone(),
        name_contains: args.name_contains.clone(),
        output: args.output.clone(),
    };
    let mut stdout = io::stdout().lock();
    let result = run_sgi_document(&options, &PdfPageReader, &mut stdout);
    drop(stdout);
    finish(result, args.verbose, "Erreur lors de l'extraction")
        .context("failed to analyse the SGI document")
}

fn main() -> ExitCode {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("permit_scan=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Electrical(args) => run_electrical(args),
        Commands::Sgi(args) => run_sgi(args),
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(1)
        }
    }
}
