use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use cvbuilder_core::config_file;
use cvbuilder_ingest::BackendKind;
use cvbuilder_parsing::{ParsingConfig, ResumeExtractor};
use cvbuilder_reporting::ExportFormat;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod output;

use output::ColorMode;

/// CV Builder - Extract structured résumé data from PDF or text documents
#[derive(Parser, Debug)]
#[command(name = "cvbuilder", version, about, long_about = None)]
struct Cli {
    /// Show debug logging (per-detector hits, backend details)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract a résumé record from a PDF, .txt or .md file
    Extract {
        /// Path to the document
        file_path: PathBuf,

        /// Output format: json, markdown or text (default: from --output extension, else json)
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// PDF text backend: mupdf or pdf-extract
        #[arg(long)]
        backend: Option<BackendKind>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Print the plain text the detectors would see, without extracting
    Text {
        /// Path to the document
        file_path: PathBuf,

        /// PDF text backend: mupdf or pdf-extract
        #[arg(long)]
        backend: Option<BackendKind>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Extract {
            file_path,
            format,
            output,
            backend,
            no_color,
        } => extract(file_path, format, output, backend, no_color),
        Command::Text { file_path, backend } => text(file_path, backend),
    }
}

/// Install the fmt subscriber on stderr so stdout carries only results.
fn init_logging(verbose: bool) {
    let default = if verbose { "cvbuilder=debug" } else { "cvbuilder=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Build the extractor from the cascaded config file.
fn load_extractor() -> anyhow::Result<ResumeExtractor> {
    let file_config = config_file::load_config();
    let config = match &file_config.parsing {
        Some(section) => ParsingConfig::from_section(section)?,
        None => ParsingConfig::default(),
    };
    Ok(ResumeExtractor::with_config(config))
}

/// `--format` wins; otherwise infer from the output file's extension.
fn resolve_format(format: Option<ExportFormat>, output: Option<&Path>) -> ExportFormat {
    format
        .or_else(|| {
            output
                .and_then(|p| p.extension())
                .and_then(|e| e.to_str())
                .and_then(|e| e.parse().ok())
        })
        .unwrap_or_default()
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn extract(
    file_path: PathBuf,
    format: Option<ExportFormat>,
    output: Option<PathBuf>,
    backend: Option<BackendKind>,
    no_color: bool,
) -> anyhow::Result<()> {
    if !file_path.exists() {
        anyhow::bail!("File not found: {}", file_path.display());
    }

    let backend = backend.unwrap_or_default().build()?;
    let extractor = load_extractor()?;
    let format = resolve_format(format, output.as_deref());

    tracing::debug!(file = %file_path.display(), backend = backend.name(), %format, "extracting");
    let ingested =
        cvbuilder_ingest::extract_resume_from_path(&file_path, backend.as_ref(), &extractor)?;

    let color = ColorMode(!no_color && output.is_none());
    if color.enabled() {
        let mut stderr = std::io::stderr();
        output::print_extraction_summary(
            &mut stderr,
            &file_name_of(&file_path),
            &ingested.record,
            color,
        )?;
        writeln!(stderr)?;
    }

    match output {
        Some(path) => {
            cvbuilder_reporting::export_record(&ingested.record, format, &path)?;
            tracing::info!(path = %path.display(), %format, "wrote résumé");
        }
        None => {
            let rendered = cvbuilder_reporting::render(&ingested.record, format)?;
            let mut stdout = std::io::stdout();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn text(file_path: PathBuf, backend: Option<BackendKind>) -> anyhow::Result<()> {
    if !file_path.exists() {
        anyhow::bail!("File not found: {}", file_path.display());
    }

    let backend = backend.unwrap_or_default().build()?;
    let text = cvbuilder_ingest::document_text(&file_path, backend.as_ref())?;

    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", text)?;
    Ok(())
}
