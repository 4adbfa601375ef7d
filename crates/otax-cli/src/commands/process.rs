//! Process command - extract booking data from a single document.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use otax_core::models::config::OtaxConfig;
use otax_core::{render_html, render_text, BookingParser, ExtractionResult, PdfText};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF, or pre-extracted .txt)
    #[arg(required = true)]
    input: PathBuf,

    /// Directory for generated reports (default: alongside the input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also print the normalized record as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Skip writing the report file pair
    #[arg(long)]
    no_reports: bool,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let result = extract_file(&args.input, &config)?;

    if !result.warnings.is_empty() {
        eprintln!("{}", style("Defaulted fields:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {warning}");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.record)?);
    }

    if !args.no_reports {
        let out_dir = args
            .output_dir
            .as_deref()
            .or(config.output.output_dir.as_deref());
        let (txt_path, html_path) = write_reports(&args.input, out_dir, &result, &config)?;
        if let Some(txt_path) = txt_path {
            println!("{} {}", style("✓").green(), txt_path.display());
        }
        if let Some(html_path) = html_path {
            println!("{} {}", style("✓").green(), html_path.display());
        }
    }

    Ok(())
}

pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<OtaxConfig> {
    match config_path {
        Some(path) => Ok(OtaxConfig::from_file(Path::new(path))?),
        None => Ok(OtaxConfig::default()),
    }
}

/// Read one input document and run the extraction pipeline on it.
pub(crate) fn extract_file(path: &Path, config: &OtaxConfig) -> anyhow::Result<ExtractionResult> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let text = match extension.as_str() {
        "pdf" => {
            let data = fs::read(path)?;
            let pdf = PdfText::load(&data)?;
            let text = pdf.extract_text()?;
            if text.trim().len() < config.pdf.min_text_length {
                anyhow::bail!(
                    "PDF has no usable embedded text (image-only scan?): {}",
                    path.display()
                );
            }
            text
        }
        "txt" => fs::read_to_string(path)?,
        _ => anyhow::bail!("Unsupported file format: {extension}"),
    };

    info!("processing {}", path.display());
    Ok(BookingParser::new().parse(&text)?)
}

/// Write the `<base>_extracted.txt` / `<base>_report.html` pair next to the
/// input (or into the given directory). Returns the paths actually written.
pub(crate) fn write_reports(
    input: &Path,
    output_dir: Option<&Path>,
    result: &ExtractionResult,
    config: &OtaxConfig,
) -> anyhow::Result<(Option<PathBuf>, Option<PathBuf>)> {
    let base = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("booking");
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().unwrap_or(Path::new(".")).to_path_buf(),
    };

    let mut txt_path = None;
    if config.output.write_text {
        let path = dir.join(format!("{base}_extracted.txt"));
        fs::write(&path, render_text(&result.record))?;
        txt_path = Some(path);
    }

    let mut html_path = None;
    if config.output.write_html {
        let path = dir.join(format!("{base}_report.html"));
        fs::write(&path, render_html(&result.record))?;
        html_path = Some(path);
    }

    Ok((txt_path, html_path))
}
