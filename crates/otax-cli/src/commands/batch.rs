//! Batch processing command for multiple booking documents.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::error;

use otax_core::ExtractionResult;

use super::process;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for reports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct BatchOutcome {
    path: PathBuf,
    result: Option<ExtractionResult>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = process::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?.filter_map(|entry| entry.ok()).collect();
    if files.is_empty() {
        anyhow::bail!("No input files match: {}", args.input);
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );

    let out_dir = args
        .output_dir
        .as_deref()
        .or(config.output.output_dir.as_deref());

    let mut outcomes = Vec::with_capacity(files.len());
    for path in &files {
        pb.set_message(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        let outcome = process::extract_file(path, &config).and_then(|result| {
            process::write_reports(path, out_dir, &result, &config)?;
            Ok(result)
        });
        match outcome {
            Ok(result) => outcomes.push(BatchOutcome {
                path: path.clone(),
                result: Some(result),
                error: None,
            }),
            Err(e) => {
                error!("{}: {e}", path.display());
                if !args.continue_on_error {
                    pb.abandon();
                    return Err(e);
                }
                outcomes.push(BatchOutcome {
                    path: path.clone(),
                    result: None,
                    error: Some(e.to_string()),
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    let processed = outcomes.iter().filter(|o| o.result.is_some()).count();
    println!(
        "{} {} of {} documents processed in {:.1}s",
        style("✓").green(),
        processed,
        outcomes.len(),
        start.elapsed().as_secs_f32()
    );
    for outcome in outcomes.iter().filter(|o| o.error.is_some()) {
        println!(
            "{} {}: {}",
            style("✗").red(),
            outcome.path.display(),
            outcome.error.as_deref().unwrap_or("")
        );
    }

    if args.summary {
        let summary_path = write_summary(&outcomes, out_dir)?;
        println!("{} summary written to {}", style("✓").green(), summary_path.display());
    }

    Ok(())
}

fn write_summary(outcomes: &[BatchOutcome], output_dir: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = output_dir.unwrap_or(Path::new(".")).join("summary.csv");
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record([
        "file",
        "source",
        "status",
        "booking_id",
        "check_in",
        "check_out",
        "total_booking",
        "notes",
        "processed_at",
    ])?;

    let processed_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    for outcome in outcomes {
        let row = match &outcome.result {
            Some(r) => [
                outcome.path.display().to_string(),
                r.source.to_string(),
                r.record.status_label().to_string(),
                r.record.booking_id.clone(),
                r.record.check_in.clone(),
                r.record.check_out.clone(),
                r.record.total_booking.clone(),
                r.warnings.join("; "),
                processed_at.clone(),
            ],
            None => [
                outcome.path.display().to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                outcome.error.clone().unwrap_or_default(),
                processed_at.clone(),
            ],
        };
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(path)
}
