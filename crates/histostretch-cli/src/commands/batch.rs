use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use histostretch_core::pipeline::config::BatchConfig;
use histostretch_core::pipeline::run_batch;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

#[derive(Args)]
pub struct BatchArgs {
    /// Batch config file (TOML, one [[job]] table per image)
    pub config: PathBuf,
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    let config: BatchConfig = toml::from_str(&contents).context("Invalid batch config")?;
    debug!(path = %args.config.display(), jobs = config.jobs.len(), "Loaded batch config");

    if config.jobs.is_empty() {
        println!("No jobs in {}", args.config.display());
        return Ok(());
    }

    let pb = ProgressBar::new(config.jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Stretching");

    let outcomes = run_batch(&config, |_| pb.inc(1));
    pb.finish_with_message("Done");

    let mut failed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(report) => {
                let b = &report.analysis.bounds;
                println!(
                    "  ok    {} -> {} [{:.2}, {:.2}]",
                    report.input.display(),
                    report.output.display(),
                    b.min_val,
                    b.max_val
                );
                for note in report.analysis.diagnostics() {
                    println!("        {}", note);
                }
            }
            Err(e) => {
                failed += 1;
                println!("  FAIL  {}: {}", outcome.job.input.display(), e);
            }
        }
    }

    println!(
        "\n{} of {} image(s) stretched",
        outcomes.len() - failed,
        outcomes.len()
    );
    if failed > 0 {
        anyhow::bail!("{failed} job(s) failed");
    }
    Ok(())
}
