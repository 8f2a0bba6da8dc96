// ABOUTME: CLI driving the built-in career-site sources and persisting results.
// ABOUTME: Prints a per-posting console report and writes one JSON array file per source.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use darbai_scrape::{Client, JobRecord, Source};

/// Scrape the built-in career-site sources and write one JSON file each.
#[derive(Parser, Debug)]
#[command(name = "darbai")]
#[command(about = "Scrape job postings and save them as JSON", long_about = None)]
struct Args {
    /// Only scrape the named source (e.g. "ignitis" or "epsog").
    #[arg(long)]
    source: Option<String>,

    /// Directory for the per-source <name>_jobs.json files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Delay between detail-page requests, in milliseconds.
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Per-request timeout, in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Write compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let sources: Vec<Source> = match &args.source {
        Some(name) => {
            let selected: Vec<Source> = Source::builtin()
                .into_iter()
                .filter(|s| s.name == *name)
                .collect();
            if selected.is_empty() {
                bail!("unknown source: {}", name);
            }
            selected
        }
        None => Source::builtin(),
    };

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {:?}", args.out_dir))?;

    let client = Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .pacing(Duration::from_millis(args.delay_ms))
        .build();

    let mut totals: Vec<(String, usize)> = Vec::new();

    for source in &sources {
        println!("{}", "=".repeat(60));
        println!("Scraping {} job listings...", source.name);
        println!("{}\n", "=".repeat(60));

        // A source-fatal error leaves an empty collection for this source
        // and moves on to the next one.
        let records = match client.scrape(source).await {
            Ok(records) => records,
            Err(err) => {
                tracing::error!(source = %source.name, error = %err, "source failed");
                Vec::new()
            }
        };

        if records.is_empty() {
            println!("No jobs found or error occurred during scraping.\n");
        } else {
            println!("Found {} jobs:\n", records.len());
            for (i, record) in records.iter().enumerate() {
                print_record(i + 1, record);
            }
        }

        let path = args.out_dir.join(format!("{}_jobs.json", source.name));
        write_records(&path, &records, args.compact)?;
        println!("Jobs saved to {}\n", path.display());

        totals.push((source.name.clone(), records.len()));
    }

    println!("{}", "=".repeat(60));
    println!("SCRAPING SUMMARY");
    println!("{}", "=".repeat(60));
    let mut grand_total = 0;
    for (name, count) in &totals {
        println!("Total {} jobs: {}", name, count);
        grand_total += count;
    }
    println!("Grand Total: {}", grand_total);
    println!("{}", "=".repeat(60));

    Ok(())
}

fn print_record(index: usize, record: &JobRecord) {
    println!("{}. {}", index, record.title);
    if let Some(ref tag) = record.company_tag {
        println!("   Company: {}", tag);
    }
    println!("   Location: {}", record.location.as_deref().unwrap_or("N/A"));
    println!("   Work Type: {}", record.work_type.as_deref().unwrap_or("N/A"));
    if let Some(ref department) = record.department {
        println!("   Department: {}", department);
    }
    println!("   Salary: {}", record.salary.as_deref().unwrap_or("N/A"));
    if record.remote_work {
        println!("   Remote Work: Yes");
    }
    println!("   URL: {}", record.url);
    println!();
}

/// Persist one source's records as a JSON array. serde_json writes
/// non-ASCII characters literally, so Lithuanian text survives untouched.
fn write_records(path: &PathBuf, records: &[JobRecord], compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(records)?
    } else {
        serde_json::to_string_pretty(records)?
    };
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
