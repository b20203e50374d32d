use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use media_tidy_rs::prelude::*;
use media_tidy_rs::reporting::console;

#[derive(Parser)]
#[command(name = "media_tidy_rs", version)]
#[command(about = "Find duplicate media and sort images by name, size or date", long_about = None)]
struct Cli {
    /// Verbose logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root_answer = ask("Enter the folder path to scan. (ex. /Users/john/Desktop/Photos)")?;
    let root = match resolve_root(&root_answer) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {}. Quitting...", e);
            return Ok(());
        }
    };

    let tool_answer = ask("Choose a tool: (1) Sort images  (2) Find duplicates")?;
    match Tool::parse(&tool_answer) {
        Some(Tool::SortImages) => sort_images_tool(root),
        Some(Tool::FindDuplicates) => find_duplicates_tool(root),
        None => {
            println!("Invalid input!!! Quitting...");
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn ask(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read answer")
}

fn print_notices(notices: &[String]) {
    for notice in notices {
        println!("{}", notice);
    }
}

fn sort_images_tool(root: std::path::PathBuf) -> Result<()> {
    let key_answer = ask("What would you like to sort by: 'name', 'size', 'date'")?;
    let blur_answer = ask("Do you want to know if the image is blurry or not: 'yes', 'no'")?;
    println!("{}", console::order_legend());
    let order_answer = ask("Enter 'asc' or 'desc'")?;

    let (settings, notices) = SortSettings::resolve(root, &key_answer, &blur_answer, &order_answer);
    print_notices(&notices);

    println!("Scanning Path {}", settings.root.display());
    let records = run_image_sort(&settings)
        .with_context(|| format!("Failed to sort images in {}", settings.root.display()))?;

    if records.is_empty() {
        println!("No images found in the specified directory.");
        return Ok(());
    }

    print!("{}", console::image_table(&records, settings.key)?);
    Ok(())
}

fn find_duplicates_tool(root: std::path::PathBuf) -> Result<()> {
    let start = Instant::now();
    println!("Running Compare...");
    println!("Scanning Path {}", root.display());

    let media_answer = ask("Choose a media to compare: (1) Video  (2) Photo  (3) Video + Photo")?;
    let (settings, notices) = DuplicateSettings::resolve(root, &media_answer);
    print_notices(&notices);

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")?
            .progress_chars("#>-"),
    );

    let report = run_duplicate_scan(&settings, &progress)
        .with_context(|| format!("Failed to scan {}", settings.root.display()))?;

    write_duplicates_json(&settings.output, &report.duplicates)
        .context("Failed to write duplicate list")?;

    print!("{}", console::duplicate_summary(&report, &settings.output, start.elapsed())?);
    println!("Done running!!!");
    Ok(())
}
