//! Command-line front end for Localefill.
//!
//! Loads the reference catalog and every target catalog from a locales
//! directory, fills each target's missing keys through the core pipeline,
//! and writes the targets back in place. All catalogs are loaded before
//! anything is written, so a load or parse failure leaves every file
//! untouched.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use localefill_core::{fill_missing, glossary, Catalog, FillReport, REVIEW_PREFIX};

#[derive(Parser, Debug)]
#[command(
    name = "localefill",
    about = "Fills missing keys in JSON locale catalogs from a static glossary"
)]
struct Cli {
    /// Directory containing the per-language catalogs (<lang>.json)
    #[arg(short, long, default_value = "src/locales")]
    locales_dir: PathBuf,

    /// Reference language code
    #[arg(short, long, default_value = "hu")]
    reference: String,

    /// Target language codes (repeatable)
    #[arg(short, long, default_values_t = [String::from("en"), String::from("de")])]
    target: Vec<String>,

    /// Print the per-target reports as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn catalog_path(dir: &Path, language: &str) -> PathBuf {
    dir.join(format!("{language}.json"))
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    for language in &cli.target {
        if !glossary::supports(language) {
            anyhow::bail!("unsupported target language: {language}");
        }
    }

    let reference_path = catalog_path(&cli.locales_dir, &cli.reference);
    let reference = Catalog::load(&reference_path).with_context(|| {
        format!("could not load reference catalog {}", reference_path.display())
    })?;
    log::debug!(
        "loaded reference {} ({} top-level keys)",
        reference_path.display(),
        reference.len()
    );

    let mut targets = Vec::new();
    for language in &cli.target {
        let path = catalog_path(&cli.locales_dir, language);
        let catalog = Catalog::load(&path)
            .with_context(|| format!("could not load target catalog {}", path.display()))?;
        targets.push((language.as_str(), path, catalog));
    }

    let mut results: Vec<(PathBuf, Catalog, FillReport)> = Vec::new();
    for (language, path, catalog) in targets {
        let (filled, report) = fill_missing(&reference, &catalog, language)?;
        results.push((path, filled, report));
    }

    if !cli.json {
        for (_, _, report) in &results {
            println!("Found {} missing {} keys", report.missing_keys, report.language);
        }
    }

    for (path, filled, report) in &results {
        filled
            .save(path)
            .with_context(|| format!("could not write {}", path.display()))?;
        if !cli.json {
            println!("{}: {} translations added", report.language, report.added);
        }
    }

    if cli.json {
        let reports: Vec<&FillReport> = results.iter().map(|(_, _, report)| report).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!();
    println!("Files updated:");
    for (path, _, _) in &results {
        println!("  - {}", path.display());
    }

    if results.iter().any(|(_, _, report)| report.needs_review > 0) {
        println!();
        println!("Manual review needed:");
        for (_, _, report) in &results {
            println!(
                "  {}: {} items marked {}",
                report.language, report.needs_review, REVIEW_PREFIX
            );
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    run(&cli)
}
