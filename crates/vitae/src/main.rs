//! vitae CLI - Main entry point
//!
//! Loads a JSON section dump (the shape a spreadsheet reader would
//! produce), builds the CV model, and prints what a site renderer would
//! consume. All printing lives here; the model crates stay print-free.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use vitae_model::Cv;
use vitae_record::MemorySource;

#[derive(Parser)]
#[command(name = "vitae")]
#[command(version)]
#[command(about = "Build a CV document model from a record dump", long_about = None)]
struct Cli {
    /// Input JSON file: {"SectionName": [{"Column": value, …}, …]}
    input: PathBuf,

    /// Only print publications of this document type
    #[arg(short = 't', long)]
    filter_type: Option<String>,

    /// Skip the collection summary and print citations only
    #[arg(long)]
    citations_only: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let json = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read {}", cli.input.display()))?;
    let source = MemorySource::from_json(&json).context("cannot parse the record dump")?;

    let cv = match Cv::load(&source) {
        Ok(cv) => cv,
        Err(e) => {
            eprintln!("{}", e.to_diagnostic().to_text());
            std::process::exit(1);
        }
    };

    if !cli.citations_only {
        println!("{} — {}", cv.intro.tagline, cv.intro.short_summary);
        println!();
        println!("institutes:    {}", cv.institutes.len());
        println!("authors:       {}", cv.authors.len());
        println!("software:      {}", cv.software.len());
        println!("education:     {}", cv.education.len());
        println!("experience:    {}", cv.experience.len());
        println!("teaching:      {}", cv.teaching.len());
        println!("supervision:   {}", cv.supervision.len());
        println!("publications:  {}", cv.publications.len());
        println!("presentations: {}", cv.presentations.len());
        println!("grants/awards: {}", cv.grants_awards.len());
        if let Some((from, to)) = cv.publications.year_range() {
            println!("publishing since {from}, latest {to}");
        }
        println!();
    }

    match &cli.filter_type {
        Some(document_type) => {
            for publication in cv.publications.iter_type(document_type) {
                println!("{}", publication.citation(&cv.authors)?);
            }
        }
        None => {
            for document_type in cv.publications.document_types_ordered() {
                println!("## {document_type}");
                for publication in cv.publications.iter_type(document_type) {
                    println!("{}", publication.citation(&cv.authors)?);
                }
                println!();
            }
        }
    }

    Ok(())
}
