use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::scholar::ScholarClient;
use crate::Publication;

mod names;
pub use names::{nsf_name, split_authors, AUTHOR_SEPARATOR};

#[derive(Args)]
pub struct GatherArgs {
    /// Author identifier on the profile service
    #[arg(short, long, default_value = "lHBjgLsAAAAJ")]
    pub author: String,

    /// Number of years to look back for collaborations
    #[arg(short = 'y', long, default_value = "2")]
    pub years_back: i32,

    /// Consider publications from all years
    #[arg(long)]
    pub all_years: bool,

    /// Path of the coauthor report to write
    #[arg(short, long, default_value = "coauthors.csv")]
    pub output: PathBuf,

    /// Skip writing the report file
    #[arg(long)]
    pub no_write: bool,

    /// Write names only, omitting the most recent collaboration year
    #[arg(long)]
    pub names_only: bool,

    /// Profile service base URL
    #[arg(short = 'u', long, default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "30")]
    pub timeout: u64,
}

/// Current calendar year, used as the fallback for publications with no
/// recorded year.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Select the publications whose recorded year is at or after the cutoff.
///
/// A missing year counts as `current_year`, so undated publications pass any
/// finite cutoff. `None` disables the filter.
pub fn select_publications<'a>(
    publications: &'a [Publication],
    cutoff: Option<i32>,
    current_year: i32,
) -> Vec<&'a Publication> {
    match cutoff {
        Some(cutoff) => publications
            .iter()
            .filter(|p| p.year.unwrap_or(current_year) >= cutoff)
            .collect(),
        None => publications.iter().collect(),
    }
}

/// Reduce enriched (author string, year) pairs into a map from formatted
/// coauthor name to most recent collaboration year, then drop the primary
/// author's own entry (exact match on the formatted form).
pub fn aggregate_coauthors<'a, I>(entries: I, primary_name: &str) -> BTreeMap<String, i32>
where
    I: IntoIterator<Item = (&'a str, i32)>,
{
    let mut coauthors: BTreeMap<String, i32> = BTreeMap::new();

    for (author_string, year) in entries {
        for raw in split_authors(author_string) {
            coauthors
                .entry(nsf_name(raw))
                .and_modify(|y| *y = (*y).max(year))
                .or_insert(year);
        }
    }

    coauthors.remove(&nsf_name(primary_name));
    coauthors
}

pub fn run(args: GatherArgs) -> Result<BTreeMap<String, i32>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_async(args))
}

pub async fn run_async(args: GatherArgs) -> Result<BTreeMap<String, i32>> {
    let client = ScholarClient::new(args.base_url.clone(), args.timeout);

    let summary = client
        .resolve_author(&args.author)
        .await
        .with_context(|| format!("Failed to resolve author {}", args.author))?;
    info!("Resolved profile for {}", summary.name);

    let profile = client
        .hydrate_author(&args.author, &["publications"])
        .await
        .context("Failed to fetch publication list")?;

    let current_year = current_year();
    let cutoff = if args.all_years {
        None
    } else {
        Some(current_year - args.years_back)
    };

    let selected = select_publications(&profile.publications, cutoff, current_year);
    info!(
        "{} of {} publications within window",
        selected.len(),
        profile.publications.len()
    );

    let pb = ProgressBar::new(selected.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let mut enriched: Vec<(String, i32)> = Vec::with_capacity(selected.len());
    for stub in &selected {
        let publication = client
            .hydrate_publication(&stub.id, &["authors"])
            .await
            .with_context(|| format!("Failed to fetch authors for publication {}", stub.id))?;

        let year = publication.year.or(stub.year).unwrap_or(current_year);
        match publication.authors {
            Some(authors) => enriched.push((authors, year)),
            None => warn!("Publication {} has no author list", stub.id),
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    let coauthors = aggregate_coauthors(
        enriched.iter().map(|(authors, year)| (authors.as_str(), *year)),
        &profile.name,
    );
    info!("Found {} coauthors", coauthors.len());

    if !args.no_write {
        if args.names_only {
            crate::report::write_names(&args.output, &coauthors)?;
        } else {
            crate::report::write_coauthors(&args.output, &coauthors)?;
        }
        info!("Report written to {}", args.output.display());
    }

    Ok(coauthors)
}
