// src/cli.rs
//
// Command-line front end: load one feed, filter it, print it.
//
//   cli --page publications --category journal --query robot
//   cli --page news --file ./news.csv --format tsv
//   cli --page people --diagnostics          (URL from LAB_FEEDS_PEOPLE_URL)

use std::{io, path::PathBuf, sync::Arc};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::{
    config::options::{ContentKind, FeedConfig, OutputFormat},
    core::{
        net::{FeedSource, FileSource, HttpSource},
        sanitize::ellipsize,
    },
    csv::write_rows,
    feed::{self, Diagnostics},
    progress::Progress,
    specs::{
        NewsSchema, PeopleSchema, ProjectsSchema, PublicationsSchema, ResourcesSchema, Schema,
    },
    view::{CategorySelector, Filter},
};

const TABLE_CELL_MAX: usize = 40;

#[derive(Parser, Debug)]
#[command(name = "lab_feeds", version, about = "Load, normalize and filter a lab content feed")]
pub struct Args {
    /// people | projects | publications | resources | news
    #[arg(long, short = 'p')]
    pub page: ContentKind,

    /// Feed URL; defaults to LAB_FEEDS_<PAGE>_URL
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read a local export instead of fetching
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Category key (or a synonym); "all" or empty for everything
    #[arg(long, short = 'c', default_value = "")]
    pub category: String,

    /// Case-insensitive substring filter
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,

    /// table | csv | tsv
    #[arg(long, short = 'f', env = "LAB_FEEDS_FORMAT", default_value = "table")]
    pub format: OutputFormat,

    /// Print status code, delimiter, header line and fields to stderr
    #[arg(long)]
    pub diagnostics: bool,
}

/// Progress lines to stderr so stdout stays clean for piping.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    run_with(&args)
}

pub fn run_with(args: &Args) -> Result<()> {
    let mut config = FeedConfig::from_env();
    if let Some(url) = &args.url {
        config.set_url(args.page, url.as_str());
    }

    let source: Arc<dyn FeedSource> = match &args.file {
        Some(path) => {
            config.set_url(args.page, path.to_string_lossy());
            Arc::new(FileSource::fixed(path))
        }
        None => Arc::new(HttpSource::new().wrap_err("Could not build HTTP client")?),
    };

    logf!("CLI: page={} format={:?} category={:?} query={:?}", args.page, args.format, args.category, args.query);

    match args.page {
        ContentKind::People => run_page::<PeopleSchema>(args, &config, source.as_ref()),
        ContentKind::Projects => run_page::<ProjectsSchema>(args, &config, source.as_ref()),
        ContentKind::Publications => run_page::<PublicationsSchema>(args, &config, source.as_ref()),
        ContentKind::Resources => run_page::<ResourcesSchema>(args, &config, source.as_ref()),
        ContentKind::News => run_page::<NewsSchema>(args, &config, source.as_ref()),
    }
}

fn run_page<S: Schema>(args: &Args, config: &FeedConfig, source: &dyn FeedSource) -> Result<()> {
    let category = CategorySelector::parse(&args.category, &S::CATEGORIES).ok_or_else(|| {
        eyre!(
            "Unknown category '{}' for {} (expected one of: all, {})",
            args.category.trim(),
            S::KIND,
            S::CATEGORIES.allowed.join(", ")
        )
    })?;
    let filter = Filter::new(category, args.query.as_str());

    let mut progress = StderrProgress;
    let loaded = match feed::load::<S>(config, source, Some(&mut progress)) {
        Ok(loaded) => loaded,
        Err(failure) => {
            if args.diagnostics {
                print_diagnostics(&failure.diagnostics);
            }
            return Err(failure).wrap_err(format!("Loading {} failed", S::KIND));
        }
    };

    if args.diagnostics {
        print_diagnostics(&loaded.diagnostics);
    }

    let view = filter.apply(&loaded.records);
    let headers: Vec<String> = S::COLUMNS.iter().map(|c| s!(*c)).collect();
    let rows = view.rows();

    match args.format.delim() {
        Some(sep) => write_rows(io::stdout().lock(), &headers, &rows, sep)?,
        None => print!("{}", render_table(&headers, &rows)),
    }
    eprintln!("{}", view.summary());
    Ok(())
}

fn print_diagnostics(d: &Diagnostics) {
    for line in d.lines() {
        eprintln!("  {line}");
    }
}

/// Plain aligned text table. Cells are cut at a fixed width.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let clip = |s: &str| ellipsize(s, TABLE_CELL_MAX);

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let w = clip(cell.as_str()).chars().count();
            match widths.get_mut(i) {
                Some(slot) => *slot = (*slot).max(w),
                None => widths.push(w),
            }
        }
    }

    let line = |cells: Vec<String>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<width$}", c, width = widths.get(i).copied().unwrap_or(0)))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = line(headers.to_vec());
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&line(rule));
    for row in rows {
        out.push_str(&line(row.iter().map(|c| clip(c.as_str())).collect()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_columns() {
        let out = render_table(&strings!["Year", "Title"], &[strings!["2024", "A"], strings!["", "Longer title"]]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Year  Title");
        assert_eq!(lines[1], "----  ------------");
        assert_eq!(lines[2], "2024  A");
        assert_eq!(lines[3], "      Longer title");
    }

    #[test]
    fn args_parse_with_defaults() {
        let args = Args::try_parse_from(["cli", "--page", "pubs", "-q", "robot"]).unwrap();
        assert_eq!(args.page, ContentKind::Publications);
        assert_eq!(args.query, "robot");
        assert_eq!(args.category, "");
        assert!(!args.diagnostics);
    }

    #[test]
    fn url_and_file_conflict() {
        assert!(Args::try_parse_from(["cli", "-p", "news", "--url", "https://x", "--file", "a.csv"]).is_err());
    }
}
