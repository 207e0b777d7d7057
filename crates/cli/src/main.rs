use anyhow::{bail, Context, Result};
use catalog::{Catalog, Color, Product, Size};
use clap::Parser;
use colored::Colorize;
use filtering::prelude::*;
use filtering::ProductFilter;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// product-filter - select products by color, size and name
#[derive(Parser, Debug)]
#[command(name = "product-filter")]
#[command(about = "Filter a product catalog with composable specifications", long_about = None)]
struct Cli {
    /// JSON catalog file (array of {name, color, size}); the demo catalog is used when omitted
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Keep only products of this color (red, green, blue)
    #[arg(long)]
    color: Option<Color>,

    /// Keep only products of this size (small, medium, large)
    #[arg(long)]
    size: Option<Size>,

    /// Keep only products whose name contains this text (case-insensitive)
    #[arg(long)]
    name: Option<String>,

    /// Evaluate the specification on rayon's thread pool
    #[arg(long, conflicts_with = "legacy")]
    parallel: bool,

    /// Use the per-attribute ProductFilter instead of specifications
    #[arg(long)]
    legacy: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = load_catalog(cli.catalog.as_deref())?;
    tracing::debug!("Catalog ready in {:?}", start.elapsed());

    let items = catalog.refs();
    let matches = if cli.legacy {
        handle_legacy(&cli, &items)?
    } else {
        handle_specification(&cli, &items)
    };

    print_matches(&matches, items.len());
    Ok(())
}

/// Load the catalog named by `--catalog`, or the demo catalog without one
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            tracing::info!("No catalog given, using the demo catalog");
            Ok(Catalog::demo())
        }
    }
}

/// Build one specification from the flags and run it through a Filter
fn handle_specification<'a>(cli: &Cli, items: &[&'a Product]) -> Vec<&'a Product> {
    let mut spec: AllOf<Product> = AllOf::new();
    if let Some(color) = cli.color {
        spec.push(ColorSpecification::new(color));
    }
    if let Some(size) = cli.size {
        spec.push(SizeSpecification::new(size));
    }
    if let Some(name) = &cli.name {
        spec.push(NameSpecification::new(name));
    }

    let filter: Box<dyn Filter<Product>> = if cli.parallel {
        Box::new(ParallelFilter::new())
    } else {
        Box::new(BetterFilter)
    };

    tracing::info!("Filtering with {} using {}", filter.name(), spec.describe());
    filter.filter(items, &spec)
}

/// Run the matching ProductFilter method; it has one per supported query
fn handle_legacy<'a>(cli: &Cli, items: &[&'a Product]) -> Result<Vec<&'a Product>> {
    if cli.name.is_some() {
        bail!("ProductFilter has no name query; drop --legacy to filter by name");
    }

    let pf = ProductFilter;
    let matches = match (cli.color, cli.size) {
        (Some(color), Some(size)) => pf.by_size_and_color(items, size, color),
        (Some(color), None) => pf.by_color(items, color),
        (None, Some(size)) => pf.by_size(items, size),
        (None, None) => items.to_vec(),
    };
    tracing::info!("Filtered with ProductFilter");
    Ok(matches)
}

/// Helper function to format and print matching products
fn print_matches(matches: &[&Product], total: usize) {
    if matches.is_empty() {
        println!("{}", "No matching products".yellow());
        return;
    }

    println!("{}", "Matching products:".bold().blue());
    for product in matches {
        println!("{} {}", "•".green(), product);
    }
    println!("{} of {} products matched", matches.len(), total);
}
