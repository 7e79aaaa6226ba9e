use anyhow::Context;
use clap::Parser;
use sivuhaku::{IndexConfig, Indexer, StageStatus};
use std::path::PathBuf;
use std::time::Instant;

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version = sivuhaku::VERSION, about = "Build search-index.json from the site's HTML pages", long_about = None)]
struct Args {
    /// Directory containing the HTML pages
    #[arg(short, long, default_value = ".")]
    site_dir: PathBuf,

    /// Output file (default: <site-dir>/search-index.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum excerpt length in characters
    #[arg(long, default_value_t = sivuhaku::text::DEFAULT_EXCERPT_LEN)]
    excerpt_len: usize,

    /// Spaces per JSON indentation level
    #[arg(long, default_value_t = sivuhaku::config::DEFAULT_INDENT)]
    indent: usize,

    /// Also index the table of contents (sisallys.html)
    #[arg(long)]
    with_toc: bool,
}

impl Args {
    fn into_config(self) -> sivuhaku::Result<IndexConfig> {
        let mut builder = IndexConfig::builder()
            .site_dir(self.site_dir)
            .excerpt_len(self.excerpt_len)
            .indent(self.indent)
            .include_toc(self.with_toc);
        if let Some(output) = self.output {
            builder = builder.output(output);
        }
        builder.build()
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let config = args.into_config().context("Invalid arguments")?;
    let indexer = Indexer::new(config);

    let start = Instant::now();
    let report = indexer.collect().context("Failed to read site pages")?;

    for outcome in &report.stages {
        println!("Indexing {}...", outcome.stage.file);
        match outcome.status {
            StageStatus::Indexed(count) => println!("  {} {}", count, outcome.stage.noun),
            StageStatus::Skipped => println!("  Skipping {} (not found)", outcome.stage.file),
        }
    }

    let summary = indexer
        .write(&report)
        .with_context(|| format!("Failed to write {}", indexer.config().output.display()))?;

    println!(
        "\nWrote {} entries to {} ({:.0} KB) in {:?}",
        summary.records,
        summary.path.display(),
        summary.size_kb(),
        start.elapsed()
    );

    Ok(())
}
