//! folio CLI
//!
//! Syncs a Notion database of posts into Hugo markdown files.

use anyhow::{Context, Result};
use clap::Parser;
use folio_cli::cli::{Args, Command, SyncArgs};
use folio_cli::config_handlers::handle_config_command;
use folio_cli::{FolioConfig, PostWriter, SyncReport, Syncer, logging};
use folio_content::DocumentConverter;
use folio_core::SystemClock;
use folio_notion::NotionClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    match args.resolved_command() {
        Command::Sync(sync_args) => run_sync(args.config.as_deref(), &sync_args).await,
        Command::Config { action } => {
            handle_config_command(args.config.as_deref(), action)?;
            Ok(())
        }
    }
}

async fn run_sync(config_path: Option<&str>, sync_args: &SyncArgs) -> Result<()> {
    let mut config = FolioConfig::load(config_path).context("Failed to load configuration")?;
    if let Some(output) = &sync_args.output {
        config.output.dir = output.clone();
    }

    let client = NotionClient::new(config.notion.clone()).context("Invalid Notion settings")?;
    let syncer = Syncer::new(
        client,
        DocumentConverter::new(SystemClock),
        PostWriter::new(&config.output.dir),
    )
    .dry_run(sync_args.dry_run);

    let report = syncer
        .run()
        .await
        .context("Failed to list published posts")?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &SyncReport) {
    println!("Found {} published posts", report.found);
    for path in &report.written {
        if report.dry_run {
            println!("Would create: {}", path.display());
        } else {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            println!("Created: {name}");
        }
    }
    for failure in &report.failures {
        println!(
            "Failed: {} ({}): {}",
            failure.title, failure.document_id, failure.error
        );
    }
    println!();
    println!("{}", report.summary());
}
