mod run;

use std::path::PathBuf;

use clap::Parser;
use hotwatch_archive::ArchiveStore;
use hotwatch_dingtalk::{DingTalkClient, DingTalkConfig};
use hotwatch_weibo::{WeiboClient, WeiboConfig};
use tracing_subscriber::EnvFilter;

use crate::run::Pipeline;

#[derive(Debug, Parser)]
#[command(name = "hotwatch")]
#[command(about = "Forward keyword-matching Weibo hot searches to a DingTalk robot")]
struct Cli {
    /// Fetch, filter and print matches without notifying or updating the archive
    #[arg(long)]
    dry_run: bool,
    /// Keyword to watch (repeatable); replaces HOTWATCH_KEYWORDS
    #[arg(long = "keyword", value_name = "KEYWORD")]
    keywords: Vec<String>,
    /// Directory for the daily sent-items files; replaces HOTWATCH_ARCHIVE_DIR
    #[arg(long, value_name = "DIR")]
    archive_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = hotwatch_core::load_app_config()?;
    if !cli.keywords.is_empty() {
        config.keywords = cli.keywords;
    }
    if let Some(dir) = cli.archive_dir {
        config.archive_dir = dir;
    }

    // stdout is reserved for the match listing.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "loaded configuration");

    let weibo = WeiboClient::new(&WeiboConfig::from_app_config(&config))?;
    let notifier = DingTalkClient::new(&DingTalkConfig::from_app_config(&config))?;
    let store = ArchiveStore::new(config.archive_dir.clone());

    let pipeline = Pipeline {
        weibo: &weibo,
        notifier: &notifier,
        store: &store,
        keywords: &config.keywords,
        dry_run: cli.dry_run,
    };

    let now = chrono::Local::now().naive_local();
    let report = pipeline.run_once(now, &mut std::io::stdout().lock()).await?;

    tracing::info!(
        fetched = report.fetched,
        matched = report.matched,
        new_items = report.new_items,
        notified = report.notified,
        dry_run = cli.dry_run,
        "run complete"
    );

    Ok(())
}
