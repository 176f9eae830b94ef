//! One polling pass: fetch, filter, dedup, notify, persist, print.

use std::io::Write;

use anyhow::Context;
use chrono::NaiveDateTime;
use hotwatch_archive::ArchiveStore;
use hotwatch_core::matching_descriptions;
use hotwatch_dingtalk::DingTalkClient;
use hotwatch_weibo::WeiboClient;

pub(crate) struct Pipeline<'a> {
    pub weibo: &'a WeiboClient,
    pub notifier: &'a DingTalkClient,
    pub store: &'a ArchiveStore,
    pub keywords: &'a [String],
    pub dry_run: bool,
}

/// Counts for the end-of-run log line.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RunReport {
    pub fetched: usize,
    pub matched: usize,
    pub new_items: usize,
    pub notified: bool,
}

impl Pipeline<'_> {
    /// Runs a single pass and writes every keyword match to `out`.
    ///
    /// A failed fetch is logged and behaves like an empty hot list. The day
    /// record is only saved after the notification went through, so a failed
    /// send leaves the items to be retried by the next scheduled run.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification or the archive write fails, or if
    /// `out` cannot be written.
    pub(crate) async fn run_once<W: Write>(
        &self,
        now: NaiveDateTime,
        out: &mut W,
    ) -> anyhow::Result<RunReport> {
        let items = match self.weibo.fetch_hot_items().await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(error = %e, "hot list fetch failed, treating as empty");
                Vec::new()
            }
        };

        let matched = matching_descriptions(&items, self.keywords);
        let mut report = RunReport {
            fetched: items.len(),
            matched: matched.len(),
            ..RunReport::default()
        };

        if matched.is_empty() {
            tracing::info!(fetched = report.fetched, "no hot items matched the keywords");
            return Ok(report);
        }

        let date = now.date();
        let mut sent = self.store.load(date);
        let new_items = sent.new_items(&matched);
        report.new_items = new_items.len();

        if new_items.is_empty() {
            tracing::info!(matched = report.matched, "all matches already sent today");
        } else if self.dry_run {
            tracing::info!(new_items = ?new_items, "dry run, skipping notification");
        } else {
            self.notifier
                .send(&new_items, now)
                .await
                .context("failed to send DingTalk notification")?;
            sent.extend(new_items);
            self.store
                .save(date, &sent)
                .context("failed to persist sent record")?;
            report.notified = true;
        }

        writeln!(out, "{}", matched.join("\n")).context("failed to write match listing")?;
        Ok(report)
    }
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
