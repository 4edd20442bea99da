use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use scraper::Html;
use tracing::{error, info, warn};
use url::Url;

use crate::extractor::{self, PageExtraction};
use crate::traits::{PageFetcher, RecordSink, StoreOutcome};

/// Totals of one traversal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub pages: u32,
    pub stored: usize,
    pub duplicates: usize,
    pub variant_failures: usize,
    pub sink_failures: usize,
}

/// Walks the catalog from a start page through its "next" links
pub struct Crawler<F, S> {
    fetcher: F,
    sink: S,
    request_delay: Duration,
    max_pages: Option<u32>,
}

impl<F, S> Crawler<F, S>
where
    F: PageFetcher,
    S: RecordSink,
{
    pub fn new(fetcher: F, sink: S) -> Self {
        Self {
            fetcher,
            sink,
            request_delay: Duration::ZERO,
            max_pages: None,
        }
    }

    #[must_use]
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    #[must_use]
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Follows the catalog until a page has no next link.
    ///
    /// A fetch or page error stops the traversal; records already stored
    /// stay stored. Variant and sink failures are logged and counted. A next
    /// link to an already visited page ends the traversal.
    pub async fn run(&self, start: Url) -> Result<CrawlSummary> {
        let mut summary = CrawlSummary::default();

        let outcome = self.walk(start, &mut summary).await;
        let report = format!(
            "{} pages, {} records stored, {} duplicates, {} failed variants, {} failed stores",
            summary.pages,
            summary.stored,
            summary.duplicates,
            summary.variant_failures,
            summary.sink_failures
        );

        match outcome {
            Ok(()) => {
                info!("Crawl finished: {}", report);
                Ok(summary)
            }
            Err(e) => {
                error!("Crawl stopped: {} ({})", e, report);
                Err(e.context(format!("crawl stopped after {report}")))
            }
        }
    }

    async fn walk(&self, start: Url, summary: &mut CrawlSummary) -> Result<()> {
        let mut visited = HashSet::new();
        let mut current_url = start;

        loop {
            if let Some(max_pages) = self.max_pages
                && summary.pages >= max_pages
            {
                info!("Reached maximum page limit ({}), stopping", max_pages);
                return Ok(());
            }

            visited.insert(current_url.clone());

            let html = self.fetcher.fetch(&current_url).await?;
            summary.pages += 1;

            // Html is not Send, so it must be dropped before the next await
            let extraction = {
                let document = Html::parse_document(&html);
                extractor::extract_page(&document, &current_url)?
            };

            match self.store_page(extraction, summary).await {
                Some(next_url) if visited.contains(&next_url) => {
                    warn!(
                        "Next page {} after {} was already visited, stopping",
                        next_url, current_url
                    );
                    return Ok(());
                }
                Some(next_url) => {
                    current_url = next_url;
                    if !self.request_delay.is_zero() {
                        tokio::time::sleep(self.request_delay).await;
                    }
                }
                None => {
                    info!("No next page after {} ({} pages crawled)", current_url, summary.pages);
                    return Ok(());
                }
            }
        }
    }

    async fn store_page(&self, extraction: PageExtraction, summary: &mut CrawlSummary) -> Option<Url> {
        let PageExtraction {
            page,
            records,
            failures,
            next,
        } = extraction;

        for failure in &failures {
            warn!("{}: skipping variant {} ({}): {}", page, failure.position, failure.label, failure.error);
        }
        summary.variant_failures += failures.len();

        for record in records {
            match self.sink.store(&record).await {
                Ok(StoreOutcome::Inserted) => {
                    info!("{}", record.progress_line());
                    summary.stored += 1;
                }
                Ok(StoreOutcome::Duplicate) => {
                    info!("Already stored: {}", record.record_label);
                    summary.duplicates += 1;
                }
                Err(e) => {
                    error!("{}: failed to store {}: {}", page, record.record_label, e);
                    summary.sink_failures += 1;
                }
            }
        }

        next
    }
}
