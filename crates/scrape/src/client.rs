// ABOUTME: The scrape Client driving the two-stage pipeline: fetch listing, then per-item extraction.
// ABOUTME: Listing failures are source-fatal; detail-item failures are logged and skipped.

use scraper::Html;
use tracing::{debug, info, warn};

use crate::detail::extract_detail;
use crate::discovery::{anchor_segments, discover_links, matching_anchors};
use crate::error::ScrapeError;
use crate::options::{ClientBuilder, Options};
use crate::record::{assemble, JobRecord};
use crate::resource::{fetch, FetchOptions};
use crate::segmenter::segment;
use crate::source::{Source, Strategy};

/// The scrape client. One instance drives any number of sources.
pub struct Client {
    opts: Options,
    http: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .cookie_store(true)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });
        Self { opts, http }
    }

    fn fetch_opts(&self) -> FetchOptions {
        FetchOptions {
            headers: self.opts.headers.clone(),
            allow_private_networks: self.opts.allow_private_networks,
        }
    }

    /// Scrape one source into an ordered, validated, de-duplicated record
    /// collection.
    ///
    /// The listing fetch is the entry point: its failure is fatal to the
    /// source and surfaces as `Err`. Per-posting failures on detail-page
    /// sources never do; those items are logged and skipped.
    pub async fn scrape(&self, source: &Source) -> Result<Vec<JobRecord>, ScrapeError> {
        let listing = fetch(&self.http, &source.listing_url, &self.fetch_opts()).await?;
        let html = listing.text_utf8(None)?;

        let records = match source.strategy {
            Strategy::AnchorInline => scrape_inline(&html, source),
            Strategy::DetailPage => self.scrape_details(&html, source).await,
        };

        Ok(assemble(records))
    }

    /// Fetch every discovered posting page sequentially, pacing between
    /// requests. The pacing sleep is skipped before the first fetch and
    /// never trails the last one.
    async fn scrape_details(&self, html: &str, source: &Source) -> Vec<JobRecord> {
        // Parse in a block so the non-Send document never lives across an await.
        let urls = {
            let doc = Html::parse_document(html);
            discover_links(&doc, source)
        };
        info!(source = %source.name, count = urls.len(), "discovered postings");

        let mut records = Vec::with_capacity(urls.len());
        for (i, url) in urls.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.opts.pacing).await;
            }
            debug!(url = %url, "fetching posting {}/{}", i + 1, urls.len());
            match self.fetch_detail(url).await {
                Ok(record) => records.push(record),
                Err(err) => warn!(url = %url, error = %err, "skipping posting"),
            }
        }
        records
    }

    async fn fetch_detail(&self, url: &str) -> Result<JobRecord, ScrapeError> {
        let fetched = fetch(&self.http, url, &self.fetch_opts()).await?;
        let html = fetched.text_utf8(None)?;
        Ok(extract_detail(&html, url))
    }
}

/// Build one record per matching anchor, straight from the anchor's
/// segmented text. No further fetches.
fn scrape_inline(html: &str, source: &Source) -> Vec<JobRecord> {
    let doc = Html::parse_document(html);
    matching_anchors(&doc, source)
        .into_iter()
        .filter_map(|el| {
            let url = el.value().attr("href")?.trim().to_string();
            let fields = segment(&anchor_segments(el));
            Some(JobRecord {
                url,
                title: fields.title,
                company_tag: fields.company_tag,
                location: fields.location,
                work_type: fields.work_type,
                salary: fields.salary,
                department: None,
                remote_work: false,
                description: None,
            })
        })
        .collect()
}
