// ABOUTME: Main library entry point for the darbai career-site scrape engine.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Source, JobRecord, ScrapeError.

//! darbai-scrape - an extraction engine for two fixed career-site layouts.
//!
//! The engine fetches a source's listing page, discovers its postings, and
//! normalizes each into a [`JobRecord`] through one of two strategies:
//! segmenting a listing anchor's own text, or mining a fetched detail page
//! with per-field fallback chains.
//!
//! # Example
//!
//! ```no_run
//! use darbai_scrape::{Client, Source, ScrapeError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScrapeError> {
//!     let client = Client::builder().build();
//!     let records = client.scrape(&Source::ignitis()).await?;
//!     println!("{} postings", records.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod detail;
pub mod discovery;
pub mod error;
pub mod gazetteer;
pub mod options;
pub mod record;
pub mod resource;
pub mod segmenter;
pub mod source;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::options::{ClientBuilder, Options};
pub use crate::record::{assemble, JobRecord};
pub use crate::segmenter::{AnchorFields, TitleLead};
pub use crate::source::{Source, Strategy};
