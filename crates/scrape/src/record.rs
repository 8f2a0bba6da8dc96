// ABOUTME: JobRecord struct holding one normalized job posting plus acceptance and dedup.
// ABOUTME: Records are assembled once per discovered item and immutable once emitted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One normalized job posting.
///
/// `url` is the unique key. `title` and `url` are required for a record to
/// be accepted; everything else is best-effort and absent when no
/// extraction tier matched. Fields serialize as `null` when absent so the
/// persisted JSON keeps a stable shape across sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct JobRecord {
    pub url: String,
    pub title: String,
    /// Short lowercase organizational classifier (≤ 4 chars), stripped from
    /// the front of the title text when present.
    pub company_tag: Option<String>,
    pub location: Option<String>,
    pub work_type: Option<String>,
    pub salary: Option<String>,
    pub department: Option<String>,
    #[serde(default)]
    pub remote_work: bool,
    pub description: Option<String>,
}

impl JobRecord {
    /// Acceptance check: a record enters a result collection only with a
    /// non-empty title and URL.
    pub fn is_acceptable(&self) -> bool {
        !self.title.is_empty() && !self.url.is_empty()
    }
}

/// Final assembly pass: drop unacceptable records silently, then
/// de-duplicate by URL keeping the first occurrence, preserving discovery
/// order.
pub fn assemble(records: Vec<JobRecord>) -> Vec<JobRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        if !record.is_acceptable() {
            continue;
        }
        if seen.insert(record.url.clone()) {
            out.push(record);
        }
    }
    out
}
