// ABOUTME: Source configuration: listing URL, href inclusion predicate, and extraction strategy.
// ABOUTME: Built-in constructors cover the two supported career sites.

/// Which extraction strategy applies to a source's postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Every field is embedded in the listing anchor's rendered text;
    /// no detail pages are fetched.
    AnchorInline,
    /// The listing only yields URLs; each posting's detail page is fetched
    /// and mined separately.
    DetailPage,
}

/// A career-site source: where the listing lives, which anchors on it are
/// job postings, and how their fields are extracted.
#[derive(Debug, Clone)]
pub struct Source {
    pub name: String,
    pub listing_url: String,
    /// Href must start with this prefix to count as a posting link.
    pub href_prefix: String,
    /// Href must also contain this needle. Redundant with the prefix for
    /// the built-in sources but kept as an independent check so relative or
    /// mirrored links never slip through.
    pub href_needle: String,
    pub strategy: Strategy,
}

impl Source {
    /// Inclusion predicate applied to every anchor href on the listing page.
    pub fn matches(&self, href: &str) -> bool {
        href.starts_with(&self.href_prefix) && href.contains(&self.href_needle)
    }

    /// Ignitis Group career page: anchor-inline listing.
    pub fn ignitis() -> Self {
        Self {
            name: "ignitis".to_string(),
            listing_url: "https://ignitisgrupe.lt/karjera/darbo-skelbimai".to_string(),
            href_prefix: "https://ignitisgrupe.lt/darbo-skelbimai/".to_string(),
            href_needle: "/darbo-skelbimai/".to_string(),
            strategy: Strategy::AnchorInline,
        }
    }

    /// EPSO-G postings on SmartRecruiters: listing links out to detail pages.
    pub fn epsog() -> Self {
        Self {
            name: "epsog".to_string(),
            listing_url: "https://careers.smartrecruiters.com/EPSOG".to_string(),
            href_prefix: "https://jobs.smartrecruiters.com/EPSOG/".to_string(),
            href_needle: "/EPSOG/".to_string(),
            strategy: Strategy::DetailPage,
        }
    }

    /// All built-in sources, in reporting order.
    pub fn builtin() -> Vec<Self> {
        vec![Self::ignitis(), Self::epsog()]
    }
}
