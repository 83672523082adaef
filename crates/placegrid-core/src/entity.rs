//! Entity records produced by the search and enrichment stages.

use serde::{Deserialize, Serialize};

/// Minimal identity record returned by a point search.
///
/// `entity_id` is the upstream place identifier, stable for the same physical
/// business across repeated queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    pub entity_id: String,
}

impl SearchResult {
    #[must_use]
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
        }
    }
}

/// Outcome of searching from a single grid point.
///
/// `limit_reached` means the point hit the per-query unique cap; it is the
/// trigger for subdividing the area around that point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub unique_entities: Vec<SearchResult>,
    /// Rows seen across all pages, including duplicates and rows without an id.
    pub raw_count: usize,
    pub limit_reached: bool,
}

/// Full attribute record for one entity, built from a details lookup.
///
/// Every attribute is optional: the upstream API omits fields freely and a
/// missing field is never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedEntity {
    pub entity_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub rating: Option<f64>,
    pub rating_count: Option<u64>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl EnrichedEntity {
    /// Classifies the `website` field. See [`WebsiteKind::classify`].
    #[must_use]
    pub fn website_kind(&self) -> WebsiteKind {
        WebsiteKind::classify(self.website.as_deref())
    }
}

/// What kind of link a business lists as its website.
///
/// Many small businesses list a social profile instead of a site, which
/// matters to the contact-enrichment step downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebsiteKind {
    None,
    Website,
    Facebook,
    Instagram,
    OtherSocial,
}

impl WebsiteKind {
    const FACEBOOK_HOSTS: &'static [&'static str] = &["facebook.com", "fb.com"];
    const INSTAGRAM_HOSTS: &'static [&'static str] = &["instagram.com", "instagr.am"];
    const OTHER_SOCIAL_HOSTS: &'static [&'static str] =
        &["twitter.com", "linkedin.com", "youtube.com", "tiktok.com"];

    #[must_use]
    pub fn classify(url: Option<&str>) -> Self {
        let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
            return Self::None;
        };
        let Some(host) = host_of(url) else {
            return Self::Website;
        };
        let hits = |domains: &[&str]| {
            domains.iter().any(|d| {
                host == *d
                    || host
                        .strip_suffix(*d)
                        .is_some_and(|rest| rest.ends_with('.'))
            })
        };

        if hits(Self::FACEBOOK_HOSTS) {
            Self::Facebook
        } else if hits(Self::INSTAGRAM_HOSTS) {
            Self::Instagram
        } else if hits(Self::OTHER_SOCIAL_HOSTS) {
            Self::OtherSocial
        } else {
            Self::Website
        }
    }
}

/// Lowercased host of `url`; a bare `example.com/page` is read as https.
fn host_of(url: &str) -> Option<String> {
    let parsed = if url.contains("://") {
        reqwest::Url::parse(url)
    } else {
        reqwest::Url::parse(&format!("https://{url}"))
    };
    parsed
        .ok()?
        .host_str()
        .map(|h| h.trim_end_matches('.').to_ascii_lowercase())
}
