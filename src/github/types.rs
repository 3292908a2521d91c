use std::fmt;
use std::str::FromStr;

/// A repository identifier in "owner/name" form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    /// Repository name without the owner (the trailing path segment)
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        match parts.as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(format!("expected 'owner/name', got '{}'", s)),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Open/closed filter applied to a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrState {
    Open,
    Closed,
}

impl PrState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrState::Open => "open",
            PrState::Closed => "closed",
        }
    }
}

/// The part of a search result the report actually uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub title: String,
    pub url: String, // HTML URL, not the API URL
}

impl PullRequestRef {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Markdown link: "[title](url)"
    pub fn link(&self) -> String {
        format!("[{}]({})", self.title, self.url)
    }
}

/// One page of search results plus the cursor for the page after it
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub items: Vec<PullRequestRef>,
    pub next_page: Option<u32>,
}
