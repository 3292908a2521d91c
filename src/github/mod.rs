pub mod client;
pub mod error;
pub mod search;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use client::create_client;
pub use error::SearchError;
pub use search::{build_query, search_prs, IssueSearch, PER_PAGE};
pub use types::{PrState, PullRequestRef, RepoId, SearchPage};
