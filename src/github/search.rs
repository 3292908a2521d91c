use chrono::NaiveDate;
use octocrab::Octocrab;
use std::future::Future;

use crate::github::error::SearchError;
use crate::github::types::{PrState, PullRequestRef, RepoId, SearchPage};

/// Results requested per page (the search API maximum)
pub const PER_PAGE: u8 = 100;

/// A source of issue-search result pages.
///
/// Implemented by `Octocrab` for the real API; the pagination loop and the
/// report builder only ever talk to this trait.
pub trait IssueSearch {
    /// Fetch a single 1-based page of results for `query`
    fn search_page(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<SearchPage, SearchError>> + Send;
}

impl IssueSearch for Octocrab {
    async fn search_page(&self, query: &str, page: u32) -> Result<SearchPage, SearchError> {
        let results = self
            .search()
            .issues_and_pull_requests(query)
            .per_page(PER_PAGE)
            .page(page)
            .send()
            .await?;

        let next_page = results.next.as_ref().map(|_| page + 1);

        let items = results
            .items
            .into_iter()
            .filter(|issue| issue.pull_request.is_some()) // Only PRs, not issues
            .map(|issue| PullRequestRef {
                title: issue.title,
                url: issue.html_url.to_string(),
            })
            .collect();

        Ok(SearchPage { items, next_page })
    }
}

/// Build the search query for one repository, state and window start
pub fn build_query(repo: &RepoId, since: NaiveDate, state: PrState) -> String {
    format!(
        "repo:{} is:pr updated:>={} is:{}",
        repo,
        since.format("%Y-%m-%d"),
        state.as_str()
    )
}

/// Search a repository for pull requests updated since `since` in the given state.
///
/// Follows the pagination cursor until the last page and returns every page's
/// items in order. The first failing page fails the whole search.
pub async fn search_prs<S>(
    client: &S,
    repo: &RepoId,
    since: NaiveDate,
    state: PrState,
) -> Result<Vec<PullRequestRef>, SearchError>
where
    S: IssueSearch + Sync,
{
    let query = build_query(repo, since, state);
    let mut all_prs = Vec::new();
    let mut page = 1;

    loop {
        let results = client.search_page(&query, page).await?;
        tracing::trace!(query = %query, page, count = results.items.len(), "fetched search page");
        all_prs.extend(results.items);

        match results.next_page {
            Some(next) => page = next,
            None => break,
        }
    }

    Ok(all_prs)
}
