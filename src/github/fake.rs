//! In-memory `IssueSearch` used by tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::github::error::SearchError;
use crate::github::search::IssueSearch;
use crate::github::types::{PullRequestRef, SearchPage};

/// Serves canned pages per query and records every page request.
///
/// Queries with no canned pages return a single empty page.
#[derive(Default)]
pub struct ScriptedSearch {
    pages: HashMap<String, Vec<SearchPage>>,
    failures: HashSet<(String, u32)>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl ScriptedSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the result pages for `query`, linked by their cursors
    pub fn with_pages(mut self, query: &str, pages: Vec<Vec<PullRequestRef>>) -> Self {
        let count = pages.len() as u32;
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, items)| {
                let page = i as u32 + 1;
                SearchPage {
                    items,
                    next_page: (page < count).then_some(page + 1),
                }
            })
            .collect();
        self.pages.insert(query.to_string(), pages);
        self
    }

    /// Make `page` of `query` fail with an API error
    pub fn failing_page(mut self, query: &str, page: u32) -> Self {
        self.failures.insert((query.to_string(), page));
        self
    }

    /// Pages requested for `query`, in request order
    pub fn requested_pages(&self, query: &str) -> Vec<u32> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(q, _)| q == query)
            .map(|(_, page)| *page)
            .collect()
    }

    /// Every query requested, in request order (one entry per page)
    pub fn requested_queries(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(q, _)| q.clone())
            .collect()
    }
}

impl IssueSearch for ScriptedSearch {
    async fn search_page(&self, query: &str, page: u32) -> Result<SearchPage, SearchError> {
        self.calls.lock().unwrap().push((query.to_string(), page));

        if self.failures.contains(&(query.to_string(), page)) {
            return Err(SearchError::Api("503 Service Unavailable".to_string()));
        }

        Ok(self
            .pages
            .get(query)
            .and_then(|pages| pages.get(page as usize - 1))
            .cloned()
            .unwrap_or_default())
    }
}
