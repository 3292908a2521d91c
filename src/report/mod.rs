pub mod window;

pub use window::{ReportWindow, DEFAULT_WINDOW_DAYS};

use crate::github::{search_prs, IssueSearch, PrState, PullRequestRef, RepoId, SearchError};

/// Report section, in the order sections are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Working,
    Done,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Working, Category::Done];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Working => "Currently working on:",
            Category::Done => "Done since last week:",
        }
    }

    /// Which search state fills this section
    pub fn state(&self) -> PrState {
        match self {
            Category::Working => PrState::Open,
            Category::Done => PrState::Closed,
        }
    }
}

/// Formatted links for one repository within a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEntries {
    pub repo: RepoId,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: Category,
    pub repos: Vec<RepoEntries>,
}

/// Pull request activity for a watch-list over one window.
///
/// Sections follow `Category::ALL`; every section lists every repository in
/// watch-list order, even when it has no links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub window: ReportWindow,
    pub sections: Vec<Section>,
}

/// Build the report for `repositories` over `window`.
///
/// Searches each repository in order, open then closed. The first failed
/// search aborts the whole report.
pub async fn build_report<S>(
    client: &S,
    repositories: &[RepoId],
    window: ReportWindow,
) -> Result<Report, SearchError>
where
    S: IssueSearch + Sync,
{
    let mut sections: Vec<Section> = Category::ALL
        .iter()
        .map(|&category| Section {
            category,
            repos: Vec::with_capacity(repositories.len()),
        })
        .collect();

    for repo in repositories {
        for section in sections.iter_mut() {
            let state = section.category.state();
            let prs = search_prs(client, repo, window.since, state).await?;
            tracing::debug!(repo = %repo, state = state.as_str(), count = prs.len(), "searched pull requests");

            section.repos.push(RepoEntries {
                repo: repo.clone(),
                links: prs.iter().map(PullRequestRef::link).collect(),
            });
        }
    }

    Ok(Report { window, sections })
}
