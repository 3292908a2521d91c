use chrono::{Days, NaiveDate, Utc};

/// Length of the trailing window when nothing else is configured
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Today's date in UTC
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// The date range a report covers: `since` is `until` minus the window length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub since: NaiveDate,
    pub until: NaiveDate,
}

impl ReportWindow {
    /// Window of `days` days ending on `until`
    pub fn ending_at(until: NaiveDate, days: u32) -> Self {
        let since = until
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { since, until }
    }

    /// Window of `days` days ending today (UTC)
    pub fn trailing(days: u32) -> Self {
        Self::ending_at(today_utc(), days)
    }
}
