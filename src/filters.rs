use crate::errors::AppError;
use crate::models::{ApplicationPage, ApplicationStatus, JobApplication};
use chrono::{Duration, Months, NaiveDate};
use serde::Deserialize;

pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ApplicationStatus),
}

impl StatusFilter {
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::trim) {
            None | Some("") | Some("all") => Ok(StatusFilter::All),
            Some(other) => ApplicationStatus::parse(other)
                .map(StatusFilter::Only)
                .ok_or_else(|| AppError::bad_request(format!("unknown status filter '{other}'"))),
        }
    }

    fn matches(self, status: ApplicationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub status: StatusFilter,
    pub date_range: DateRange,
}

/// Query string accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub date_range: Option<DateRange>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl ListQuery {
    pub fn filters(&self) -> Result<FilterState, AppError> {
        Ok(FilterState {
            status: StatusFilter::parse(self.status.as_deref())?,
            date_range: self.date_range.unwrap_or_default(),
        })
    }

    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

pub fn filter_applications(
    applications: &[JobApplication],
    search: &str,
    filters: &FilterState,
    today: NaiveDate,
) -> Vec<JobApplication> {
    let needle = search.trim().to_lowercase();
    let since = range_start(filters.date_range, today);

    applications
        .iter()
        .filter(|app| matches_search(app, &needle))
        .filter(|app| filters.status.matches(app.status))
        .filter(|app| match (filters.date_range, since) {
            (DateRange::Today, _) => app.date_applied == today,
            (_, Some(start)) => app.date_applied >= start,
            (_, None) => true,
        })
        .cloned()
        .collect()
}

fn matches_search(app: &JobApplication, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    app.company_name.to_lowercase().contains(needle)
        || app
            .position
            .as_deref()
            .is_some_and(|position| position.to_lowercase().contains(needle))
}

fn range_start(range: DateRange, today: NaiveDate) -> Option<NaiveDate> {
    match range {
        DateRange::All => None,
        DateRange::Today => Some(today),
        DateRange::Week => Some(today - Duration::days(7)),
        DateRange::Month => today.checked_sub_months(Months::new(1)),
    }
}

pub fn paginate(
    items: Vec<JobApplication>,
    page: Option<usize>,
    per_page: Option<usize>,
) -> Result<ApplicationPage, AppError> {
    let per_page = per_page.unwrap_or(DEFAULT_PAGE_SIZE);
    if !PAGE_SIZES.contains(&per_page) {
        return Err(AppError::bad_request(format!(
            "per_page must be one of {PAGE_SIZES:?}"
        )));
    }

    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.unwrap_or(1).clamp(1, total_pages);
    let items = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    Ok(ApplicationPage {
        items,
        page,
        per_page,
        total_items,
        total_pages,
    })
}
