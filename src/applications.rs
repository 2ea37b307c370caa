use crate::errors::AppError;
use crate::models::{AppData, ApplicationInput, ApplicationStatus, JobApplication, Platform};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// All applications, most recently applied first.
pub fn fetch_applications(data: &AppData) -> Vec<JobApplication> {
    let mut applications = data.applications.clone();
    sort_by_date_applied(&mut applications);
    applications
}

pub fn sort_by_date_applied(applications: &mut [JobApplication]) {
    applications.sort_by(|a, b| {
        b.date_applied
            .cmp(&a.date_applied)
            .then_with(|| b.id.cmp(&a.id))
    });
}

pub fn get_application(data: &AppData, id: i64) -> Result<&JobApplication, AppError> {
    data.applications
        .iter()
        .find(|app| app.id == id)
        .ok_or_else(|| AppError::application_not_found(id))
}

pub fn create_application(
    data: &mut AppData,
    input: ApplicationInput,
    now: DateTime<Utc>,
) -> Result<JobApplication, AppError> {
    let fields = EditableFields::from_input(input)?;
    let application = JobApplication {
        id: next_id(data, now)?,
        company_name: fields.company_name,
        position: fields.position,
        platform: fields.platform,
        custom_platform: fields.custom_platform,
        job_url: fields.job_url,
        date_applied: fields.date_applied,
        status: fields.status,
        created_at: now,
        updated_at: now,
    };

    data.applications.push(application.clone());
    Ok(application)
}

pub fn update_application(
    data: &mut AppData,
    id: i64,
    input: ApplicationInput,
    now: DateTime<Utc>,
) -> Result<JobApplication, AppError> {
    let fields = EditableFields::from_input(input)?;
    let app = find_mut(data, id)?;
    app.company_name = fields.company_name;
    app.position = fields.position;
    app.platform = fields.platform;
    app.custom_platform = fields.custom_platform;
    app.job_url = fields.job_url;
    app.date_applied = fields.date_applied;
    app.status = fields.status;
    app.updated_at = now;
    Ok(app.clone())
}

pub fn update_status(
    data: &mut AppData,
    id: i64,
    status: ApplicationStatus,
    now: DateTime<Utc>,
) -> Result<JobApplication, AppError> {
    let app = find_mut(data, id)?;
    app.status = status;
    app.updated_at = now;
    Ok(app.clone())
}

pub fn update_platform(
    data: &mut AppData,
    id: i64,
    platform: Option<Platform>,
    custom_platform: Option<String>,
    now: DateTime<Utc>,
) -> Result<JobApplication, AppError> {
    let app = find_mut(data, id)?;
    app.platform = platform;
    app.custom_platform = normalize_custom_platform(platform, custom_platform);
    app.updated_at = now;
    Ok(app.clone())
}

pub fn delete_application(data: &mut AppData, id: i64) -> Result<(), AppError> {
    let before = data.applications.len();
    data.applications.retain(|app| app.id != id);
    if data.applications.len() == before {
        return Err(AppError::application_not_found(id));
    }
    Ok(())
}

/// Sets `status` on every listed application; unknown ids are skipped.
pub fn bulk_update_status(
    data: &mut AppData,
    ids: &[i64],
    status: ApplicationStatus,
    now: DateTime<Utc>,
) -> usize {
    let wanted: HashSet<i64> = ids.iter().copied().collect();
    let mut updated = 0;
    for app in data.applications.iter_mut().filter(|app| wanted.contains(&app.id)) {
        app.status = status;
        app.updated_at = now;
        updated += 1;
    }
    updated
}

pub fn bulk_delete(data: &mut AppData, ids: &[i64]) -> usize {
    let wanted: HashSet<i64> = ids.iter().copied().collect();
    let before = data.applications.len();
    data.applications.retain(|app| !wanted.contains(&app.id));
    before - data.applications.len()
}

/// Ids are creation timestamps in milliseconds, bumped past the largest
/// existing id when two records land in the same millisecond.
pub fn next_id(data: &AppData, now: DateTime<Utc>) -> Result<i64, AppError> {
    let max_existing = data.applications.iter().map(|app| app.id).max();
    next_id_after(max_existing, now)
}

pub(crate) fn next_id_after(
    max_existing: Option<i64>,
    now: DateTime<Utc>,
) -> Result<i64, AppError> {
    let candidate = now.timestamp_millis();
    match max_existing {
        Some(max) if max >= candidate => max.checked_add(1).ok_or_else(|| {
            AppError::bad_request("no application ids left after the largest existing id")
        }),
        _ => Ok(candidate),
    }
}

fn find_mut(data: &mut AppData, id: i64) -> Result<&mut JobApplication, AppError> {
    data.applications
        .iter_mut()
        .find(|app| app.id == id)
        .ok_or_else(|| AppError::application_not_found(id))
}

struct EditableFields {
    company_name: String,
    position: Option<String>,
    platform: Option<Platform>,
    custom_platform: Option<String>,
    job_url: String,
    date_applied: chrono::NaiveDate,
    status: ApplicationStatus,
}

impl EditableFields {
    fn from_input(input: ApplicationInput) -> Result<Self, AppError> {
        let company_name = input.company_name.trim().to_string();
        if company_name.is_empty() {
            return Err(AppError::bad_request("companyName is required"));
        }
        let job_url = input.job_url.trim().to_string();
        if job_url.is_empty() {
            return Err(AppError::bad_request("jobUrl is required"));
        }

        Ok(Self {
            company_name,
            position: non_empty(input.position),
            platform: input.platform,
            custom_platform: normalize_custom_platform(input.platform, input.custom_platform),
            job_url,
            date_applied: input.date_applied,
            status: input.status,
        })
    }
}

pub(crate) fn normalize_custom_platform(
    platform: Option<Platform>,
    custom_platform: Option<String>,
) -> Option<String> {
    match platform {
        Some(Platform::Other) => non_empty(custom_platform),
        _ => None,
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 2, 12, 0, 0).unwrap()
    }

    fn input(company: &str, date: (i32, u32, u32)) -> ApplicationInput {
        ApplicationInput {
            company_name: company.to_string(),
            position: None,
            platform: None,
            custom_platform: None,
            job_url: format!("https://{}.example/jobs", company.to_lowercase()),
            date_applied: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            status: ApplicationStatus::Pending,
        }
    }

    #[test]
    fn create_assigns_unique_ids_within_same_millisecond() {
        let mut data = AppData::default();
        let first = create_application(&mut data, input("Acme", (2026, 4, 1)), now()).unwrap();
        let second = create_application(&mut data, input("Globex", (2026, 4, 1)), now()).unwrap();

        assert_eq!(first.id, now().timestamp_millis());
        assert_eq!(second.id, first.id + 1);
        assert_eq!(first.created_at, now());
        assert_eq!(first.updated_at, now());
    }

    #[test]
    fn create_fails_cleanly_when_ids_are_exhausted() {
        let mut data = AppData::default();
        let app = create_application(&mut data, input("Acme", (2026, 4, 1)), now()).unwrap();
        data.applications[0].id = i64::MAX;

        let err =
            create_application(&mut data, input("Globex", (2026, 4, 1)), now()).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(data.applications.len(), 1);
        assert_eq!(next_id_after(Some(app.id), now()).unwrap(), app.id + 1);
    }

    #[test]
    fn create_rejects_blank_required_fields() {
        let mut data = AppData::default();
        let err = create_application(&mut data, input("   ", (2026, 4, 1)), now()).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);

        let mut missing_url = input("Acme", (2026, 4, 1));
        missing_url.job_url = String::new();
        assert!(create_application(&mut data, missing_url, now()).is_err());
        assert!(data.applications.is_empty());
    }

    #[test]
    fn blank_position_and_stray_custom_platform_are_dropped() {
        let mut data = AppData::default();
        let mut form = input("Acme", (2026, 4, 1));
        form.position = Some("  ".to_string());
        form.platform = Some(Platform::Linkedin);
        form.custom_platform = Some("Hacker News".to_string());

        let app = create_application(&mut data, form, now()).unwrap();
        assert_eq!(app.position, None);
        assert_eq!(app.custom_platform, None);

        let updated = update_platform(
            &mut data,
            app.id,
            Some(Platform::Other),
            Some("Hacker News".to_string()),
            now(),
        )
        .unwrap();
        assert_eq!(updated.custom_platform.as_deref(), Some("Hacker News"));
        assert_eq!(updated.platform_label(), "Hacker News");
    }

    #[test]
    fn update_keeps_identity_and_creation_time() {
        let mut data = AppData::default();
        let app = create_application(&mut data, input("Acme", (2026, 4, 1)), now()).unwrap();
        let later = now() + Duration::hours(3);

        let mut form = input("Acme Corp", (2026, 4, 1));
        form.status = ApplicationStatus::Interview;
        let updated = update_application(&mut data, app.id, form, later).unwrap();

        assert_eq!(updated.id, app.id);
        assert_eq!(updated.created_at, app.created_at);
        assert_eq!(updated.updated_at, later);
        assert_eq!(updated.company_name, "Acme Corp");
        assert_eq!(updated.status, ApplicationStatus::Interview);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut data = AppData::default();
        let err = update_status(&mut data, 42, ApplicationStatus::Accepted, now()).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
        assert!(delete_application(&mut data, 42).is_err());
        assert!(get_application(&data, 42).is_err());
    }

    #[test]
    fn fetch_sorts_newest_application_first() {
        let mut data = AppData::default();
        create_application(&mut data, input("Old", (2026, 1, 10)), now()).unwrap();
        create_application(&mut data, input("New", (2026, 3, 10)), now()).unwrap();
        create_application(&mut data, input("Mid", (2026, 2, 10)), now()).unwrap();

        let names: Vec<_> = fetch_applications(&data)
            .into_iter()
            .map(|app| app.company_name)
            .collect();
        assert_eq!(names, vec!["New", "Mid", "Old"]);
    }

    #[test]
    fn bulk_operations_skip_unknown_ids() {
        let mut data = AppData::default();
        let a = create_application(&mut data, input("A", (2026, 1, 1)), now()).unwrap();
        let b = create_application(&mut data, input("B", (2026, 1, 2)), now()).unwrap();
        create_application(&mut data, input("C", (2026, 1, 3)), now()).unwrap();

        let updated =
            bulk_update_status(&mut data, &[a.id, b.id, 7], ApplicationStatus::Rejected, now());
        assert_eq!(updated, 2);
        assert_eq!(
            get_application(&data, b.id).unwrap().status,
            ApplicationStatus::Rejected
        );

        let deleted = bulk_delete(&mut data, &[a.id, 7]);
        assert_eq!(deleted, 1);
        assert_eq!(data.applications.len(), 2);
    }
}
