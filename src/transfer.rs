//! JSON backup import/export and the spreadsheet (CSV) export.

use crate::applications::{
    next_id_after, non_empty, normalize_custom_platform, sort_by_date_applied,
};
use crate::errors::AppError;
use crate::models::{AppData, ApplicationStatus, JobApplication, Platform};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::HashSet;

pub const JSON_EXPORT_FILENAME: &str = "job-applications-backup.json";
pub const CSV_EXPORT_FILENAME: &str = "job-applications.csv";

const CSV_COLUMNS: [&str; 8] = [
    "Company Name",
    "Position",
    "Platform",
    "Job URL",
    "Date Applied",
    "Status",
    "Created At",
    "Updated At",
];

pub fn export_json(data: &AppData) -> Result<String, AppError> {
    let mut applications = data.applications.clone();
    sort_by_date_applied(&mut applications);
    serde_json::to_string_pretty(&applications).map_err(AppError::internal)
}

pub fn export_csv(data: &AppData) -> String {
    let mut applications = data.applications.clone();
    sort_by_date_applied(&mut applications);

    let mut lines = Vec::with_capacity(applications.len() + 1);
    lines.push(
        CSV_COLUMNS
            .iter()
            .map(|column| csv_escape(column))
            .collect::<Vec<_>>()
            .join(","),
    );
    for app in &applications {
        let row = [
            app.company_name.clone(),
            app.position.clone().unwrap_or_default(),
            app.platform_label(),
            app.job_url.clone(),
            app.date_applied.format("%Y-%m-%d").to_string(),
            app.status.label().to_string(),
            app.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            app.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ];
        lines.push(
            row.iter()
                .map(|value| csv_escape(value))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

fn csv_escape(value: &str) -> String {
    let safe = neutralize_formula(value);
    if safe.contains(',') || safe.contains('"') || safe.contains('\n') || safe.contains('\r') {
        format!("\"{}\"", safe.replace('"', "\"\""))
    } else {
        safe
    }
}

fn neutralize_formula(value: &str) -> String {
    match value.chars().next() {
        Some('=' | '+' | '-' | '@') => format!("'{value}"),
        _ => value.to_string(),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportRecord {
    id: Option<i64>,
    company_name: Option<String>,
    position: Option<String>,
    platform: Option<String>,
    custom_platform: Option<String>,
    job_url: Option<String>,
    date_applied: Option<String>,
    status: Option<String>,
    #[serde(rename = "created_at")]
    created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updated_at")]
    updated_at: Option<DateTime<Utc>>,
}

/// Parses and validates a JSON backup. Nothing is returned unless every
/// record is valid, so callers can replace their store wholesale.
pub fn import_json(text: &str, now: DateTime<Utc>) -> Result<Vec<JobApplication>, AppError> {
    let parsed: serde_json::Value = serde_json::from_str(text)
        .map_err(|err| AppError::bad_request(format!("Invalid JSON: {err}")))?;
    let serde_json::Value::Array(items) = parsed else {
        return Err(AppError::bad_request("Invalid JSON format: expected an array"));
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let mut record: ImportRecord = serde_json::from_value(item)
            .map_err(|err| AppError::bad_request(format!("record {index}: {err}")))?;
        // A zero id counts as unset.
        record.id = record.id.filter(|id| *id != 0);
        records.push(record);
    }

    let mut seen = HashSet::new();
    for id in records.iter().filter_map(|record| record.id) {
        if !seen.insert(id) {
            return Err(AppError::bad_request(format!(
                "duplicate id {id} in import data"
            )));
        }
    }

    let mut max_id = seen.iter().copied().max();
    let mut applications = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let id = match record.id {
            Some(id) => id,
            None => {
                let id = next_id_after(max_id, now)?;
                max_id = Some(id);
                id
            }
        };
        let app = validate_record(record, id, now)
            .map_err(|message| AppError::bad_request(format!("record {index}: {message}")))?;
        applications.push(app);
    }

    Ok(applications)
}

fn validate_record(
    record: ImportRecord,
    id: i64,
    now: DateTime<Utc>,
) -> Result<JobApplication, String> {
    let (Some(company_name), Some(job_url), Some(date_applied), Some(status)) = (
        non_empty(record.company_name),
        non_empty(record.job_url),
        non_empty(record.date_applied),
        non_empty(record.status),
    ) else {
        return Err(
            "missing required fields (companyName, jobUrl, dateApplied, status)".to_string(),
        );
    };

    let status =
        ApplicationStatus::parse(&status).ok_or_else(|| format!("unknown status '{status}'"))?;
    let date_applied = parse_date(&date_applied)
        .ok_or_else(|| format!("invalid dateApplied '{date_applied}'"))?;
    let platform = match non_empty(record.platform) {
        Some(raw) => {
            Some(parse_platform(&raw).ok_or_else(|| format!("unknown platform '{raw}'"))?)
        }
        None => None,
    };

    Ok(JobApplication {
        id,
        company_name,
        position: non_empty(record.position),
        platform,
        custom_platform: normalize_custom_platform(platform, record.custom_platform),
        job_url,
        date_applied,
        status,
        created_at: record.created_at.unwrap_or(now),
        updated_at: record.updated_at.unwrap_or(now),
    })
}

/// Accepts plain dates as well as full timestamps.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

fn parse_platform(value: &str) -> Option<Platform> {
    serde_json::from_value(serde_json::Value::String(value.to_string())).ok()
}
