use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    match env::var("APP_DATA_PATH") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from("data/applications.json"),
    }
}

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file {}: {err}", path.display());
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            AppData::default()
        }
    }
}

/// Writes the whole store, replacing the previous file only once the new
/// contents are fully on disk.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload).await?;
    fs::rename(&tmp_path, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApplicationStatus, JobApplication};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample() -> JobApplication {
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        JobApplication {
            id: 1,
            company_name: "Acme".to_string(),
            position: Some("Engineer".to_string()),
            platform: None,
            custom_platform: None,
            job_url: "https://acme.example/jobs/1".to_string(),
            date_applied: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            status: ApplicationStatus::Pending,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[tokio::test]
    async fn missing_file_loads_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let data = load_data(&dir.path().join("absent.json")).await;
        assert!(data.applications.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{ not json").unwrap();
        let data = load_data(&path).await;
        assert!(data.applications.is_empty());
    }

    #[tokio::test]
    async fn persist_creates_parent_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/store/applications.json");
        let data = AppData {
            applications: vec![sample()],
        };

        persist_data(&path, &data).await.unwrap();
        let loaded = load_data(&path).await;

        assert_eq!(loaded.applications, data.applications);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn persisted_file_uses_backup_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("applications.json");
        let data = AppData {
            applications: vec![sample()],
        };

        persist_data(&path, &data).await.unwrap();
        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        let record = &raw["applications"][0];

        assert_eq!(record["companyName"], "Acme");
        assert_eq!(record["jobUrl"], "https://acme.example/jobs/1");
        assert_eq!(record["dateApplied"], "2026-03-01");
        assert!(record.get("created_at").is_some());
        assert!(record.get("platform").is_none());
    }
}
