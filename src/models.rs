use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Rejected,
    Accepted,
    NeverResponded,
    Interview,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Rejected,
        ApplicationStatus::Accepted,
        ApplicationStatus::NeverResponded,
        ApplicationStatus::Interview,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::NeverResponded => "never_responded",
            ApplicationStatus::Interview => "interview",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::NeverResponded => "Never Responded",
            ApplicationStatus::Interview => "Interview",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    GoogleJobs,
    Linkedin,
    Indeed,
    Glassdoor,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::GoogleJobs,
        Platform::Linkedin,
        Platform::Indeed,
        Platform::Glassdoor,
        Platform::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Platform::GoogleJobs => "Google Jobs",
            Platform::Linkedin => "LinkedIn",
            Platform::Indeed => "Indeed",
            Platform::Glassdoor => "Glassdoor",
            Platform::Other => "Other",
        }
    }
}

/// One tracked application. Field names match the JSON backup format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: i64,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_platform: Option<String>,
    pub job_url: String,
    pub date_applied: NaiveDate,
    pub status: ApplicationStatus,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

impl JobApplication {
    /// Display name of the platform, preferring the custom name for `other`.
    pub fn platform_label(&self) -> String {
        match (self.platform, self.custom_platform.as_deref()) {
            (Some(Platform::Other), Some(custom)) => custom.to_string(),
            (Some(platform), _) => platform.label().to_string(),
            (None, _) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub applications: Vec<JobApplication>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInput {
    // Missing text fields fall through to the blank-field check.
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub custom_platform: Option<String>,
    #[serde(default)]
    pub job_url: String,
    pub date_applied: NaiveDate,
    #[serde(default)]
    pub status: ApplicationStatus,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: ApplicationStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformRequest {
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub custom_platform: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BulkStatusRequest {
    pub ids: Vec<i64>,
    pub status: ApplicationStatus,
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BulkUpdatedResponse {
    pub updated: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BulkDeletedResponse {
    pub deleted: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DescriptionResponse {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplicationPage {
    pub items: Vec<JobApplication>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartSlice {
    pub key: String,
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total: usize,
    pub accepted: usize,
    pub success_rate: String,
    pub status_distribution: Vec<ChartSlice>,
    pub platform_distribution: Vec<ChartSlice>,
}
