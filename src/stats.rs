use crate::models::{AppData, ApplicationStatus, ChartSlice, Platform, StatsResponse};

const STATUS_ORDER: [ApplicationStatus; 5] = [
    ApplicationStatus::Accepted,
    ApplicationStatus::Rejected,
    ApplicationStatus::Pending,
    ApplicationStatus::Interview,
    ApplicationStatus::NeverResponded,
];

pub fn build_stats(data: &AppData) -> StatsResponse {
    let applications = &data.applications;
    let total = applications.len();
    let accepted = applications
        .iter()
        .filter(|app| app.status == ApplicationStatus::Accepted)
        .count();

    let status_distribution = STATUS_ORDER
        .iter()
        .map(|&status| ChartSlice {
            key: status.as_str().to_string(),
            label: status.label().to_string(),
            value: applications.iter().filter(|app| app.status == status).count(),
        })
        .filter(|slice| slice.value > 0)
        .collect();

    let mut platform_distribution: Vec<ChartSlice> = Platform::ALL
        .iter()
        .map(|&platform| ChartSlice {
            key: platform_key(platform).to_string(),
            label: platform.label().to_string(),
            value: applications
                .iter()
                .filter(|app| app.platform == Some(platform))
                .count(),
        })
        .collect();
    platform_distribution.push(ChartSlice {
        key: "unspecified".to_string(),
        label: "Unspecified".to_string(),
        value: applications.iter().filter(|app| app.platform.is_none()).count(),
    });
    platform_distribution.retain(|slice| slice.value > 0);

    StatsResponse {
        total,
        accepted,
        success_rate: success_rate(accepted, total),
        status_distribution,
        platform_distribution,
    }
}

fn success_rate(accepted: usize, total: usize) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", accepted as f64 / total as f64 * 100.0)
}

fn platform_key(platform: Platform) -> &'static str {
    match platform {
        Platform::GoogleJobs => "google_jobs",
        Platform::Linkedin => "linkedin",
        Platform::Indeed => "indeed",
        Platform::Glassdoor => "glassdoor",
        Platform::Other => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobApplication;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn app(id: i64, status: ApplicationStatus, platform: Option<Platform>) -> JobApplication {
        let ts = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap();
        JobApplication {
            id,
            company_name: format!("Company {id}"),
            position: None,
            platform,
            custom_platform: None,
            job_url: "https://example.com".to_string(),
            date_applied: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            status,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn empty_store_has_zero_rate_and_no_slices() {
        let stats = build_stats(&AppData::default());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.accepted, 0);
        assert_eq!(stats.success_rate, "0.0");
        assert!(stats.status_distribution.is_empty());
        assert!(stats.platform_distribution.is_empty());
    }

    #[test]
    fn success_rate_uses_one_decimal() {
        let data = AppData {
            applications: vec![
                app(1, ApplicationStatus::Accepted, None),
                app(2, ApplicationStatus::Rejected, None),
                app(3, ApplicationStatus::Pending, None),
            ],
        };
        let stats = build_stats(&data);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.success_rate, "33.3");
    }

    #[test]
    fn distributions_skip_empty_slices_in_fixed_order() {
        let data = AppData {
            applications: vec![
                app(1, ApplicationStatus::Pending, Some(Platform::Indeed)),
                app(2, ApplicationStatus::Interview, Some(Platform::Linkedin)),
                app(3, ApplicationStatus::Pending, None),
                app(4, ApplicationStatus::Accepted, Some(Platform::Linkedin)),
            ],
        };
        let stats = build_stats(&data);

        let statuses: Vec<_> = stats
            .status_distribution
            .iter()
            .map(|slice| (slice.key.as_str(), slice.value))
            .collect();
        assert_eq!(statuses, vec![("accepted", 1), ("pending", 2), ("interview", 1)]);

        let platforms: Vec<_> = stats
            .platform_distribution
            .iter()
            .map(|slice| (slice.label.as_str(), slice.value))
            .collect();
        assert_eq!(
            platforms,
            vec![("LinkedIn", 2), ("Indeed", 1), ("Unspecified", 1)]
        );
    }
}
