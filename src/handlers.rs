use crate::applications;
use crate::description::scrape_job_description;
use crate::errors::AppError;
use crate::filters::{ListQuery, filter_applications, paginate};
use crate::models::{
    ApplicationInput, ApplicationPage, BulkDeleteRequest, BulkDeletedResponse, BulkStatusRequest,
    BulkUpdatedResponse, DescriptionResponse, ImportResponse, JobApplication, PlatformRequest,
    StatsResponse, StatusRequest,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::transfer::{self, CSV_EXPORT_FILENAME, JSON_EXPORT_FILENAME};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use chrono::{Local, Utc};
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(&Local::now().date_naive().to_string()))
}

pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApplicationPage>, AppError> {
    let filters = query.filters()?;
    let sorted = {
        let data = state.data.lock().await;
        applications::fetch_applications(&data)
    };
    let today = Local::now().date_naive();
    let filtered = filter_applications(&sorted, query.search(), &filters, today);
    Ok(Json(paginate(filtered, query.page, query.per_page)?))
}

pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JobApplication>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(applications::get_application(&data, id)?.clone()))
}

pub async fn create_application(
    State(state): State<AppState>,
    Json(input): Json<ApplicationInput>,
) -> Result<(StatusCode, Json<JobApplication>), AppError> {
    let created = state
        .mutate(|data| applications::create_application(data, input, Utc::now()))
        .await?;
    info!(id = created.id, company = %created.company_name, "application created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_application(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ApplicationInput>,
) -> Result<Json<JobApplication>, AppError> {
    let updated = state
        .mutate(|data| applications::update_application(data, id, input, Utc::now()))
        .await?;
    info!(id, "application updated");
    Ok(Json(updated))
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusRequest>,
) -> Result<Json<JobApplication>, AppError> {
    let updated = state
        .mutate(|data| applications::update_status(data, id, payload.status, Utc::now()))
        .await?;
    info!(id, status = updated.status.as_str(), "application status changed");
    Ok(Json(updated))
}

pub async fn update_platform(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PlatformRequest>,
) -> Result<Json<JobApplication>, AppError> {
    let updated = state
        .mutate(|data| {
            applications::update_platform(
                data,
                id,
                payload.platform,
                payload.custom_platform,
                Utc::now(),
            )
        })
        .await?;
    info!(id, platform = %updated.platform_label(), "application platform changed");
    Ok(Json(updated))
}

pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state
        .mutate(|data| applications::delete_application(data, id))
        .await?;
    info!(id, "application deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn bulk_status(
    State(state): State<AppState>,
    Json(payload): Json<BulkStatusRequest>,
) -> Result<Json<BulkUpdatedResponse>, AppError> {
    let updated = state
        .mutate(|data| {
            Ok(applications::bulk_update_status(
                data,
                &payload.ids,
                payload.status,
                Utc::now(),
            ))
        })
        .await?;
    info!(updated, status = payload.status.as_str(), "bulk status update");
    Ok(Json(BulkUpdatedResponse { updated }))
}

pub async fn bulk_delete(
    State(state): State<AppState>,
    Json(payload): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeletedResponse>, AppError> {
    let deleted = state
        .mutate(|data| Ok(applications::bulk_delete(data, &payload.ids)))
        .await?;
    info!(deleted, "bulk delete");
    Ok(Json(BulkDeletedResponse { deleted }))
}

pub async fn job_description(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DescriptionResponse>, AppError> {
    let job_url = {
        let data = state.data.lock().await;
        applications::get_application(&data, id)?.job_url.clone()
    };

    let text = scrape_job_description(&state.http, state.scrape_proxy.as_deref(), &job_url)
        .await
        .inspect_err(|err| tracing::warn!(id, "{}", err.message))?;
    Ok(Json(DescriptionResponse { text }))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_stats(&data)))
}

pub async fn export_json(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = {
        let data = state.data.lock().await;
        transfer::export_json(&data)?
    };
    Ok(attachment("application/json", JSON_EXPORT_FILENAME, body))
}

pub async fn export_csv(State(state): State<AppState>) -> impl IntoResponse {
    let body = {
        let data = state.data.lock().await;
        transfer::export_csv(&data)
    };
    attachment("text/csv; charset=utf-8", CSV_EXPORT_FILENAME, body)
}

pub async fn import_json(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportResponse>, AppError> {
    let imported = transfer::import_json(&body, Utc::now())?;
    let count = imported.len();
    state
        .mutate(move |data| {
            data.applications = imported;
            Ok(())
        })
        .await?;
    info!(count, "applications imported");
    Ok(Json(ImportResponse { imported: count }))
}

fn attachment(content_type: &'static str, filename: &str, body: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
}
