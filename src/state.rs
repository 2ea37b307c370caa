use crate::errors::AppError;
use crate::models::AppData;
use crate::storage::persist_data;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub http: reqwest::Client,
    pub scrape_proxy: Option<String>,
}

impl AppState {
    pub fn new(
        data_path: PathBuf,
        data: AppData,
        scrape_proxy: Option<String>,
        scrape_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(scrape_timeout)
            .user_agent(concat!("job_tracker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            http,
            scrape_proxy,
        })
    }

    /// Applies `change` to a copy of the store and commits it only after the
    /// copy has been written to disk.
    pub async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut AppData) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut data = self.data.lock().await;
        let mut draft = data.clone();
        let result = change(&mut draft)?;
        persist_data(&self.data_path, &draft).await?;
        *data = draft;
        Ok(result)
    }
}
