pub mod app;
pub mod applications;
pub mod config;
pub mod description;
pub mod errors;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod transfer;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
