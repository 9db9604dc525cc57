pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::HttpProjectApi;
pub use config::ClientConfig;
pub use crate::core::{board::ProjectBoard, view::render};
pub use domain::model::{ProjectDraft, ProjectField, ProjectId, WebProject};
pub use domain::ports::ProjectApi;
pub use utils::error::{AppError, Result};
