pub mod board;
pub mod view;

pub use crate::domain::model::{ProjectDraft, ProjectField, ProjectId, WebProject};
pub use crate::domain::ports::ProjectApi;
pub use crate::utils::error::Result;
