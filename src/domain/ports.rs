use crate::domain::model::{ProjectDraft, ProjectId, WebProject};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The backing web projects API.
#[async_trait]
pub trait ProjectApi: Send + Sync {
    async fn list(&self) -> Result<Vec<WebProject>>;
    async fn create(&self, draft: &ProjectDraft) -> Result<WebProject>;
    async fn update(&self, id: &ProjectId, draft: &ProjectDraft) -> Result<WebProject>;
    async fn delete(&self, id: &ProjectId) -> Result<()>;
}
