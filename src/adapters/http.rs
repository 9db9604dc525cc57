use crate::config::ClientConfig;
use crate::domain::model::{ProjectDraft, ProjectEnvelope, ProjectId, WebProject};
use crate::domain::ports::ProjectApi;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// `ProjectApi` over HTTP with a JSON body on every write.
pub struct HttpProjectApi {
    config: ClientConfig,
    client: Client,
}

impl HttpProjectApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { config, client })
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::debug!("Making API request: {} {}", method, url);
        self.client.request(method, url)
    }

    /// Sends the request and turns any non-success status into an error.
    async fn execute(&self, req: RequestBuilder, url: &str) -> Result<Response> {
        let response = req.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(AppError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ProjectApi for HttpProjectApi {
    async fn list(&self) -> Result<Vec<WebProject>> {
        let url = self.config.collection_url();
        let response = self.execute(self.request(Method::GET, &url), &url).await?;
        Self::decode(response).await
    }

    async fn create(&self, draft: &ProjectDraft) -> Result<WebProject> {
        let url = self.config.collection_url();
        let req = self.request(Method::POST, &url).json(draft);
        let response = self.execute(req, &url).await?;
        let envelope: ProjectEnvelope = Self::decode(response).await?;
        Ok(envelope.web_project)
    }

    async fn update(&self, id: &ProjectId, draft: &ProjectDraft) -> Result<WebProject> {
        let url = self.config.item_url(id);
        let req = self.request(Method::PUT, &url).json(draft);
        let response = self.execute(req, &url).await?;
        let envelope: ProjectEnvelope = Self::decode(response).await?;
        Ok(envelope.web_project)
    }

    async fn delete(&self, id: &ProjectId) -> Result<()> {
        let url = self.config.item_url(id);
        self.execute(self.request(Method::DELETE, &url), &url)
            .await?;
        Ok(())
    }
}
