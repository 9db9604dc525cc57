use crate::domain::model::{ProjectDraft, ProjectField, ProjectId, WebProject};
use crate::domain::ports::ProjectApi;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::Validate;

pub const ADDED_MESSAGE: &str = "Web project added successfully.";
pub const ADD_FAILED_MESSAGE: &str = "Error adding web project.";
pub const DELETED_MESSAGE: &str = "Web project deleted successfully.";
pub const DELETE_FAILED_MESSAGE: &str = "Error deleting web project.";
pub const UPDATED_MESSAGE: &str = "Web project updated successfully.";
pub const UPDATE_FAILED_MESSAGE: &str = "Error updating web project.";

/// In-memory state of the web projects page: the list, the "add" form,
/// the alert line and the project currently open for editing.
///
/// The list only changes after the API confirms a request. Every
/// operation sets the alert before returning its error.
pub struct ProjectBoard<A: ProjectApi> {
    api: A,
    projects: Vec<WebProject>,
    draft: ProjectDraft,
    alert: Option<String>,
    editing: Option<WebProject>,
}

impl<A: ProjectApi> ProjectBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            projects: Vec::new(),
            draft: ProjectDraft::default(),
            alert: None,
            editing: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn projects(&self) -> &[WebProject] {
        &self.projects
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn editing(&self) -> Option<&WebProject> {
        self.editing.as_ref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Fetches the full list. A failure is logged only; the list and the
    /// alert keep their previous values.
    pub async fn load(&mut self) -> Result<()> {
        match self.api.list().await {
            Ok(projects) => {
                tracing::info!("Loaded {} web projects", projects.len());
                self.projects = projects;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error fetching data: {}", e);
                Err(e)
            }
        }
    }

    pub fn set_draft_field(&mut self, field: ProjectField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub async fn add(&mut self) -> Result<()> {
        let validation = self.draft.validate();
        self.check(validation)?;

        match self.api.create(&self.draft).await {
            Ok(project) => {
                tracing::info!("Added web project {}", project.id);
                self.projects.push(project);
                self.draft = ProjectDraft::default();
                self.alert = Some(ADDED_MESSAGE.to_string());
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error adding web project: {}", e);
                self.alert = Some(ADD_FAILED_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    pub async fn delete(&mut self, id: &ProjectId) -> Result<()> {
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!("Deleted web project {}", id);
                self.projects.retain(|project| &project.id != id);
                if self.editing.as_ref().is_some_and(|p| &p.id == id) {
                    self.editing = None;
                }
                self.alert = Some(DELETED_MESSAGE.to_string());
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error deleting web project {}: {}", id, e);
                self.alert = Some(DELETE_FAILED_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Opens an editable copy of the project; the list entry stays as it
    /// is until `save` succeeds.
    pub fn begin_edit(&mut self, id: &ProjectId) -> Result<()> {
        let project = self
            .projects
            .iter()
            .find(|project| &project.id == id)
            .ok_or_else(|| AppError::NotFound { id: id.to_string() })?;
        self.editing = Some(project.clone());
        Ok(())
    }

    pub fn set_edit_field(&mut self, field: ProjectField, value: impl Into<String>) -> Result<()> {
        let project = self.editing.as_mut().ok_or(AppError::NotEditing)?;
        project.set_field(field, value);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub async fn save(&mut self) -> Result<()> {
        let (id, changes) = match &self.editing {
            Some(project) => (project.id.clone(), project.draft()),
            None => return Err(AppError::NotEditing),
        };
        self.check(changes.validate())?;

        match self.api.update(&id, &changes).await {
            Ok(updated) => {
                tracing::info!("Updated web project {}", id);
                for project in self.projects.iter_mut().filter(|p| p.id == id) {
                    *project = updated.clone();
                }
                self.editing = None;
                self.alert = Some(UPDATED_MESSAGE.to_string());
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error updating web project {}: {}", id, e);
                self.alert = Some(UPDATE_FAILED_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Puts a form validation failure in the alert.
    fn check(&mut self, validation: Result<()>) -> Result<()> {
        validation.inspect_err(|e| {
            tracing::warn!("Rejected web project form: {}", e);
            self.alert = Some(e.user_friendly_message());
        })
    }
}
