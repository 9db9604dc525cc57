use crate::config::ClientConfig;
use crate::core::board::ProjectBoard;
use crate::domain::model::{ProjectField, ProjectId};
use crate::domain::ports::ProjectApi;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "web-projects")]
#[command(about = "Manage the web projects list of a REST API")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with an [api] table")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "API server, e.g. http://localhost:3000")]
    pub base_url: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show all web projects
    List,
    /// Add a new web project
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        url: String,
    },
    /// Edit a web project in place
    Edit {
        #[arg(value_parser = parse_project_id)]
        id: ProjectId,
        #[command(flatten)]
        changes: FieldChanges,
    },
    /// Delete a web project
    Delete {
        #[arg(value_parser = parse_project_id)]
        id: ProjectId,
    },
}

fn parse_project_id(s: &str) -> std::result::Result<ProjectId, std::convert::Infallible> {
    s.parse()
}

#[derive(Debug, Clone, Default, Args)]
pub struct FieldChanges {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
}

impl Command {
    /// Runs the command against a board that has already been loaded.
    pub async fn apply<A: ProjectApi>(self, board: &mut ProjectBoard<A>) -> Result<()> {
        match self {
            Command::List => Ok(()),
            Command::Add {
                title,
                description,
                url,
            } => {
                board.set_draft_field(ProjectField::Title, title);
                board.set_draft_field(ProjectField::Description, description);
                board.set_draft_field(ProjectField::Url, url);
                board.add().await
            }
            Command::Edit { id, changes } => {
                board.begin_edit(&id)?;
                for (field, value) in changes.iter() {
                    board.set_edit_field(field, value)?;
                }
                board.save().await
            }
            Command::Delete { id } => board.delete(&id).await,
        }
    }
}

impl FieldChanges {
    /// Changed fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ProjectField, &str)> {
        [
            (ProjectField::Title, self.title.as_deref()),
            (ProjectField::Description, self.description.as_deref()),
            (ProjectField::Url, self.url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

impl CliConfig {
    /// Config file (or defaults) with command line overrides applied.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        Ok(config)
    }
}
