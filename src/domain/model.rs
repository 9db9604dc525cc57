use crate::utils::error::{AppError, Result};
use crate::utils::validation::{
    validate_required_field, validate_url_prefix, Validate, PROJECT_URL_PREFIX,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Identifier assigned by the API. Any JSON value is accepted and
/// serialized back unchanged. Two ids are equal when their path segments
/// are, so `12` and `"12"` name the same project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(serde_json::Value);

impl ProjectId {
    pub fn number(n: u64) -> Self {
        ProjectId(serde_json::Value::from(n))
    }

    pub fn text(s: impl Into<String>) -> Self {
        ProjectId(serde_json::Value::String(s.into()))
    }

    /// The id as it appears in `/api/{id}`.
    pub fn key(&self) -> String {
        match &self.0 {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl PartialEq for ProjectId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ProjectId {}

impl Hash for ProjectId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Numeric text becomes a JSON number, anything else a string.
impl FromStr for ProjectId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.parse::<serde_json::Number>() {
            Ok(n) => ProjectId(serde_json::Value::Number(n)),
            Err(_) => ProjectId::text(s),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebProject {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub url: String,
}

impl WebProject {
    pub fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
        }
    }

    pub fn set_field(&mut self, field: ProjectField, value: impl Into<String>) {
        *field.slot(&mut self.title, &mut self.description, &mut self.url) = value.into();
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl ProjectDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
        }
    }

    pub fn set_field(&mut self, field: ProjectField, value: impl Into<String>) {
        *field.slot(&mut self.title, &mut self.description, &mut self.url) = value.into();
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.url.is_empty()
    }
}

impl Validate for ProjectDraft {
    /// Required fields are checked before the URL prefix, so a draft with a
    /// missing field always reports the required-field message.
    fn validate(&self) -> Result<()> {
        validate_required_field(ProjectField::Title.name(), &self.title)?;
        validate_required_field(ProjectField::Description.name(), &self.description)?;
        validate_required_field(ProjectField::Url.name(), &self.url)?;
        validate_url_prefix(ProjectField::Url.name(), &self.url, PROJECT_URL_PREFIX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    Url,
}

impl ProjectField {
    pub const ALL: [ProjectField; 3] = [
        ProjectField::Title,
        ProjectField::Description,
        ProjectField::Url,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProjectField::Title => "title",
            ProjectField::Description => "description",
            ProjectField::Url => "url",
        }
    }

    fn slot<'a>(
        self,
        title: &'a mut String,
        description: &'a mut String,
        url: &'a mut String,
    ) -> &'a mut String {
        match self {
            ProjectField::Title => title,
            ProjectField::Description => description,
            ProjectField::Url => url,
        }
    }
}

impl FromStr for ProjectField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        ProjectField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| AppError::validation(s, format!("Unknown field: {}", s)))
    }
}

/// Response body of POST and PUT.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEnvelope {
    pub web_project: WebProject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::{REQUIRED_FIELDS_MESSAGE, URL_PREFIX_MESSAGE};
    use serde_json::json;

    #[test]
    fn test_project_id_accepts_any_json_value() {
        let numeric: WebProject = serde_json::from_value(json!({
            "id": 7, "title": "Blog", "description": "Personal blog", "url": "www.blog.dev"
        }))
        .unwrap();
        assert_eq!(numeric.id, ProjectId::number(7));
        assert_eq!(serde_json::to_value(&numeric).unwrap()["id"], json!(7));

        let text: WebProject = serde_json::from_value(json!({
            "id": "64f1c2", "title": "Shop", "description": "Store front", "url": "www.shop.dev"
        }))
        .unwrap();
        assert_eq!(text.id.to_string(), "64f1c2");
        assert_eq!(serde_json::to_value(&text).unwrap()["id"], json!("64f1c2"));

        for id in [json!(-1), json!(1.5)] {
            let project: WebProject = serde_json::from_value(json!({
                "id": id.clone(), "title": "Odd", "description": "Odd id", "url": "www.odd.dev"
            }))
            .unwrap();
            assert_eq!(serde_json::to_value(&project).unwrap()["id"], id);
        }
    }

    #[test]
    fn test_project_id_from_cli_argument() {
        assert_eq!("12".parse::<ProjectId>().unwrap(), ProjectId::number(12));
        assert_eq!("-1".parse::<ProjectId>().unwrap().to_string(), "-1");
        assert_eq!(
            "abc-12".parse::<ProjectId>().unwrap(),
            ProjectId::text("abc-12")
        );
    }

    #[test]
    fn test_numeric_and_string_ids_match_by_path_segment() {
        assert_eq!(ProjectId::text("12"), ProjectId::number(12));
        assert_ne!(ProjectId::text("b7"), ProjectId::number(7));

        let mut seen = std::collections::HashSet::new();
        seen.insert(ProjectId::text("12"));
        assert!(seen.contains(&"12".parse::<ProjectId>().unwrap()));
    }

    #[test]
    fn test_envelope_uses_camel_case_key() {
        let envelope: ProjectEnvelope = serde_json::from_value(json!({
            "webProject": {"id": 1, "title": "A", "description": "B", "url": "www.c.com"}
        }))
        .unwrap();
        assert_eq!(envelope.web_project.title, "A");
    }

    #[test]
    fn test_draft_validation_order() {
        let err = ProjectDraft::new("", "desc", "http://x").validate().unwrap_err();
        assert_eq!(err.user_friendly_message(), REQUIRED_FIELDS_MESSAGE);

        let err = ProjectDraft::new("t", "d", "").validate().unwrap_err();
        assert_eq!(err.user_friendly_message(), REQUIRED_FIELDS_MESSAGE);

        let err = ProjectDraft::new("t", "d", "example.com").validate().unwrap_err();
        assert_eq!(err.user_friendly_message(), URL_PREFIX_MESSAGE);

        assert!(ProjectDraft::new("t", "d", "www.example.com").validate().is_ok());
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in ProjectField::ALL {
            assert_eq!(field.name().parse::<ProjectField>().unwrap(), field);
        }
        assert!("id".parse::<ProjectField>().is_err());
    }

    #[test]
    fn test_set_field() {
        let mut draft = ProjectDraft::default();
        assert!(draft.is_blank());
        draft.set_field(ProjectField::Url, "www.site.io");
        assert_eq!(draft.url, "www.site.io");
        assert!(!draft.is_blank());
    }
}
