use crate::core::board::ProjectBoard;
use crate::domain::model::{ProjectField, WebProject};
use crate::domain::ports::ProjectApi;
use std::fmt::{self, Write};

fn field_value(project: &WebProject, field: ProjectField) -> &str {
    match field {
        ProjectField::Title => &project.title,
        ProjectField::Description => &project.description,
        ProjectField::Url => &project.url,
    }
}

/// Renders the board as plain text: heading, alert, list, add form.
pub fn render<A: ProjectApi>(board: &ProjectBoard<A>) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails
    let _ = write_board(&mut out, board);
    out
}

fn write_board<A: ProjectApi>(out: &mut String, board: &ProjectBoard<A>) -> fmt::Result {
    writeln!(out, "Web Projects")?;
    writeln!(out, "============")?;
    if let Some(alert) = board.alert() {
        writeln!(out, "[!] {}", alert)?;
    }
    writeln!(out)?;

    if board.projects().is_empty() {
        writeln!(out, "(no web projects)")?;
    }

    for project in board.projects() {
        match board.editing().filter(|p| p.id == project.id) {
            Some(edited) => {
                writeln!(out, "#{} (editing)", project.id)?;
                write_fields(out, edited)?;
            }
            None => {
                writeln!(out, "#{}", project.id)?;
                writeln!(out, "  {}", project.title)?;
                writeln!(out, "  {}", project.description)?;
                writeln!(out, "  {}", project.url)?;
            }
        }
    }

    let draft = board.draft();
    writeln!(out)?;
    writeln!(out, "Add New Web Project")?;
    writeln!(out, "  title: {}", draft.title)?;
    writeln!(out, "  description: {}", draft.description)?;
    writeln!(out, "  url: {}", draft.url)
}

fn write_fields(out: &mut String, project: &WebProject) -> fmt::Result {
    for field in ProjectField::ALL {
        writeln!(out, "  {}: {}", field.name(), field_value(project, field))?;
    }
    Ok(())
}
