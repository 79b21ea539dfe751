//! Routine export: pure transformations of a row list into downloadable
//! file content. Both formats share the fixed seven-column layout; row ids
//! and media references are never emitted.

mod csv;
mod excel;

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::ExerciseRow;

pub(crate) const COLUMNS: [&str; 7] = [
    "Order",
    "ExerciseName",
    "Sets",
    "Reps",
    "Weight",
    "RestTime",
    "Notes",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    Csv,
    Excel,
}

impl ExportTarget {
    pub fn content_type(self) -> &'static str {
        match self {
            ExportTarget::Csv => "text/csv;charset=utf-8",
            ExportTarget::Excel => "application/vnd.ms-excel;charset=utf-8",
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            ExportTarget::Csv => "_rutina.csv",
            ExportTarget::Excel => "_rutina.xls",
        }
    }
}

impl FromStr for ExportTarget {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportTarget::Csv),
            "excel" | "xls" => Ok(ExportTarget::Excel),
            other => Err(AppError::UnsupportedExportTarget(other.to_string())),
        }
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportTarget::Csv => write!(f, "csv"),
            ExportTarget::Excel => write!(f, "excel"),
        }
    }
}

/// A fully rendered export, ready to be handed to whatever delivers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

/// Renders `rows` into the requested format. Pure: the same inputs always
/// produce byte-identical output and the row list is never mutated.
pub fn export(target: ExportTarget, rows: &[ExerciseRow], title: &str) -> Download {
    let body = match target {
        ExportTarget::Csv => csv::render(rows),
        ExportTarget::Excel => excel::render(rows),
    };
    Download {
        filename: format!("{}{}", slugify(title), target.suffix()),
        content_type: target.content_type(),
        body,
    }
}

/// Filename-safe form of a routine title: lowercased, with every character
/// outside `[a-z0-9]` replaced by an underscore.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '_' })
        .collect()
}

#[cfg(test)]
pub(crate) fn test_row(order: u32, name: &str, notes: &str) -> ExerciseRow {
    ExerciseRow {
        id: uuid::Uuid::new_v4().to_string(),
        order,
        exercise_name: name.to_string(),
        sets: "4".to_string(),
        reps: "8-10".to_string(),
        weight: "80kg".to_string(),
        rest_time: "90s".to_string(),
        notes: notes.to_string(),
        media_ref: Some("https://example.com/clip".to_string()),
    }
}
