//! CSV rendering. ExerciseName and Notes are always double-quoted; the other
//! five columns stay bare unless the value itself needs quoting. Embedded
//! quotes are doubled, so values containing commas or quotes survive intact
//! instead of corrupting the line.

use crate::models::ExerciseRow;

use super::COLUMNS;

/// Header line plus one line per row, joined with `\n`, no trailing newline.
pub fn render(rows: &[ExerciseRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(COLUMNS.join(","));

    for row in rows {
        let fields = [
            bare(&row.order.to_string()),
            quoted(&row.exercise_name),
            bare(&row.sets),
            bare(&row.reps),
            bare(&row.weight),
            bare(&row.rest_time),
            quoted(&row.notes),
        ];
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn bare(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        quoted(value)
    } else {
        value.to_string()
    }
}
