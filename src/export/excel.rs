//! Spreadsheet rendering: a single HTML table that Excel and friends open as
//! tabular data when served with an Excel MIME type. Cell text is escaped so
//! values containing `&`, `<` or `>` cannot break the table structure.

use crate::models::ExerciseRow;

use super::COLUMNS;

pub fn render(rows: &[ExerciseRow]) -> String {
    let mut html = String::from("<table border=\"1\">\n<thead>\n");
    html.push_str("<tr style=\"background-color: #f0f0f0; font-weight: bold;\">");
    for column in COLUMNS {
        html.push_str("<th>");
        html.push_str(column);
        html.push_str("</th>");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in rows {
        let order = row.order.to_string();
        html.push_str("<tr>");
        for value in [
            order.as_str(),
            &row.exercise_name,
            &row.sets,
            &row.reps,
            &row.weight,
            &row.rest_time,
            &row.notes,
        ] {
            html.push_str("<td>");
            html.push_str(&escape(value));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
