use crossterm::style::{Color, Stylize};
use labelscan_core::domain::ingredient::{
    rendering::{COLUMNS, RenderedDocument, RenderedRow},
    value_objects::SeverityTier,
};

use crate::application::terminal::surface::ResultView;

/// Draws a result view as plain text. With `color`, risk cells get the tier's
/// background and the summary line is bold.
pub fn format_view(view: &ResultView, color: bool, narrative: bool) -> String {
    match view {
        ResultView::Error(message) => {
            if color {
                format!("{}\n", message.as_str().red())
            } else {
                format!("{}\n", message)
            }
        }
        ResultView::Document(document) => format_document(document, color, narrative),
    }
}

pub fn format_document(document: &RenderedDocument, color: bool, narrative: bool) -> String {
    if let RenderedDocument::Notice { text } = document {
        return format!("{}\n", text);
    }

    let mut lines = Vec::new();
    if let Some(summary) = document.summary() {
        lines.push(if color {
            paint(&summary.text, Some(summary.severity)).bold().to_string()
        } else {
            summary.text.clone()
        });
        lines.push(String::new());
    }

    let rows = document.rows();
    let widths = column_widths(&COLUMNS, rows);

    let header: Vec<String> = COLUMNS
        .iter()
        .zip(&widths)
        .map(|(title, width)| pad(title, *width))
        .collect();
    lines.push(header.join(" │ "));
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    lines.push(rule.join("─┼─"));

    for row in rows {
        let cells: Vec<String> = row
            .columns()
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(index, (text, width))| {
                let padded = pad(text, *width);
                if color && index == RISK_COLUMN {
                    paint(&padded, row.risk.severity)
                } else {
                    padded
                }
            })
            .collect();
        lines.push(cells.join(" │ "));
    }

    if narrative && !document.narrative().is_empty() {
        lines.push(String::new());
        lines.extend(document.narrative().iter().map(|line| format!("• {}", line)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

const RISK_COLUMN: usize = 3;

fn column_widths(columns: &[&str; 5], rows: &[RenderedRow]) -> [usize; 5] {
    let mut widths = [0usize; 5];
    for (width, title) in widths.iter_mut().zip(columns) {
        *width = title.chars().count();
    }
    for row in rows {
        for (width, text) in widths.iter_mut().zip(row.columns()) {
            *width = (*width).max(text.chars().count());
        }
    }
    widths
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}

fn paint(text: &str, severity: Option<SeverityTier>) -> String {
    match severity.and_then(|tier| tier.background_rgb()) {
        Some((r, g, b)) => text
            .with(Color::Black)
            .on(Color::Rgb { r, g, b })
            .to_string(),
        None => text.to_string(),
    }
}
