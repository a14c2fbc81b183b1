//! Text view for a single report.

use dossier_core::entities::Report;
use dossier_core::timestamps;

use super::render;
use crate::cli::OutputFormat;

/// Render a report: a readable document in table mode, JSON otherwise.
pub fn render_report(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(report, format);
    }

    let underline = "=".repeat(report.title.chars().count().max(3));
    Ok(format!(
        "{title}\n{underline}\nQuery: {question}\nGenerated: {date}\n\n{body}",
        title = report.title,
        question = report.question,
        date = timestamps::display_local(report.created_at),
        body = report.report_text.trim_end(),
    ))
}

pub fn output_report(report: &Report, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_report(report, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        serde_json::from_value(serde_json::json!({
            "id": 3,
            "title": "Analysis: metformin",
            "question": "Can metformin be repurposed?",
            "created_at": "2025-03-01T12:30:00",
            "report_text": "## Executive Summary\n\nText.\n\n"
        }))
        .expect("report should parse")
    }

    #[test]
    fn table_mode_is_a_document() {
        let out = render_report(&report(), OutputFormat::Table).expect("render");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Analysis: metformin");
        assert!(lines[1].chars().all(|c| c == '='));
        assert_eq!(lines[2], "Query: Can metformin be repurposed?");
        assert!(lines[3].starts_with("Generated: 2025-0"));
        assert!(out.ends_with("Text."));
    }

    #[test]
    fn json_mode_emits_the_report_object() {
        let out = render_report(&report(), OutputFormat::Json).expect("render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(parsed["id"], "3");
        assert_eq!(parsed["title"], "Analysis: metformin");
    }
}
