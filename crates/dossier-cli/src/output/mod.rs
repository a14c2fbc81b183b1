use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod report;
pub mod table;

/// Render a serializable response to a string in the requested format.
///
/// Table mode shows one `field  value` line per top-level field.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_record(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a list with explicit columns in table mode, or as JSON otherwise.
///
/// An empty list prints `empty` in table mode.
pub fn output_rows<T, F>(
    items: &[T],
    headers: &[&str],
    to_row: F,
    empty: &str,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    T: Serialize,
    F: Fn(&T) -> Vec<String>,
{
    let rendered = render_rows(items, headers, to_row, empty, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_rows<T, F>(
    items: &[T],
    headers: &[&str],
    to_row: F,
    empty: &str,
    format: OutputFormat,
) -> anyhow::Result<String>
where
    T: Serialize,
    F: Fn(&T) -> Vec<String>,
{
    if format != OutputFormat::Table {
        return render(&items, format);
    }
    if items.is_empty() {
        return Ok(empty.to_string());
    }
    let rows = items.iter().map(to_row).collect::<Vec<_>>();
    Ok(table::render(headers, &rows, table_options()))
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_record<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let rows = match serde_json::to_value(value)? {
        Value::Object(fields) => fields
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(field, value)| vec![field, cell(&value)])
            .collect(),
        other => vec![vec![String::from("value"), cell(&other)]],
    };
    Ok(table::render(&["field", "value"], &rows, table_options()))
}

/// Strings print bare; nested values print as compact JSON.
fn cell(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
