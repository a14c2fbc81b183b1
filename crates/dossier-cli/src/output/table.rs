//! Column-aligned plain-text tables.

const GAP: &str = "  ";
/// Columns never shrink below this width (or their header's).
const MIN_WIDTH: usize = 6;

/// Rendering limits for [`render`].
#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    /// Terminal width to fit into; `None` never truncates.
    pub max_width: Option<usize>,
    /// Color status words (`completed`, `failed`, ...).
    pub color: bool,
}

/// Render `rows` under `headers`, one line per row, with a dashed divider.
///
/// Missing cells render as `-`. Cells wider than their column are clipped
/// with `…`.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let floors: Vec<usize> = headers
        .iter()
        .map(|header| header.chars().count().max(MIN_WIDTH))
        .collect();
    let mut widths: Vec<usize> = floors
        .iter()
        .enumerate()
        .map(|(column, floor)| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .fold(*floor, usize::max)
        })
        .collect();
    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, &floors, max_width);
    }

    let header_line = line(headers.iter().copied(), &widths, false);
    let divider = "-".repeat(widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1));

    let mut lines = vec![header_line, divider];
    lines.extend(rows.iter().map(|row| {
        let cells = (0..widths.len()).map(|column| row.get(column).map_or("-", String::as_str));
        line(cells, &widths, options.color)
    }));
    lines.join("\n")
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize], color: bool) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| {
            let text = clip(cell, *width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            if color {
                format!("{}{pad}", colorize_status(&text))
            } else {
                format!("{text}{pad}")
            }
        })
        .collect::<Vec<_>>()
        .join(GAP)
        .trim_end()
        .to_string()
}

/// Narrow the widest shrinkable column until the table fits `max_width`.
fn shrink_to(widths: &mut [usize], floors: &[usize], max_width: usize) {
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(column, width)| **width > floors[*column])
            .max_by_key(|(_, width)| **width)
            .map(|(column, _)| column);
        match widest {
            Some(column) => widths[column] -= 1,
            None => break,
        }
    }
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn colorize_status(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "completed" | "ready" | "true" => "32",
        "pending" | "processing" | "polling" | "submitted" => "33",
        "failed" | "timed_out" | "false" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
