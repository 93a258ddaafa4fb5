use serde_json::Value;

use crate::entity::Record;
use crate::pagination::table_notice;

/// Separator used between pager segments and footer notes.
pub const FOOTER_SEPARATOR: &str = " • ";

/// Render one field for a table cell.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_owned(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Build the footer line for a paginated table.
pub fn page_footer(page: usize, total_pages: usize, footer_note: Option<&str>) -> String {
    let page = page.max(1);
    let total_pages = total_pages.max(1);

    if total_pages > 1 {
        match footer_note {
            Some(note) if !note.is_empty() => {
                format!("Page {page}/{total_pages}{FOOTER_SEPARATOR}{note}")
            }
            _ => format!("Page {page}/{total_pages}"),
        }
    } else {
        match footer_note {
            Some(note) if !note.is_empty() => note.to_owned(),
            _ => String::new(),
        }
    }
}

/// Render pager buttons, bracketing the current page.
pub fn pager_line(pages: &[usize], current: usize, total_pages: usize) -> String {
    if pages.is_empty() {
        return String::new();
    }

    let mut parts = Vec::with_capacity(pages.len() + 2);
    if pages.first().is_some_and(|first| *first > 1) {
        parts.push("«".to_owned());
    }

    parts.extend(pages.iter().map(|page| {
        if *page == current {
            format!("[{page}]")
        } else {
            page.to_string()
        }
    }));

    if pages.last().is_some_and(|last| *last < total_pages) {
        parts.push("»".to_owned());
    }

    parts.join(" ")
}

/// Render a page of entities as an aligned text table.
///
/// `rows` of `None` means the collection is still loading.
pub fn render_table<E: Record>(title: &str, columns: &[&str], rows: Option<&[E]>) -> String {
    let mut out = format!("{title}\n");

    if let Some(notice) = table_notice(rows) {
        out.push_str(notice);
        out.push('\n');
        return out;
    }

    let rows = rows.unwrap_or_default();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| cell_text(row.field(column)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            cells
                .iter()
                .map(|row| row[index].chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    out.push_str(&aligned_line(columns, &widths));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');

    for row in &cells {
        let values: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&aligned_line(&values, &widths));
        out.push('\n');
    }

    out
}

fn aligned_line(values: &[&str], widths: &[usize]) -> String {
    values
        .iter()
        .zip(widths)
        .map(|(value, width)| format!("{value:<width$}", width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_owned()
}
