use warden_core::enums::TaskStatus;

/// Columns holding free text. Only these give up width on a narrow terminal.
const ELASTIC_COLUMNS: &[&str] = &["title", "name", "description", "body", "address", "value"];

const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render rows as left-aligned columns under a header and a dashed divider.
///
/// With `max_width` set, the widest free-text column is cut with `…` until the
/// table fits. Identifier, status and timestamp columns are never cut.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .fold(header.chars().count(), usize::max)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let status_column = headers.iter().position(|header| *header == "status");
    let colored_column = status_column.filter(|_| options.color);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_line(headers.iter().copied(), &widths, None));
    let total = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    lines.push("-".repeat(total));
    for row in rows {
        let cells = (0..headers.len()).map(|index| row.get(index).map_or("-", String::as_str));
        lines.push(render_line(cells, &widths, colored_column));
    }
    lines.join("\n")
}

fn render_line<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    colored_column: Option<usize>,
) -> String {
    cells
        .zip(widths)
        .enumerate()
        .map(|(index, (cell, width))| {
            let padded = pad(&truncate_text(cell, *width), *width);
            if Some(index) == colored_column {
                colorize_status(cell, &padded)
            } else {
                padded
            }
        })
        .collect::<Vec<_>>()
        .join(GAP)
        .trim_end()
        .to_string()
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let total = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    let mut overflow = total.saturating_sub(max_width);
    while overflow > 0 {
        let widest = headers
            .iter()
            .enumerate()
            .filter(|(index, header)| {
                ELASTIC_COLUMNS.contains(*header) && widths[*index] > header.chars().count()
            })
            .max_by_key(|(index, _)| widths[*index]);
        let Some((index, _)) = widest else {
            return;
        };
        widths[index] -= 1;
        overflow -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    format!("{value:<width$}")
}

/// Wrap an already padded status cell in its color. Unknown text is left plain.
fn colorize_status(status: &str, padded: &str) -> String {
    let code = match TaskStatus::ALL.into_iter().find(|s| s.as_str() == status) {
        Some(TaskStatus::Completed) => "32",
        Some(TaskStatus::InProgress) => "33",
        Some(TaskStatus::Rejected) => "31",
        Some(TaskStatus::Open) | None => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, render_entity_table};

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn narrow_terminal_truncates_free_text_only() {
        let headers = ["id", "title", "created_at"];
        let rows = vec![cells(&[
            "1",
            "Replace every light fixture in the underground car park",
            "2025-10-10T08:30:00.000000Z",
        ])];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(60),
                color: false,
            },
        );
        let row = table.lines().nth(2).expect("data row");
        assert!(row.chars().count() <= 60);
        assert!(row.contains('…'));
        assert!(row.ends_with("2025-10-10T08:30:00.000000Z"));
    }

    #[test]
    fn fixed_columns_are_never_cut() {
        let headers = ["id", "created_at"];
        let rows = vec![cells(&["12", "2025-10-10T08:30:00.000000Z"])];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(10),
                color: false,
            },
        );
        assert_eq!(
            table.lines().nth(2),
            Some("12  2025-10-10T08:30:00.000000Z")
        );
    }

    #[test]
    fn only_the_status_column_is_colored() {
        let headers = ["id", "status", "title"];
        let rows = vec![
            cells(&["1", "Completed", "Completed"]),
            cells(&["2", "Open", "Paint"]),
        ];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "1   \u{1b}[32mCompleted\u{1b}[0m  Completed");
        assert_eq!(lines[3], "2   Open       Paint");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let headers = ["id", "title"];
        let rows = vec![cells(&["7"])];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        assert_eq!(table, "id  title\n---------\n7   -");
    }
}
