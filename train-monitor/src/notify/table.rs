//! Tabular rendering of leg rows.
//!
//! Two renderings of the same header + rows data: a fixed-width grid for
//! the plain-text body and markup for the HTML body. Pure string
//! formatting, no escaping in the grid, entity escaping in the HTML.
//!
//! Callers guarantee at least one data row; an empty table is never
//! rendered.

use std::fmt::Write;

/// Render a fixed-width grid.
///
/// # Examples
///
/// ```
/// use train_monitor::notify::table::grid;
///
/// let out = grid(&["from", "to"], &[vec!["A".into(), "B".into()]]);
/// assert_eq!(out, "\
/// +------+----+
/// | from | to |
/// +======+====+
/// | A    | B  |
/// +------+----+");
/// ```
pub fn grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths = column_widths(headers, rows);

    let rule = |fill: char| {
        let mut line = String::from("+");
        for w in &widths {
            for _ in 0..w + 2 {
                line.push(fill);
            }
            line.push('+');
        }
        line
    };

    let render_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (i, &w) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let _ = write!(line, " {cell:<w$} |");
        }
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut out = String::new();
    out.push_str(&rule('-'));
    out.push('\n');
    out.push_str(&render_row(&header_cells));
    out.push('\n');
    out.push_str(&rule('='));
    for row in rows {
        out.push('\n');
        out.push_str(&render_row(row));
        out.push('\n');
        out.push_str(&rule('-'));
    }
    out
}

/// Render an HTML table with a header row and one row per leg.
pub fn html(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::from("<table>\n<thead>\n<tr>");
    for h in headers {
        let _ = write!(out, "<th>{}</th>", escape(h));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape(cell));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>");
    out
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }
    widths
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
