//! Minimal CSV codec for the roster file
//!
//! Columns are located by header name (`name`, `points`, `avatar`) in any
//! order. Quoted fields may contain commas, quotes (`""`) and newlines.

use crate::board::{PlayerRecord, ScoreField};

pub const HEADER: [&str; 3] = ["name", "points", "avatar"];

/// Split CSV text into rows of fields.
///
/// A quote only opens a quoted field at the start of the field; anywhere else
/// it is a literal character. A quote left open at end of input is rewound
/// and read as a literal, so the rows after it survive.
pub fn split_rows(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut field_start = true;
    // Byte offset of the opening quote and the row as it was before it
    let mut open: Option<(usize, Vec<String>)> = None;
    let mut literal_quote: Option<usize> = None;
    let mut i = 0;

    loop {
        while let Some(c) = text[i..].chars().next() {
            let at = i;
            i += c.len_utf8();

            if open.is_some() {
                if c == '"' {
                    if text[i..].starts_with('"') {
                        i += 1;
                        field.push('"');
                    } else {
                        open = None;
                    }
                } else {
                    field.push(c);
                }
                continue;
            }

            match c {
                '"' if field_start && literal_quote != Some(at) => {
                    open = Some((at, row.clone()));
                    field_start = false;
                }
                ',' => {
                    row.push(std::mem::take(&mut field));
                    field_start = true;
                }
                '\r' => {}
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                    field_start = true;
                }
                _ => {
                    field.push(c);
                    field_start = false;
                }
            }
        }

        let Some((at, saved)) = open.take() else {
            break;
        };
        log::warn!("Unterminated quote in roster at byte {}, reading it literally", at);
        row = saved;
        field.clear();
        field_start = true;
        literal_quote = Some(at);
        i = at;
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    // Blank lines carry no record
    rows.retain(|r| !(r.len() == 1 && r[0].trim().is_empty()));
    rows
}

/// Parse roster records; rows without a usable name are left for the
/// roster to drop
pub fn parse(text: &str) -> Vec<PlayerRecord> {
    let mut rows = split_rows(text).into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };

    let column = |names: &[&str]| {
        header
            .iter()
            .position(|h| names.contains(&h.trim().to_lowercase().as_str()))
    };
    let Some(name_col) = column(&["name"]) else {
        log::warn!("Roster header has no 'name' column");
        return Vec::new();
    };
    let points_col = column(&["points", "score"]);
    let avatar_col = column(&["avatar"]);

    let cell = |row: &[String], col: Option<usize>| {
        col.and_then(|i| row.get(i)).map(|s| s.trim().to_string())
    };

    rows.map(|row| {
        PlayerRecord::new(
            cell(&row, Some(name_col)).unwrap_or_default(),
            ScoreField::Text(cell(&row, points_col).unwrap_or_else(|| "0".to_string())),
            cell(&row, avatar_col).unwrap_or_default(),
        )
    })
    .collect()
}

/// Quote a field when it holds a delimiter, quote or line break
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Points cell: whole numbers without a fractional part, others exact
fn points_cell(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{:.0}", points)
    } else {
        points.to_string()
    }
}

/// Render records as CSV with the standard header
pub fn render(records: &[PlayerRecord]) -> String {
    let mut out = HEADER.join(",");
    out.push('\n');
    for record in records {
        out.push_str(&escape(&record.name));
        out.push(',');
        out.push_str(&points_cell(record.score.value()));
        out.push(',');
        out.push_str(&escape(&record.avatar_ref));
        out.push('\n');
    }
    out
}
