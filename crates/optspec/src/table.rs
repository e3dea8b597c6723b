// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Summary tables of resolved options.

use serde_yaml::Value;

use crate::field::Field;
use crate::{Options, Schema};

#[cfg(test)]
#[path = "./table_test.rs"]
mod table_test;

/// Column headers of the resolved options summary.
pub const SUMMARY_HEADER: [&str; 5] = [
    "Variable",
    "Type",
    "Optional",
    "Default Value",
    "Assigned Value",
];

/// Column alignment of the resolved options summary.
pub const SUMMARY_ALIGN: [Align; 5] = [
    Align::Center,
    Align::Center,
    Align::Center,
    Align::Left,
    Align::Left,
];

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Lays out a table as text.
pub trait TableRenderer {
    /// Render `rows` under `header`; missing alignments default to left.
    fn render(&self, header: &[&str], rows: &[Vec<String>], align: &[Align]) -> String;
}

/// Plain-text grid with ASCII borders.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridRenderer;

impl TableRenderer for GridRenderer {
    fn render(&self, header: &[&str], rows: &[Vec<String>], align: &[Align]) -> String {
        let columns = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);

        let mut widths: Vec<usize> = (0..columns)
            .map(|i| header.get(i).map_or(0, |h| h.chars().count()))
            .collect();
        for row in rows {
            for (i, width) in widths.iter_mut().enumerate() {
                *width = (*width).max(cell(row, i).chars().count());
            }
        }

        let rule = |fill: char| {
            let mut line = String::from("+");
            for width in &widths {
                line.extend(std::iter::repeat_n(fill, width + 2));
                line.push('+');
            }
            line
        };
        let line = |cells: Vec<&str>| {
            let mut line = String::from("|");
            for (i, width) in widths.iter().enumerate() {
                let text = cells.get(i).copied().unwrap_or("");
                let align = align.get(i).copied().unwrap_or_default();
                line.push(' ');
                line.push_str(&pad(text, *width, align));
                line.push_str(" |");
            }
            line
        };

        let mut out = vec![rule('-'), line(header.to_vec()), rule('=')];
        for row in rows {
            out.push(line((0..columns).map(|i| cell(row, i)).collect()));
        }
        out.push(rule('-'));
        out.join("\n")
    }
}

fn cell(row: &[String], i: usize) -> &str {
    row.get(i).map(String::as_str).unwrap_or("")
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(text.chars().count());
    let (left, right) = match align {
        Align::Left => (0, fill),
        Align::Right => (fill, 0),
        Align::Center => (fill / 2, fill - fill / 2),
    };
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Wrap text into lines of at most `width` characters.
///
/// Lines break at whitespace; words longer than `width` are split.
/// Empty or whitespace-only text yields no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let used = current.chars().count();
            let sep = usize::from(used > 0);
            if used + sep + word.len() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.extend(word.iter());
                break;
            }
            if used > 0 {
                lines.push(std::mem::take(&mut current));
                continue;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Render a value for display in a table cell.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(display_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(mapping) => {
            let entries: Vec<String> = mapping
                .iter()
                .map(|(k, v)| format!("{}: {}", display_value(k), display_value(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => display_value(&tagged.value),
    }
}

/// Compose the summary rows for every schema field.
///
/// String values wider than `width` continue on following rows that only
/// fill the assigned value column.
pub fn summary_rows(schema: &Schema, options: &Options, width: usize) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for field in schema {
        let value = options.get(field.name()).unwrap_or(&Value::Null);
        let default = match field {
            Field::Optional { default, .. } => display_value(default),
            Field::Required { .. } => String::new(),
        };

        let mut assigned = match value {
            Value::String(s) if s.chars().count() > width => wrap(s, width),
            _ => Vec::new(),
        };
        if assigned.is_empty() {
            assigned.push(display_value(value));
        }

        let mut assigned = assigned.into_iter();
        rows.push(vec![
            field.name().to_string(),
            field.field_type().to_string(),
            field.is_optional().to_string(),
            default,
            assigned.next().unwrap_or_default(),
        ]);
        for continuation in assigned {
            rows.push(vec![
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                continuation,
            ]);
        }
    }
    rows
}

/// Render the resolved options summary.
pub fn render_summary(
    renderer: &dyn TableRenderer,
    schema: &Schema,
    options: &Options,
    width: usize,
) -> String {
    let rows = summary_rows(schema, options, width);
    renderer.render(&SUMMARY_HEADER, &rows, &SUMMARY_ALIGN)
}
