//! Plain-text tables for terminal output.

use colored::{Color, Colorize};
use learnx_core::account::AccountStatus;
use learnx_core::role_request::{RequestStatus, StatusTone};
use std::fmt;

/// One table cell, optionally coloured.
#[derive(Debug, Clone)]
pub struct Cell {
    text: String,
    color: Option<Color>,
}

impl Cell {
    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self { text, color: None }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

/// Left-aligned columns separated by two spaces.
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(Cell::width)
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect();
        writeln!(f, "{}", header.join("  ").trim_end().bold())?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| {
                    let padded = pad(&cell.text, *w);
                    match cell.color {
                        Some(color) => padded.color(color).to_string(),
                        None => padded,
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join("  ").trim_end())?;
        }
        Ok(())
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}

pub fn account_status_cell(status: AccountStatus) -> Cell {
    let color = match status {
        AccountStatus::Active => Color::Green,
        AccountStatus::Inactive => Color::Red,
        AccountStatus::Pending => Color::Yellow,
    };
    Cell::colored(status.label(), color)
}

pub fn request_status_cell(status: RequestStatus) -> Cell {
    let color = match status.tone() {
        StatusTone::Warning => Color::Yellow,
        StatusTone::Success => Color::Green,
        StatusTone::Error => Color::Red,
        StatusTone::Neutral => Color::White,
    };
    Cell::colored(status.code(), color)
}

/// `(B) Bob Tran`, or just the name when there is no initial.
pub fn avatar_label(initial: &str, name: &str) -> String {
    if initial.is_empty() {
        name.to_string()
    } else {
        format!("({}) {}", initial, name)
    }
}

/// `Page 2/3 (27 rows)`, with pages shown one-based.
pub fn page_footer(page: usize, page_count: usize, total: usize, noun: &str) -> String {
    format!(
        "Page {}/{} ({} {})",
        if page_count == 0 { 0 } else { page + 1 },
        page_count,
        total,
        noun
    )
}
