//! Result projections and the two output sinks.
//!
//! Each query shape returns exactly one row type. Shapes that can include the
//! description have a separate `Described*` row type instead of an optional
//! field, so equality (and therefore deduplication) only ever sees the
//! projected columns.

use crate::catalog::Record;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRow {
    pub service: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlatformServiceRow {
    pub platform: String,
    pub service: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SolutionRow {
    pub solution: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribedSolutionRow {
    pub solution: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlatformSolutionRow {
    pub platform: String,
    pub solution: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribedPlatformSolutionRow {
    pub platform: String,
    pub solution: String,
    pub description: String,
}

/// A row that can be rendered as a table line.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<&str>;
}

impl TableRow for Record {
    const HEADERS: &'static [&'static str] =
        &["Platform", "Category", "Service", "Solution", "Description"];

    fn cells(&self) -> Vec<&str> {
        vec![
            self.platform.as_str(),
            self.category.as_str(),
            self.service.as_str(),
            self.solution.as_str(),
            self.description.as_str(),
        ]
    }
}

impl TableRow for ServiceRow {
    const HEADERS: &'static [&'static str] = &["Service"];

    fn cells(&self) -> Vec<&str> {
        vec![self.service.as_str()]
    }
}

impl TableRow for PlatformServiceRow {
    const HEADERS: &'static [&'static str] = &["Platform", "Service"];

    fn cells(&self) -> Vec<&str> {
        vec![self.platform.as_str(), self.service.as_str()]
    }
}

impl TableRow for SolutionRow {
    const HEADERS: &'static [&'static str] = &["Solution"];

    fn cells(&self) -> Vec<&str> {
        vec![self.solution.as_str()]
    }
}

impl TableRow for DescribedSolutionRow {
    const HEADERS: &'static [&'static str] = &["Solution", "Description"];

    fn cells(&self) -> Vec<&str> {
        vec![self.solution.as_str(), self.description.as_str()]
    }
}

impl TableRow for PlatformSolutionRow {
    const HEADERS: &'static [&'static str] = &["Platform", "Solution"];

    fn cells(&self) -> Vec<&str> {
        vec![self.platform.as_str(), self.solution.as_str()]
    }
}

impl TableRow for DescribedPlatformSolutionRow {
    const HEADERS: &'static [&'static str] = &["Platform", "Solution", "Description"];

    fn cells(&self) -> Vec<&str> {
        vec![
            self.platform.as_str(),
            self.solution.as_str(),
            self.description.as_str(),
        ]
    }
}

/// The result sequence of one query, typed by its projection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Records(Vec<Record>),
    Services(Vec<ServiceRow>),
    PlatformServices(Vec<PlatformServiceRow>),
    Solutions(Vec<SolutionRow>),
    DescribedSolutions(Vec<DescribedSolutionRow>),
    PlatformSolutions(Vec<PlatformSolutionRow>),
    DescribedPlatformSolutions(Vec<DescribedPlatformSolutionRow>),
}

macro_rules! with_rows {
    ($output:expr, $rows:ident => $body:expr) => {
        match $output {
            QueryOutput::Records($rows) => $body,
            QueryOutput::Services($rows) => $body,
            QueryOutput::PlatformServices($rows) => $body,
            QueryOutput::Solutions($rows) => $body,
            QueryOutput::DescribedSolutions($rows) => $body,
            QueryOutput::PlatformSolutions($rows) => $body,
            QueryOutput::DescribedPlatformSolutions($rows) => $body,
        }
    };
}

impl QueryOutput {
    pub fn len(&self) -> usize {
        with_rows!(self, rows => rows.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Structured sink: one JSON object per line.
    pub fn write_json_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        with_rows!(self, rows => write_json_lines(rows, out))
    }

    /// Human sink: a padded text table. Empty results render as nothing.
    pub fn render_table(&self) -> String {
        with_rows!(self, rows => render_table(rows))
    }
}

fn write_json_lines<T: Serialize, W: Write>(rows: &[T], out: &mut W) -> io::Result<()> {
    for row in rows {
        serde_json::to_writer(&mut *out, row)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

fn render_table<T: TableRow>(rows: &[T]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    let cells: Vec<Vec<&str>> = rows.iter().map(TableRow::cells).collect();
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut table = String::new();
    push_line(&mut table, T::HEADERS, &widths);
    push_line(&mut table, separators.as_slice(), &widths);
    for line in &cells {
        push_line(&mut table, line.as_slice(), &widths);
    }
    table
}

fn push_line<S: AsRef<str>>(table: &mut String, cells: &[S], widths: &[usize]) {
    let mut line = String::new();
    for (idx, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if idx > 0 {
            line.push(' ');
        }
        let cell = cell.as_ref();
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat_n(' ', pad));
    }
    table.push_str(line.trim_end());
    table.push('\n');
}
