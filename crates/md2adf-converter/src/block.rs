//! Block scanner.
//!
//! Single forward pass over the input lines. At each line the rules are tried
//! in a fixed order: table, code fence, heading, bullet list, ordered list,
//! blank line, paragraph. The cursor never moves backwards.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{Block, CellKind, Document, ListItem, Table, TableCell, TableRow};
use crate::inline::parse_inline;

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

static BULLET_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s+").unwrap());

static ORDERED_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+").unwrap());

static TABLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|(?:[\s:-]+\|)+$").unwrap());

/// Code fence delimiter.
const FENCE: &str = "```";

/// Convert markdown text to a [`Document`].
///
/// Total over all inputs: malformed constructs become paragraphs or literal
/// text, and an unterminated code fence runs to the end of the input.
///
/// # Examples
///
/// ```
/// use md2adf_converter::{Block, Inline, convert};
///
/// let document = convert("# Title");
/// assert_eq!(
///     document.blocks,
///     vec![Block::Heading { level: 1, content: vec![Inline::plain("Title")] }]
/// );
/// ```
pub fn convert(markdown: &str) -> Document {
    BlockScanner::new(markdown).scan()
}

/// Kind of list a marker line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Ordered,
}

impl ListKind {
    fn marker(self) -> &'static Regex {
        match self {
            Self::Bullet => &BULLET_MARKER,
            Self::Ordered => &ORDERED_MARKER,
        }
    }

    fn into_block(self, items: Vec<ListItem>) -> Block {
        match self {
            Self::Bullet => Block::BulletList(items),
            Self::Ordered => Block::OrderedList(items),
        }
    }
}

struct BlockScanner<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> BlockScanner<'a> {
    fn new(markdown: &'a str) -> Self {
        let mut lines: Vec<&str> = markdown.lines().collect();
        // `lines()` drops the empty segment after a final newline; an
        // unterminated fence keeps it as a trailing newline in its text.
        if markdown.ends_with('\n') {
            lines.push("");
        }
        Self { lines, pos: 0 }
    }

    fn scan(mut self) -> Document {
        let mut blocks = Vec::new();

        while let Some(line) = self.current() {
            if is_table_line(line) {
                if let Some(table) = self.scan_table() {
                    blocks.push(Block::Table(table));
                }
            } else if let Some(info) = line.strip_prefix(FENCE) {
                blocks.push(self.scan_code_block(info));
            } else if let Some(caps) = HEADING.captures(line) {
                let level = u8::try_from(caps[1].len()).unwrap_or(6);
                blocks.push(Block::Heading {
                    level,
                    content: parse_inline(&caps[2]),
                });
                self.pos += 1;
            } else if BULLET_MARKER.is_match(line) {
                blocks.push(self.scan_list(ListKind::Bullet));
            } else if ORDERED_MARKER.is_match(line) {
                blocks.push(self.scan_list(ListKind::Ordered));
            } else if line.trim().is_empty() {
                self.pos += 1;
            } else {
                blocks.push(Block::Paragraph(parse_inline(line)));
                self.pos += 1;
            }
        }

        Document { blocks }
    }

    fn current(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Consume consecutive `|...|` lines.
    ///
    /// The first non-separator row is the header whether or not a separator
    /// follows it. Returns `None` when no data row survives.
    fn scan_table(&mut self) -> Option<Table> {
        let mut header: Option<Vec<String>> = None;
        let mut data_rows = Vec::new();

        while let Some(line) = self.current().filter(|line| is_table_line(line)) {
            self.pos += 1;
            let trimmed = line.trim();
            if TABLE_SEPARATOR.is_match(trimmed) {
                continue;
            }

            let cells = split_cells(trimmed);
            match &header {
                None => header = Some(cells),
                Some(names) => {
                    if cells.iter().any(|cell| !cell.is_empty()) {
                        data_rows.push(fit_to_width(cells, names.len()));
                    }
                }
            }
        }

        let header = header?;
        if data_rows.is_empty() {
            return None;
        }

        let mut rows = Vec::with_capacity(data_rows.len() + 1);
        rows.push(build_row(&header, CellKind::Header));
        rows.extend(data_rows.iter().map(|cells| build_row(cells, CellKind::Body)));
        Some(Table { rows })
    }

    /// Consume a fenced code block. `info` is the text after the opening fence.
    fn scan_code_block(&mut self, info: &str) -> Block {
        let language = Some(info.trim())
            .filter(|lang| !lang.is_empty())
            .map(str::to_owned);

        self.pos += 1;
        let start = self.pos;
        while self.current().is_some_and(|line| !line.starts_with(FENCE)) {
            self.pos += 1;
        }
        let text = self.lines[start..self.pos].join("\n");

        // Skip the closing fence; no-op at end of input.
        if self.current().is_some() {
            self.pos += 1;
        }

        Block::CodeBlock { language, text }
    }

    /// Consume consecutive lines carrying the same kind of list marker.
    fn scan_list(&mut self, kind: ListKind) -> Block {
        let marker = kind.marker();
        let mut items = Vec::new();

        while let Some((line, found)) = self
            .current()
            .and_then(|line| marker.find(line).map(|found| (line, found)))
        {
            items.push(ListItem {
                content: parse_inline(&line[found.end()..]),
            });
            self.pos += 1;
        }

        kind.into_block(items)
    }
}

/// Line whose trimmed form starts and ends with `|`.
fn is_table_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Split a trimmed `|a|b|` row into trimmed cell texts.
fn split_cells(row: &str) -> Vec<String> {
    row[1..row.len() - 1]
        .split('|')
        .map(|cell| cell.trim().to_owned())
        .collect()
}

/// Drop cells beyond `width` and pad missing ones with empty text.
fn fit_to_width(mut cells: Vec<String>, width: usize) -> Vec<String> {
    cells.resize(width, String::new());
    cells
}

fn build_row(cells: &[String], kind: CellKind) -> TableRow {
    TableRow {
        cells: cells
            .iter()
            .map(|text| TableCell {
                kind,
                content: parse_inline(text),
            })
            .collect(),
    }
}
