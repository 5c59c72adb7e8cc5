//! Typed document tree produced by [`convert`](crate::convert).

/// Converted document: block nodes in source line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level blocks.
    pub blocks: Vec<Block>,
}

impl Document {
    /// Returns `true` if the document contains no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over all tables in the document.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }
}

/// Top-level structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading with level 1-6.
    Heading {
        /// Number of leading `#` characters.
        level: u8,
        /// Heading text.
        content: Vec<Inline>,
    },
    /// Single line of text.
    Paragraph(Vec<Inline>),
    /// Run of `-` or `*` marked lines.
    BulletList(Vec<ListItem>),
    /// Run of `1.` style marked lines. Source numbering is discarded.
    OrderedList(Vec<ListItem>),
    /// Fenced code, kept verbatim.
    CodeBlock {
        /// Text after the opening fence, if any.
        language: Option<String>,
        /// Lines between the fences joined with `\n`.
        text: String,
    },
    /// Pipe table with a header row and at least one data row.
    Table(Table),
}

/// List entry; rendered as a single paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    /// Item text with the list marker stripped.
    pub content: Vec<Inline>,
}

/// Pipe table.
///
/// The first row is always the header row. Every data row has exactly as
/// many cells as the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Header row followed by data rows.
    pub rows: Vec<TableRow>,
}

/// Header/value pairs of a single data row, in column order.
pub type Record = Vec<(String, String)>;

impl Table {
    /// Header row, if the table has any rows.
    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }

    /// Data rows (everything after the header).
    pub fn data_rows(&self) -> &[TableRow] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Header names as plain text.
    pub fn headers(&self) -> Vec<String> {
        self.header()
            .map(|row| row.cells.iter().map(TableCell::plain_text).collect())
            .unwrap_or_default()
    }

    /// Data rows keyed by header name.
    ///
    /// ```
    /// use md2adf_converter::{Block, convert};
    ///
    /// let document = convert("| Name | Role |\n| Ada | **admin** |");
    /// let Block::Table(table) = &document.blocks[0] else { unreachable!() };
    /// assert_eq!(
    ///     table.records(),
    ///     vec![vec![
    ///         ("Name".to_owned(), "Ada".to_owned()),
    ///         ("Role".to_owned(), "admin".to_owned()),
    ///     ]]
    /// );
    /// ```
    pub fn records(&self) -> Vec<Record> {
        let headers = self.headers();
        self.data_rows()
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .cloned()
                    .zip(row.cells.iter().map(TableCell::plain_text))
                    .collect()
            })
            .collect()
    }
}

/// Table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    /// Cells in column order.
    pub cells: Vec<TableCell>,
}

/// Table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    /// Header or body cell.
    pub kind: CellKind,
    /// Cell text.
    pub content: Vec<Inline>,
}

impl TableCell {
    /// Cell text without marks.
    pub fn plain_text(&self) -> String {
        plain_text(&self.content)
    }
}

/// Whether a cell belongs to the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Header,
    Body,
}

/// Text run carrying at most one style mark.
///
/// Marks do not nest: bold and italic together is not representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inline {
    /// Literal text, delimiters stripped.
    pub text: String,
    /// Style mark, if any.
    pub mark: Option<Mark>,
}

impl Inline {
    /// Unmarked text run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mark: None,
        }
    }

    /// Marked text run.
    pub fn marked(text: impl Into<String>, mark: Mark) -> Self {
        Self {
            text: text.into(),
            mark: Some(mark),
        }
    }
}

/// Style annotation attached to an inline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
    /// `` `text` ``
    Code,
    /// `[text](href)`
    Link {
        /// Link target.
        href: String,
    },
}

/// Concatenate inline runs into plain text.
pub fn plain_text(content: &[Inline]) -> String {
    content.iter().map(|inline| inline.text.as_str()).collect()
}
