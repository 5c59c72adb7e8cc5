//! Table extraction from storage-format content.
//!
//! Each table becomes a list of records keyed by header text. Header cells
//! come from a `<th>` row, or from the first row when no `<th>` precedes it.
//! Tables without data rows are omitted.

use std::sync::LazyLock;

use md2adf_converter::Record;
use regex::Regex;
use serde::Serialize;
use serde::ser::Serializer;

static TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<table[^>]*>(.*?)</table>").unwrap());

static ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").unwrap());

static HEADER_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<th[^>]*>(.*?)</th>").unwrap());

static DATA_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td[^>]*>(.*?)</td>").unwrap());

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Tables of one page, serialized as `{pageId, pageTitle, tables}` with
/// records as JSON objects in header order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTables {
    /// Page ID.
    pub page_id: String,
    /// Page title.
    pub page_title: String,
    /// Extracted tables.
    #[serde(serialize_with = "serialize_tables")]
    pub tables: Vec<Vec<Record>>,
}

/// Extract all tables with at least one data row.
pub fn extract_tables(storage: &str) -> Vec<Vec<Record>> {
    TABLE
        .captures_iter(storage)
        .map(|caps| extract_records(&caps[1]))
        .filter(|records| !records.is_empty())
        .collect()
}

fn extract_records(table: &str) -> Vec<Record> {
    let mut headers: Vec<String> = Vec::new();
    let mut records = Vec::new();
    let mut first_row = true;

    for row in ROW.captures_iter(table) {
        let row = &row[1];

        if HEADER_CELL.is_match(row) {
            headers.extend(cell_texts(&HEADER_CELL, row));
            first_row = false;
            continue;
        }

        let cells = cell_texts(&DATA_CELL, row);
        if headers.is_empty() && first_row && !cells.is_empty() {
            headers = cells;
            first_row = false;
            continue;
        }
        first_row = false;

        if !headers.is_empty() && cells.iter().any(|cell| !cell.is_empty()) {
            records.push(record(&headers, &cells));
        }
    }

    records
}

fn cell_texts(pattern: &Regex, row: &str) -> Vec<String> {
    pattern
        .captures_iter(row)
        .map(|caps| storage_text(&caps[1]))
        .collect()
}

/// Pair headers with cells; a repeated header keeps its first position and
/// takes the later value.
fn record(headers: &[String], cells: &[String]) -> Record {
    let mut record: Record = Vec::with_capacity(headers.len());
    for (i, header) in headers.iter().enumerate() {
        let value = cells.get(i).cloned().unwrap_or_default();
        match record.iter_mut().find(|(name, _)| name == header) {
            Some(existing) => existing.1 = value,
            None => record.push((header.clone(), value)),
        }
    }
    record
}

/// Plain text of a storage-format fragment.
///
/// Line breaks become newlines before whitespace is collapsed, so they end
/// up as single spaces, as do all other whitespace runs.
pub fn storage_text(fragment: &str) -> String {
    let text = LINE_BREAK.replace_all(fragment, "\n");
    let text = TAG.replace_all(&text, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");
    WHITESPACE.replace_all(&text, " ").trim().to_owned()
}

fn serialize_tables<S: Serializer>(tables: &[Vec<Record>], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(tables.iter().map(|records| {
        records.iter().map(RecordObject).collect::<Vec<_>>()
    }))
}

/// A record as a JSON object in header order.
struct RecordObject<'a>(&'a Record);

impl Serialize for RecordObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(items: &[(&str, &str)]) -> Record {
        items
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_th_header_row() {
        let storage = "<table><tbody>\
            <tr><th>Service</th><th>Owner</th></tr>\
            <tr><td>api</td><td><p>Ada</p></td></tr>\
            </tbody></table>";
        assert_eq!(
            extract_tables(storage),
            vec![vec![pairs(&[("Service", "api"), ("Owner", "Ada")])]]
        );
    }

    #[test]
    fn test_first_td_row_is_header() {
        let storage = "<table><tr><td>Key</td><td>Value</td></tr>\
            <tr><td>a</td></tr></table>";
        assert_eq!(
            extract_tables(storage),
            vec![vec![pairs(&[("Key", "a"), ("Value", "")])]]
        );
    }

    #[test]
    fn test_empty_rows_and_header_only_tables_skipped() {
        let storage = "<table><tr><th>A</th></tr><tr><td> </td></tr></table>\
            <table><tr><th>B</th></tr><tr><td>x</td></tr></table>";
        assert_eq!(extract_tables(storage), vec![vec![pairs(&[("B", "x")])]]);
    }

    #[test]
    fn test_storage_text() {
        assert_eq!(
            storage_text("<p>a&nbsp;&amp;<br/>b  &lt;c&gt; &quot;d&quot;</p>"),
            "a & b <c> \"d\""
        );
    }

    #[test]
    fn test_duplicate_header_takes_last_value() {
        assert_eq!(
            record(
                &["A".to_owned(), "A".to_owned()],
                &["1".to_owned(), "2".to_owned()]
            ),
            pairs(&[("A", "2")])
        );
    }

    #[test]
    fn test_page_tables_json_keeps_header_order() {
        let tables = PageTables {
            page_id: "1".to_owned(),
            page_title: "T".to_owned(),
            tables: vec![vec![pairs(&[("Zeta", "z"), ("Alpha", "a")])]],
        };
        assert_eq!(
            serde_json::to_string(&tables).unwrap(),
            r#"{"pageId":"1","pageTitle":"T","tables":[[{"Zeta":"z","Alpha":"a"}]]}"#
        );
    }
}
