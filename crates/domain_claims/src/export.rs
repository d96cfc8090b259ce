//! Table export
//!
//! Serializes the text of a rendered table into a downloadable file. Three
//! formats are supported:
//!
//! - [`ExportFormat::Csv`]: RFC 4180 CSV with CRLF line endings, quoted
//!   where a cell needs it.
//! - [`ExportFormat::Json`]: an array of objects keyed by column header.
//! - [`ExportFormat::LegacyExcel`]: the byte-for-byte output of the legacy
//!   "export to excel" button. Cells are joined with two tabs and two spaces,
//!   rows with a comma and a newline, nothing is escaped, and the file is
//!   named `filename` with a spreadsheet MIME type it does not match. Kept
//!   only for downstream scripts that parse that exact layout.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::ExportError;
use crate::table::ClaimsTable;

pub const LEGACY_CELL_DELIMITER: &str = "\t\t  ";
pub const LEGACY_ROW_DELIMITER: &str = ",\n";

pub const EXCEL_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const CSV_MIME_TYPE: &str = "text/csv";
pub const JSON_MIME_TYPE: &str = "application/json";

/// Download format for the claims table
///
/// Deserializes through [`FromStr`], so configuration accepts the same
/// case-insensitive names and aliases as the `format` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    LegacyExcel,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::LegacyExcel];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::LegacyExcel => "legacy_excel",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_MIME_TYPE,
            ExportFormat::Json => JSON_MIME_TYPE,
            ExportFormat::LegacyExcel => EXCEL_MIME_TYPE,
        }
    }

    /// Name offered to the browser for the downloaded file
    pub fn filename(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "pending-claims.csv",
            ExportFormat::Json => "pending-claims.json",
            ExportFormat::LegacyExcel => "filename",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "legacy_excel" | "legacy" | "excel" => Ok(ExportFormat::LegacyExcel),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ExportFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Serializes a claims table, header row included
pub fn serialize_table(table: &ClaimsTable, format: ExportFormat) -> Result<String, ExportError> {
    let content = serialize_rows(&table.text_rows(), format)?;
    debug!(
        format = %format,
        rows = table.rows().len(),
        bytes = content.len(),
        "Serialized claims table"
    );
    Ok(content)
}

/// Serializes rows of cell text; the first row is the header
pub fn serialize_rows(rows: &[Vec<String>], format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::LegacyExcel => Ok(to_legacy(rows)),
        ExportFormat::Csv => to_csv(rows),
        ExportFormat::Json => to_json(rows),
    }
}

fn to_legacy(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join(LEGACY_CELL_DELIMITER))
        .collect::<Vec<_>>()
        .join(LEGACY_ROW_DELIMITER)
}

fn to_csv(rows: &[Vec<String>]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}

fn to_json(rows: &[Vec<String>]) -> Result<String, ExportError> {
    let Some((header, body)) = rows.split_first() else {
        return Ok("[]".to_string());
    };
    let records: Vec<Value> = body
        .iter()
        .map(|row| {
            let object: Map<String, Value> = header
                .iter()
                .enumerate()
                .map(|(i, key)| {
                    let cell = row.get(i).cloned().unwrap_or_default();
                    (key.clone(), Value::String(cell))
                })
                .collect();
            Value::Object(object)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// The anchor the export button clicks: a `data:` URI plus the download name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadLink {
    pub download: String,
    pub href: String,
}

impl DownloadLink {
    pub fn for_content(content: &str, format: ExportFormat) -> Self {
        Self {
            download: format.filename().to_string(),
            href: format!(
                "data:{};charset=utf-8,{}",
                format.mime_type(),
                encode_uri_component(content)
            ),
        }
    }
}

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`,
/// matching the browser's `encodeURIComponent`
pub fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(char::from(byte));
            }
            _ => {
                out.push('%');
                out.push(char::from(HEX[usize::from(byte >> 4)]));
                out.push(char::from(HEX[usize::from(byte & 0x0F)]));
            }
        }
    }
    out
}
