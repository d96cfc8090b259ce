//! Browser-side table export
//!
//! The script reads the trimmed text of every `th`/`td` of the claims table,
//! header row included, serializes it the same way
//! `domain_claims::serialize_rows` does, and clicks a generated anchor
//! carrying a `data:` URI.

use serde_json::json;

use domain_claims::export::{LEGACY_CELL_DELIMITER, LEGACY_ROW_DELIMITER};
use domain_claims::ExportFormat;

pub const EXPORT_BUTTON_ID: &str = "export-claims";

const SCRIPT: &str = r#"<script>
(function () {
  "use strict";
  const EXPORT = __EXPORT_CONFIG__;

  function tableRows(table) {
    return Array.from(table.querySelectorAll("tr")).map(function (row) {
      return Array.from(row.querySelectorAll("th, td")).map(function (cell) {
        return cell.textContent.trim();
      });
    });
  }

  function csvCell(value) {
    return /[",\r\n]/.test(value) ? '"' + value.replace(/"/g, '""') + '"' : value;
  }

  function serialize(rows) {
    switch (EXPORT.format) {
      case "legacy_excel":
        return rows.map(function (cells) { return cells.join(EXPORT.cellDelimiter); })
          .join(EXPORT.rowDelimiter);
      case "json": {
        const header = rows.length ? rows[0] : [];
        const records = rows.slice(1).map(function (cells) {
          const record = {};
          header.forEach(function (key, i) { record[key] = i < cells.length ? cells[i] : ""; });
          return record;
        });
        return JSON.stringify(records, null, 2);
      }
      default:
        return rows.map(function (cells) { return cells.map(csvCell).join(",") + "\r\n"; }).join("");
    }
  }

  function downloadTable() {
    const table = document.getElementById(EXPORT.tableId);
    if (!table) {
      return;
    }
    const link = document.createElement("a");
    link.download = EXPORT.filename;
    link.href = "data:" + EXPORT.mime + ";charset=utf-8," + encodeURIComponent(serialize(tableRows(table)));
    document.body.appendChild(link);
    link.click();
    link.remove();
  }

  const button = document.getElementById(EXPORT.buttonId);
  if (button) {
    button.addEventListener("click", downloadTable);
  }
})();
</script>"#;

/// The inline `<script>` wiring the export button to `table_id`
pub fn render(format: ExportFormat, table_id: &str) -> String {
    let config = json!({
        "format": format.as_str(),
        "mime": format.mime_type(),
        "filename": format.filename(),
        "cellDelimiter": LEGACY_CELL_DELIMITER,
        "rowDelimiter": LEGACY_ROW_DELIMITER,
        "tableId": table_id,
        "buttonId": EXPORT_BUTTON_ID,
    });
    SCRIPT.replace("__EXPORT_CONFIG__", &config.to_string())
}

/// Label of the export button for a format
pub fn button_label(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Csv => "Export to CSV",
        ExportFormat::Json => "Export to JSON",
        ExportFormat::LegacyExcel => "Export to Excel",
    }
}
