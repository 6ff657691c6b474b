use rust_xlsxwriter::{Format, Workbook};

use crate::errors::InternalError;
use crate::errors::internal::ExportError;
use crate::types::internal::AuditEventView;

pub const EXPORT_SHEET_NAME: &str = "Audit Events";

/// Fixed column order of every export
pub const EXPORT_COLUMNS: [&str; 10] = [
    "ID",
    "Event Timestamp",
    "Functionality",
    "Event Type",
    "Store Name",
    "Company Name",
    "User",
    "Message",
    "Status",
    "Additional Data",
];

const MAX_COLUMN_WIDTH: usize = 50;

/// Longest string Excel stores in one cell
pub const MAX_CELL_CHARS: usize = 32_767;

/// Renders a page of events into a downloadable document
pub trait ExportFormatter: Send + Sync {
    /// Render `events`; an empty slice yields a header-only document
    fn format(&self, events: &[AuditEventView]) -> Result<Vec<u8>, InternalError>;

    fn file_extension(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportCell {
    Number(i64),
    Text(String),
}

impl ExportCell {
    fn display_len(&self) -> usize {
        match self {
            ExportCell::Number(n) => n.to_string().len(),
            ExportCell::Text(s) => s.chars().count(),
        }
    }
}

/// One row of cells per event, in `EXPORT_COLUMNS` order
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub rows: Vec<Vec<ExportCell>>,
}

impl ExportTable {
    pub fn from_events(events: &[AuditEventView]) -> Result<Self, ExportError> {
        let rows = events
            .iter()
            .map(export_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    /// Column widths: longest cell or header plus two, capped at 50
    pub fn column_widths(&self) -> Vec<usize> {
        EXPORT_COLUMNS
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let longest = self
                    .rows
                    .iter()
                    .map(|row| row[col].display_len())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0);
                (longest + 2).min(MAX_COLUMN_WIDTH)
            })
            .collect()
    }
}

fn export_row(event: &AuditEventView) -> Result<Vec<ExportCell>, ExportError> {
    let additional_data = match &event.additional_data {
        Some(value) => serde_json::to_string(value).map_err(|e| ExportError::AdditionalData(e.to_string()))?,
        None => String::new(),
    };

    Ok(vec![
        ExportCell::Number(event.id),
        text_cell(&event.event_timestamp),
        text_cell(&event.functionality),
        text_cell(&event.event_type),
        text_cell(event.store_name.as_deref().unwrap_or_default()),
        text_cell(event.company_name.as_deref().unwrap_or_default()),
        text_cell(&event.user_name),
        text_cell(&event.message),
        text_cell(event.status.as_str()),
        text_cell(&additional_data),
    ])
}

fn text_cell(value: &str) -> ExportCell {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => ExportCell::Text(value[..cut].to_string()),
        None => ExportCell::Text(value.to_string()),
    }
}

/// Excel workbook exporter
pub struct XlsxExporter;

impl XlsxExporter {
    fn render(&self, table: &ExportTable) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(EXPORT_SHEET_NAME)?;

        for (col, header) in EXPORT_COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (index, row) in table.rows.iter().enumerate() {
            let row_num = index as u32 + 1;
            for (col, cell) in row.iter().enumerate() {
                match cell {
                    ExportCell::Number(n) => worksheet.write_number(row_num, col as u16, *n as f64)?,
                    ExportCell::Text(s) => worksheet.write_string(row_num, col as u16, s.as_str())?,
                };
            }
        }

        for (col, width) in table.column_widths().into_iter().enumerate() {
            worksheet.set_column_width(col as u16, width as f64)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}

impl ExportFormatter for XlsxExporter {
    fn format(&self, events: &[AuditEventView]) -> Result<Vec<u8>, InternalError> {
        let table = ExportTable::from_events(events)?;
        let bytes = self.render(&table)?;

        tracing::debug!(rows = table.rows.len(), bytes = bytes.len(), "Rendered audit export");

        Ok(bytes)
    }

    fn file_extension(&self) -> &'static str {
        "xlsx"
    }
}
