use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Workbook generation failed: {0}")]
    Workbook(String),

    #[error("Failed to serialize additional data: {0}")]
    AdditionalData(String),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::Workbook(err.to_string())
    }
}
