use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read labels from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write TSV to {path}: {source}")]
    Tsv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[cfg(feature = "xlsx")]
    #[error("failed to write spreadsheet to {path}: {source}")]
    Xlsx {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("spreadsheet export is not compiled in (enable the `xlsx` feature)")]
    XlsxUnavailable,
}
