//! Styled spreadsheet export.
//!
//! Presentation only: the sheet carries the same two columns as the TSV
//! export with a styled, frozen, filterable header row.

use std::path::Path;

use labelnorm_core::LabelPair;

use crate::error::ExportError;

#[cfg(feature = "xlsx")]
pub const SHEET_NAME: &str = "Processed Labels";
#[cfg(feature = "xlsx")]
pub const COLUMN_WIDTH: f64 = 50.0;
#[cfg(feature = "xlsx")]
const HEADER_FILL: u32 = 0x0036_6092;

/// Writes `pairs` to a styled `.xlsx` workbook.
///
/// # Errors
///
/// Returns [`ExportError::Xlsx`] if the workbook cannot be built or saved.
#[cfg(feature = "xlsx")]
pub fn write_xlsx(pairs: &[LabelPair], path: &Path) -> Result<(), ExportError> {
    build_workbook(pairs, path).map_err(|source| ExportError::Xlsx {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), rows = pairs.len(), "wrote spreadsheet export");
    Ok(())
}

/// Spreadsheet support was left out of this build.
///
/// # Errors
///
/// Always returns [`ExportError::XlsxUnavailable`].
#[cfg(not(feature = "xlsx"))]
pub fn write_xlsx(pairs: &[LabelPair], path: &Path) -> Result<(), ExportError> {
    tracing::warn!(
        path = %path.display(),
        rows = pairs.len(),
        "spreadsheet export requested but the `xlsx` feature is disabled"
    );
    Err(ExportError::XlsxUnavailable)
}

#[cfg(feature = "xlsx")]
fn build_workbook(pairs: &[LabelPair], path: &Path) -> Result<(), rust_xlsxwriter::XlsxError> {
    use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};

    let header_format = Format::new()
        .set_font_name("Calibri")
        .set_font_size(12)
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    let cell_format = Format::new()
        .set_font_name("Calibri")
        .set_font_size(11)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::Top)
        .set_text_wrap()
        .set_border(FormatBorder::Thin);

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in (0u16..).zip(crate::HEADERS) {
        sheet.write_string_with_format(0, col, header, &header_format)?;
    }

    let mut last_row = 0u32;
    for (row, pair) in (1u32..).zip(pairs) {
        sheet.write_string_with_format(row, 0, &pair.original, &cell_format)?;
        sheet.write_string_with_format(row, 1, &pair.normalized, &cell_format)?;
        last_row = row;
    }

    sheet.set_column_width(0, COLUMN_WIDTH)?;
    sheet.set_column_width(1, COLUMN_WIDTH)?;
    sheet.set_freeze_panes(1, 0)?;
    sheet.autofilter(0, 0, last_row, 1)?;

    workbook.save(path)?;
    Ok(())
}
