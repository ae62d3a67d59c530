use std::io::Write;
use std::path::Path;

use labelnorm_core::LabelPair;

use crate::error::ExportError;
use crate::HEADERS;

/// Writes a header row and one row per pair, tab-separated.
///
/// Fields holding a tab, quote or line break are quoted. Rows end with
/// `\r\n`.
///
/// # Errors
///
/// Returns [`ExportError::Tsv`] if the file cannot be created or written.
pub fn write_tsv(pairs: &[LabelPair], path: &Path) -> Result<(), ExportError> {
    let to_error = |source| ExportError::Tsv {
        path: path.display().to_string(),
        source,
    };
    let file = std::fs::File::create(path).map_err(|e| to_error(csv::Error::from(e)))?;
    write_tsv_to(pairs, file).map_err(to_error)?;
    tracing::info!(path = %path.display(), rows = pairs.len(), "wrote TSV export");
    Ok(())
}

/// Same as [`write_tsv`] for any writer.
///
/// # Errors
///
/// Propagates serialization and I/O errors from the underlying writer.
pub fn write_tsv_to<W: Write>(pairs: &[LabelPair], writer: W) -> Result<(), csv::Error> {
    let mut tsv = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    tsv.write_record(HEADERS)?;
    for pair in pairs {
        tsv.write_record([pair.original.as_str(), pair.normalized.as_str()])?;
    }
    tsv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(original: &str, normalized: &str) -> LabelPair {
        LabelPair {
            original: original.to_owned(),
            normalized: normalized.to_owned(),
        }
    }

    fn render(pairs: &[LabelPair]) -> String {
        let mut buf = Vec::new();
        write_tsv_to(pairs, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_then_rows() {
        let out = render(&[
            pair("6X30G CHIPS LISSE NAT CRF CLAS", "CRF CHIPS LISSE NAT CLAS 6X30G"),
            pair("1L PET PUR JUS POMME CRF EXTRA", "CRF PET PUR JUS POMME EXTRA 1L"),
        ]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Original Label\tCorrected Label");
        assert_eq!(
            lines[1],
            "6X30G CHIPS LISSE NAT CRF CLAS\tCRF CHIPS LISSE NAT CLAS 6X30G"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn header_only_for_empty_batch() {
        assert_eq!(render(&[]), "Original Label\tCorrected Label\r\n");
    }

    #[test]
    fn rows_end_with_crlf() {
        let out = render(&[pair("SUCRE 1 KG", "SUCRE 1KG")]);
        assert_eq!(out, "Original Label\tCorrected Label\r\nSUCRE 1 KG\tSUCRE 1KG\r\n");
    }

    #[test]
    fn quotes_fields_with_tabs_or_quotes() {
        let out = render(&[pair("A\tB", "A B"), pair("12\" PIZZA", "12 PIZZA")]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "\"A\tB\"\tA B");
        assert_eq!(lines[2], "\"12\"\" PIZZA\"\t12 PIZZA");
    }
}
