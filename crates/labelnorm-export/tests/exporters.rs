use labelnorm_core::LabelPair;
use labelnorm_export::{read_labels, write_tsv, write_xlsx, ExportError};

fn sample_pairs() -> Vec<LabelPair> {
    vec![
        LabelPair {
            original: "6X30G CHIPS LISSE NAT CRF CLAS".to_owned(),
            normalized: "CRF CHIPS LISSE NAT CLAS 6X30G".to_owned(),
        },
        LabelPair {
            original: "Désodorisant 2.5ml 4scent".to_owned(),
            normalized: "DESODORISANT 4SCENT 2,5ML".to_owned(),
        },
    ]
}

#[test]
fn labels_file_round_trips_into_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("labels.txt");
    std::fs::write(&input, "6X30G CHIPS LISSE NAT CRF CLAS\n\n  Désodorisant 2.5ml 4scent \n").unwrap();

    let labels = read_labels(&input).unwrap();
    assert_eq!(
        labels,
        ["6X30G CHIPS LISSE NAT CRF CLAS", "Désodorisant 2.5ml 4scent"]
    );

    let output = dir.path().join("out.tsv");
    write_tsv(&sample_pairs(), &output).unwrap();
    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "Original Label\tCorrected Label\r\n\
         6X30G CHIPS LISSE NAT CRF CLAS\tCRF CHIPS LISSE NAT CLAS 6X30G\r\n\
         Désodorisant 2.5ml 4scent\tDESODORISANT 4SCENT 2,5ML\r\n"
    );
}

#[test]
fn tsv_into_missing_directory_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing").join("out.tsv");
    let err = write_tsv(&sample_pairs(), &output).unwrap_err();
    assert!(matches!(err, ExportError::Tsv { .. }));
}

#[cfg(feature = "xlsx")]
#[test]
fn xlsx_export_writes_a_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.xlsx");
    write_xlsx(&sample_pairs(), &output).unwrap();
    let bytes = std::fs::read(&output).unwrap();
    // xlsx files are zip archives.
    assert!(bytes.starts_with(b"PK"));
}

#[cfg(feature = "xlsx")]
#[test]
fn xlsx_export_handles_empty_batch() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("empty.xlsx");
    assert!(write_xlsx(&[], &output).is_ok());
}

#[cfg(not(feature = "xlsx"))]
#[test]
fn xlsx_export_unavailable_without_feature() {
    let dir = tempfile::tempdir().unwrap();
    let err = write_xlsx(&sample_pairs(), &dir.path().join("out.xlsx")).unwrap_err();
    assert!(matches!(err, ExportError::XlsxUnavailable));
}
