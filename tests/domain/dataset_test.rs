use tawau::domain::UploadKind;

#[test]
fn given_csv_mime_when_classifying_then_returns_csv_kind() {
    assert_eq!(
        UploadKind::from_upload("data.csv", Some("text/csv")),
        Some(UploadKind::Csv)
    );
}

#[test]
fn given_octet_stream_with_csv_extension_when_classifying_then_returns_csv_kind() {
    assert_eq!(
        UploadKind::from_upload("data.csv", Some("application/octet-stream")),
        Some(UploadKind::Csv)
    );
}

#[test]
fn given_uppercase_extension_when_classifying_then_returns_csv_kind() {
    assert_eq!(UploadKind::from_upload("DATA.CSV", None), Some(UploadKind::Csv));
}

#[test]
fn given_plain_text_upload_when_classifying_then_returns_none() {
    assert_eq!(UploadKind::from_upload("notes.txt", Some("text/plain")), None);
}
