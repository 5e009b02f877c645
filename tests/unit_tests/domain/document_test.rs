use mailtriage::domain::{ContentType, Document};

#[test]
fn given_content_type_when_describing_then_returns_mime() {
    assert_eq!(ContentType::Pdf.as_mime(), "application/pdf");
    assert_eq!(ContentType::Text.as_mime(), "text/plain");
}

#[test]
fn given_uppercase_extension_when_resolving_filename_then_matches_case_insensitively() {
    assert_eq!(
        ContentType::from_filename("RELATORIO.PDF"),
        Some(ContentType::Pdf)
    );
    assert_eq!(
        ContentType::from_filename("email.Txt"),
        Some(ContentType::Text)
    );
}

#[test]
fn given_multiple_dots_when_resolving_filename_then_uses_last_extension() {
    assert_eq!(
        ContentType::from_filename("email.pdf.docx"),
        None
    );
    assert_eq!(
        ContentType::from_filename("email.backup.txt"),
        Some(ContentType::Text)
    );
}

#[test]
fn given_filename_without_extension_when_resolving_then_returns_none() {
    assert_eq!(ContentType::from_filename("email"), None);
    assert_eq!(ContentType::from_filename(""), None);
}

#[test]
fn given_two_documents_when_created_then_ids_differ() {
    let first = Document::new("a.txt".to_string(), ContentType::Text, 10);
    let second = Document::new("a.txt".to_string(), ContentType::Text, 10);

    assert_ne!(first.id, second.id);
    assert_eq!(first.size_bytes, 10);
}
