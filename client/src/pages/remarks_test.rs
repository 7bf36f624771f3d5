use super::*;
use rules::validators::{IMAGE_MESSAGE, MAX_IMAGE_BYTES, REQUIRED_MESSAGE};

fn image(size: u64) -> FileMeta {
    FileMeta { name: "receipt.png".to_owned(), size }
}

#[test]
fn validate_remark_trims_text() {
    let remark = validate_remark("  Paid in full on delivery  ", &[]).expect("valid remark");
    assert_eq!(remark.text, "Paid in full on delivery");
    assert!(remark.attachments.is_empty());
}

#[test]
fn validate_remark_requires_text() {
    let errors = validate_remark("   ", &[]).unwrap_err();
    assert_eq!(errors.text.as_deref(), Some(REQUIRED_MESSAGE));
    assert_eq!(errors.attachments, None);
}

#[test]
fn validate_remark_enforces_min_length() {
    let errors = validate_remark("too short", &[]).unwrap_err();
    assert_eq!(
        errors.text.as_deref(),
        Some("The Min Character field must be at least 10 characters")
    );
}

#[test]
fn validate_remark_keeps_small_attachments() {
    let remark = validate_remark("Receipt attached below", &[image(1024), image(2048)]).expect("valid remark");
    assert_eq!(remark.attachments.len(), 2);
}

#[test]
fn validate_remark_rejects_any_oversized_attachment() {
    let errors = validate_remark("Receipt attached below", &[image(1024), image(MAX_IMAGE_BYTES)]).unwrap_err();
    assert_eq!(errors.text, None);
    assert_eq!(errors.attachments.as_deref(), Some(IMAGE_MESSAGE));
}

#[test]
fn attachments_clear_forgets_files_and_renews_picker() {
    let mut attachments = Attachments::default();
    attachments.pick(vec![image(1024)]);
    let picker = attachments.picker();

    attachments.clear();

    assert!(attachments.files().is_empty());
    assert_ne!(attachments.picker(), picker);
}

#[test]
fn attachments_pick_keeps_picker() {
    let mut attachments = Attachments::default();
    attachments.pick(vec![image(1024), image(2048)]);
    assert_eq!(attachments.files().len(), 2);
    assert_eq!(attachments.picker(), 0);
}
